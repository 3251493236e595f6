use tracing::trace;

use crate::data::{Hull, Point};
use crate::Error;

/// $O(1)$ Interior angle at `p1`, in degrees, between the rays towards `p0`
/// and `p2`.
///
/// Uses the law of cosines on squared distances:
///
/// ```text
/// a = |p1-p0|²,  b = |p1-p2|²,  c = |p0-p2|²
/// angle = acos((a + b - c) / (2·sqrt(a·b)))
/// ```
///
/// The angle doesn't depend on scale, so the offsets between the points are
/// divided by their largest component before squaring. Any finite coordinates
/// work without overflow. The cosine is clamped to `[-1, 1]` so rounding can't
/// leave the domain of `acos`. The result lies in `[0, 180]`.
///
/// # Errors
/// * [`Error::DuplicatePoints`] if `p1` coincides with `p0` or `p2`.
/// * [`Error::NumericDomain`] if the cosine still isn't a finite number.
///
/// # Examples
///
/// ```rust
/// # use asteroid_view::algorithms::view_angle;
/// # use asteroid_view::data::Point;
/// let angle = view_angle(
///   &Point::new_nn([10.0, 0.0]),
///   &Point::new_nn([0.0, 0.0]),
///   &Point::new_nn([0.0, 10.0]),
/// ).unwrap();
/// assert_eq!(angle, 90.0);
/// ```
pub fn view_angle(p0: &Point, p1: &Point, p2: &Point) -> Result<f64, Error> {
  if p0 == p1 || p1 == p2 {
    return Err(Error::DuplicatePoints);
  }
  let u = half_offset(p1, p0);
  let v = half_offset(p1, p2);
  let w = half_offset(p0, p2);
  let scale = u
    .iter()
    .chain(&v)
    .chain(&w)
    .fold(0.0_f64, |max, d| max.max(d.abs()));
  let squared_len = |[x, y]: [f64; 2]| {
    let (x, y) = (x / scale, y / scale);
    x * x + y * y
  };
  let a = squared_len(u);
  let b = squared_len(v);
  let c = squared_len(w);
  let cos = (a + b - c) / (2.0 * (a * b).sqrt());
  if !cos.is_finite() {
    return Err(Error::NumericDomain);
  }
  Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

// Half of `to - from`. Halving first keeps the difference of any two finite
// coordinates finite.
fn half_offset(from: &Point, to: &Point) -> [f64; 2] {
  [
    to.x_coord() * 0.5 - from.x_coord() * 0.5,
    to.y_coord() * 0.5 - from.y_coord() * 0.5,
  ]
}

/// $O(n)$ Every hull vertex paired with its view angle, in hull order.
pub fn view_angles(hull: &Hull) -> Result<Vec<(Point, f64)>, Error> {
  hull
    .iter_neighbors()
    .map(|(prev, this, next)| {
      let angle = view_angle(prev, this, next)?;
      trace!(vertex = %this, angle, "view angle");
      Ok((*this, angle))
    })
    .collect()
}

/// $O(n)$ Hull vertex with the narrowest view of its two neighbors.
///
/// If several vertices share the smallest angle, the first one in hull order
/// wins. Hulls from [`convex_hull`](crate::algorithms::convex_hull()) start at
/// the point with the lowest x (then lowest y) coordinate.
///
/// # Errors
/// Propagates the errors of [`view_angle`].
///
/// # Examples
///
/// ```rust
/// # use asteroid_view::algorithms::{convex_hull, narrowest_view};
/// # use asteroid_view::data::Point;
/// let hull = convex_hull(vec![
///   Point::new_nn([0.0, 0.0]),
///   Point::new_nn([4.0, 0.0]),
///   Point::new_nn([4.0, 1.0]),
///   Point::new_nn([0.0, 2.0]),
/// ]).unwrap();
/// assert_eq!(narrowest_view(&hull), Ok(Point::new_nn([0.0, 2.0])));
/// ```
pub fn narrowest_view(hull: &Hull) -> Result<Point, Error> {
  view_angles(hull)?
    .into_iter()
    .reduce(|best, candidate| {
      if candidate.1 < best.1 {
        candidate
      } else {
        best
      }
    })
    .map(|(vertex, _angle)| vertex)
    .ok_or(Error::DegenerateHull)
}
