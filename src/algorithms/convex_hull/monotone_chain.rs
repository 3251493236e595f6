use crate::data::{Hull, Point};
use crate::Error;

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    All Ok results are valid strictly convex hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] algorithm. The points are sorted by x and then y,
/// the lower chain is built walking left to right and the upper chain walking
/// right to left. Points in the middle of a hull edge are discarded.
///
/// # Errors
/// Will return [`Error::DegenerateHull`] iff the input set contains less than
/// three distinct points or all the points are colinear.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * The first vertex is the smallest point (lowest x, then lowest y).
///
/// # Examples
///
/// ```rust
/// # use asteroid_view::algorithms::convex_hull;
/// # use asteroid_view::data::Point;
/// # use asteroid_view::Error;
/// let line = vec![
///   Point::new_nn([0.0, 0.0]),
///   Point::new_nn([1.0, 1.0]),
///   Point::new_nn([2.0, 2.0]),
/// ];
/// assert_eq!(convex_hull(line).err(), Some(Error::DegenerateHull));
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull(mut pts: Vec<Point>) -> Result<Hull, Error> {
  pts.sort_unstable();
  pts.dedup();
  if pts.len() < 3 {
    return Err(Error::DegenerateHull);
  }
  let mut lower = half_hull(pts.iter());
  let upper = half_hull(pts.iter().rev());
  // Both chains start and end on the two extreme points.
  lower.extend_from_slice(&upper[1..upper.len() - 1]);
  if lower.len() < 3 {
    return Err(Error::DegenerateHull);
  }
  Ok(Hull::new_unchecked(lower))
}

fn half_hull<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
  let mut chain: Vec<Point> = Vec::new();
  for pt in pts {
    keep_left(&mut chain, *pt);
  }
  chain
}

// Pop the middle point until the last two points and `pt` make a strict left turn.
fn keep_left(chain: &mut Vec<Point>, pt: Point) {
  while let [.., p, q] = chain.as_slice() {
    if p.orientation(q, &pt).is_ccw() {
      break;
    }
    chain.pop();
  }
  chain.push(pt);
}
