use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p`
  /// to `q` to `r`.
  ///
  /// This is the sign of `(q.x-p.x)*(r.y-p.y) - (r.x-p.x)*(q.y-p.y)`. The
  /// determinant is evaluated with adaptive precision so the sign is exact
  /// for every pair of finite `f64` coordinates.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use asteroid_view::data::Point;
  /// # use asteroid_view::Orientation;
  /// let p1 = Point::new_nn([ 0.0, 0.0 ]);
  /// let p2 = Point::new_nn([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p: &Point, q: &Point, r: &Point) -> Orientation {
    Orientation::from_cross(geometry_predicates::predicates::orient2d(
      p.to_array(),
      q.to_array(),
      r.to_array(),
    ))
  }

  /// Classify the signed area of a triangle or any other cross product.
  pub fn from_cross(cross: f64) -> Orientation {
    if cross > 0.0 {
      Orientation::CounterClockWise
    } else if cross < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
