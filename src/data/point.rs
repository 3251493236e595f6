use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use crate::Orientation;

/// An asteroid position.
///
/// Coordinates are never NaN, so points are totally ordered. The order is
/// lexicographic: first by x, then by y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
  pub array: [NotNan<f64>; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new_nn([rng.gen(), rng.gen()])
  }
}

impl Point {
  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [f64; 2]) -> Point {
    match Point::try_from(array) {
      Ok(pt) => pt,
      Err(FloatIsNan) => panic!("NaN coordinate in {:?}", array),
    }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub fn to_array(&self) -> [f64; 2] {
    [self.x_coord(), self.y_coord()]
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl TryFrom<[f64; 2]> for Point {
  type Error = FloatIsNan;
  fn try_from(array: [f64; 2]) -> Result<Point, FloatIsNan> {
    Ok(Point {
      array: [NotNan::new(array[0])?, NotNan::new(array[1])?],
    })
  }
}

/// Prints `x y`. Whole numbers are printed without a fractional part.
impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", Coordinate(self.x_coord()), Coordinate(self.y_coord()))
  }
}

struct Coordinate(f64);

impl fmt::Display for Coordinate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // f64's Display already drops the ".0" of whole numbers and never uses an
    // exponent. Only the sign of negative zero needs fixing.
    if self.0 == 0.0 {
      write!(f, "0")
    } else {
      write!(f, "{}", self.0)
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err, assert_ok};
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn display_round_trips(#[strategy(any_point())] pt: Point) {
    let text = pt.to_string();
    let coords: Vec<f64> = text.split(' ').map(|s| s.parse().unwrap()).collect();
    prop_assert_eq!(Point::new_nn([coords[0], coords[1]]), pt);
  }

  #[test]
  fn lexicographic_order() {
    let mut pts = vec![
      Point::new_nn([1.0, 0.0]),
      Point::new_nn([0.0, 5.0]),
      Point::new_nn([0.0, -1.0]),
      Point::new_nn([-3.0, 9.0]),
    ];
    pts.sort();
    assert_eq!(
      pts,
      vec![
        Point::new_nn([-3.0, 9.0]),
        Point::new_nn([0.0, -1.0]),
        Point::new_nn([0.0, 5.0]),
        Point::new_nn([1.0, 0.0]),
      ]
    );
  }

  #[test]
  fn negative_zero_is_zero() {
    assert_eq!(Point::new_nn([-0.0, 1.0]), Point::new_nn([0.0, 1.0]));
    assert_eq!(Point::new_nn([-0.0, -0.0]).to_string(), "0 0");
  }

  #[test]
  fn display_whole_numbers() {
    assert_eq!(Point::new_nn([10.0, 0.0]).to_string(), "10 0");
    assert_eq!(Point::new_nn([-100.0, 50.0]).to_string(), "-100 50");
    assert_eq!(Point::new_nn([2001.0, 2000.0]).to_string(), "2001 2000");
  }

  #[test]
  fn display_fractions() {
    assert_eq!(Point::new_nn([5.23, 10.99]).to_string(), "5.23 10.99");
    assert_eq!(Point::new_nn([-0.5, 52.0]).to_string(), "-0.5 52");
  }

  #[test]
  fn try_from_nan() {
    assert_err!(Point::try_from([f64::NAN, 0.0]));
    assert_err!(Point::try_from([0.0, f64::NAN]));
    assert_ok!(Point::try_from([1.5, -2.5]));
  }

  #[test]
  #[should_panic]
  fn new_nn_panics_on_nan() {
    Point::new_nn([0.0, f64::NAN]);
  }

  #[test]
  fn random_points_in_unit_square() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    for _ in 0..100 {
      let pt: Point = rng.gen();
      assert!((0.0..1.0).contains(&pt.x_coord()));
      assert!((0.0..1.0).contains(&pt.y_coord()));
    }
  }
}
