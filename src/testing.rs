// Strategies for:
//  * single points
//  * sets of distinct points
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use proptest::collection::*;
use proptest::prelude::*;
use std::ops::Range;

// Bounded so squared distances and cross products never overflow.
const BOUND: f64 = 1e6;

// Small integer grid. Produces plenty of colinear and duplicate points.
const GRID: i32 = 20;

// Arbitrary isn't defined for NotNan.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-BOUND..BOUND, -BOUND..BOUND).prop_map(|(x, y)| Point::new_nn([x, y]))
}

pub fn grid_point() -> impl Strategy<Value = Point> {
  (-GRID..=GRID, -GRID..=GRID).prop_map(|(x, y)| Point::new_nn([f64::from(x), f64::from(y)]))
}

/// Distinct grid points in sorted order.
pub fn point_set(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  btree_set(grid_point(), size).prop_map(|set| set.into_iter().collect())
}

/// A point set together with a random permutation of it.
pub fn shuffled_point_set(size: Range<usize>) -> impl Strategy<Value = (Vec<Point>, Vec<Point>)> {
  point_set(size).prop_flat_map(|pts| (Just(pts.clone()), Just(pts).prop_shuffle()))
}
