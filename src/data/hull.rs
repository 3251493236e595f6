use claims::debug_assert_ok;
use std::ops::Index;

use super::{Point, PointLocation};
use crate::{Error, Orientation};

/// Vertices of a strictly convex polygon in counter-clockwise order.
///
/// A hull has at least three vertices and every three consecutive vertices
/// make a left turn, so no vertex sits in the middle of an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull(Vec<Point>);

impl Hull {
  /// $O(n)$ Check the invariants before accepting `vertices`.
  pub fn new(vertices: Vec<Point>) -> Result<Hull, Error> {
    let hull = Hull(vertices);
    hull.validate()?;
    Ok(hull)
  }

  /// $O(1)$ Assume that the vertices form a strictly convex polygon.
  ///
  /// The invariants are still checked in debug builds.
  pub fn new_unchecked(vertices: Vec<Point>) -> Hull {
    let hull = Hull(vertices);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.0.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    for (prev, this, next) in self.iter_neighbors() {
      if prev == this || this == next {
        return Err(Error::DuplicatePoints);
      }
      if prev.orientation(this, next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let mut on_edge = false;
    for (this, next) in self.iter_edges() {
      match this.orientation(next, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_edge = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_edge {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  // Hulls always have at least three vertices.
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn vertices(&self) -> &[Point] {
    &self.0
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.0.iter()
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.0.contains(pt)
  }

  /// Each vertex with its predecessor and successor, starting at index 0.
  pub fn iter_neighbors(&self) -> impl Iterator<Item = (&Point, &Point, &Point)> + '_ {
    let n = self.0.len();
    (0..n).map(move |i| (&self.0[(i + n - 1) % n], &self.0[i], &self.0[(i + 1) % n]))
  }

  /// Boundary edges in counter-clockwise order.
  pub fn iter_edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
    let n = self.0.len();
    (0..n).map(move |i| (&self.0[i], &self.0[(i + 1) % n]))
  }

  /// Same vertices with the lowest point first.
  ///
  /// Two hulls of the same point set are equal after normalization.
  pub fn normalize(&self) -> Hull {
    let mut vertices = self.0.clone();
    if let Some(offset) = vertices
      .iter()
      .enumerate()
      .min_by_key(|(_, pt)| *pt)
      .map(|(idx, _)| idx)
    {
      vertices.rotate_left(offset);
    }
    Hull(vertices)
  }
}

impl Index<usize> for Hull {
  type Output = Point;
  fn index(&self, idx: usize) -> &Point {
    self.0.index(idx)
  }
}
