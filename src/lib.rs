#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Pick the asteroid with the narrowest field of view.
//!
//! The field of view of an asteroid on the convex hull of a point set is the
//! interior angle formed with its two hull neighbors. Asteroids strictly inside
//! the hull are never candidates.
//!
//! ```rust
//! # use asteroid_view::choose_asteroid;
//! # use asteroid_view::data::Point;
//! let asteroids = vec![
//!   Point::new_nn([0.0, 0.0]),
//!   Point::new_nn([10.0, 0.0]),
//!   Point::new_nn([5.0, 1.0]),
//! ];
//! let chosen = choose_asteroid(asteroids).unwrap();
//! assert_eq!(chosen.to_string(), "0 0");
//! ```
use tracing::debug;

pub mod algorithms;
pub mod data;
pub mod input;
mod orientation;

pub use orientation::Orientation;

use algorithms::convex_hull;
use algorithms::narrowest_view;
use data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three distinct points remain once collinear points are dropped.
  DegenerateHull,
  /// An arccos argument was not a finite number.
  NumericDomain,
  DuplicatePoints,
  InsufficientVertices,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DegenerateHull => write!(
        f,
        "Asteroids do not span a convex hull with at least three vertices"
      ),
      Error::NumericDomain => write!(f, "View angle is outside the domain of arccos"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

/// $O(n \log n)$ Asteroid with the narrowest view of the others.
///
/// Builds the convex hull of `asteroids` and returns the hull vertex with the
/// smallest interior angle. Ties go to the first vertex in hull order.
///
/// # Errors
/// Returns [`Error::DegenerateHull`] if the asteroids are all collinear or
/// there are fewer than three of them.
pub fn choose_asteroid(asteroids: Vec<Point>) -> Result<Point, Error> {
  let count = asteroids.len();
  let hull = convex_hull(asteroids)?;
  debug!(asteroids = count, vertices = hull.len(), "built convex hull");
  let chosen = narrowest_view(&hull)?;
  debug!(%chosen, "chose asteroid");
  Ok(chosen)
}

#[cfg(test)]
pub mod testing;
