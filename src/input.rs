//! Asteroid files.
//!
//! The first line holds the number of asteroids. Each following line holds the
//! two coordinates of one asteroid, separated by whitespace:
//!
//! ```text
//! 3
//! 0 0
//! 10 0
//! 5.5 -1
//! ```
//!
//! Blank lines are skipped. All other validation failures are reported as an
//! [`InputError`].
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::data::Point;

/// Fewest asteroids that can have a narrowest view.
pub const MIN_ASTEROIDS: usize = 3;

#[derive(Debug)]
pub enum InputError {
  NotFound(PathBuf),
  Io(std::io::Error),
  Empty,
  NonIntegerCount(String),
  CoordinateCount { count: usize, line: String },
  NonNumericCoordinate(String),
  NonFiniteCoordinate(String),
  DuplicateAsteroid(String),
  CountMismatch { expected: i64, actual: usize },
  TooFewAsteroids(usize),
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputError::NotFound(_) => write!(f, "File does not exist."),
      InputError::Io(err) => write!(f, "Could not read file: {}", err),
      InputError::Empty => write!(f, "File does not contain any data."),
      InputError::NonIntegerCount(count) => {
        write!(f, "Expected asteroid count is a non-integer: {}", count)
      }
      InputError::CoordinateCount { count, line } => write!(
        f,
        "{} coordinates in asteroid {}. Expected exactly 2.",
        count, line
      ),
      InputError::NonNumericCoordinate(line) => write!(
        f,
        "An asteroid contains a non-numeric coordinate: {}",
        line
      ),
      InputError::NonFiniteCoordinate(line) => write!(
        f,
        "An asteroid contains a non-finite coordinate: {}",
        line
      ),
      InputError::DuplicateAsteroid(line) => write!(
        f,
        "Two asteroids found at {}. Only one asteroid may exist per location.",
        line
      ),
      InputError::CountMismatch { expected, actual } => write!(
        f,
        "Expected {} asteroids but got {}.",
        expected, actual
      ),
      InputError::TooFewAsteroids(n) => write!(
        f,
        "There are only {} asteroids. There must be at least {}.",
        n, MIN_ASTEROIDS
      ),
    }
  }
}

impl std::error::Error for InputError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      InputError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for InputError {
  fn from(err: std::io::Error) -> InputError {
    InputError::Io(err)
  }
}

/// Read and validate an asteroid file.
pub fn read_asteroids(path: &Path) -> Result<Vec<Point>, InputError> {
  if !path.is_file() {
    return Err(InputError::NotFound(path.to_path_buf()));
  }
  let text = std::fs::read_to_string(path)?;
  parse_asteroids(&text)
}

/// Parse and validate the contents of an asteroid file.
///
/// Checks, in order: the file has a count line and at least one more line,
/// the count is an integer, every other line is exactly two finite numbers, no
/// two asteroids share a location, the count matches, and there are at least
/// [`MIN_ASTEROIDS`]. A negative count is an integer that never matches.
///
/// ```rust
/// # use asteroid_view::input::parse_asteroids;
/// let asteroids = parse_asteroids("3\n0 0\n  10   0 \n5.5 -1\n").unwrap();
/// assert_eq!(asteroids.len(), 3);
/// assert_eq!(asteroids[2].to_string(), "5.5 -1");
/// ```
pub fn parse_asteroids(text: &str) -> Result<Vec<Point>, InputError> {
  let lines: Vec<Vec<&str>> = text
    .lines()
    .map(|line| line.split_whitespace().collect::<Vec<&str>>())
    .filter(|tokens| !tokens.is_empty())
    .collect();
  let (header, rows) = match lines.split_first() {
    Some((header, rows)) if !rows.is_empty() => (header.join(" "), rows),
    _ => return Err(InputError::Empty),
  };
  let expected: i64 = header
    .parse()
    .map_err(|_| InputError::NonIntegerCount(header.clone()))?;

  let mut seen = BTreeSet::new();
  let mut asteroids = Vec::new();
  for tokens in rows {
    let point = parse_point(tokens)?;
    if !seen.insert(point) {
      return Err(InputError::DuplicateAsteroid(tokens.join(" ")));
    }
    asteroids.push(point);
  }

  if usize::try_from(expected) != Ok(asteroids.len()) {
    return Err(InputError::CountMismatch {
      expected,
      actual: asteroids.len(),
    });
  }
  if asteroids.len() < MIN_ASTEROIDS {
    return Err(InputError::TooFewAsteroids(asteroids.len()));
  }
  debug!(asteroids = asteroids.len(), "parsed asteroid file");
  Ok(asteroids)
}

fn parse_point(tokens: &[&str]) -> Result<Point, InputError> {
  let line = || tokens.join(" ");
  let (x, y) = match tokens {
    [x, y] => (x, y),
    _ => {
      // Only the first two coordinates are quoted.
      return Err(InputError::CoordinateCount {
        count: tokens.len(),
        line: tokens[..tokens.len().min(2)].join(" "),
      });
    }
  };
  let (x, y) = match (x.parse::<f64>(), y.parse::<f64>()) {
    (Ok(x), Ok(y)) => (x, y),
    _ => return Err(InputError::NonNumericCoordinate(line())),
  };
  if !x.is_finite() || !y.is_finite() {
    return Err(InputError::NonFiniteCoordinate(line()));
  }
  Point::try_from([x, y]).map_err(|_| InputError::NonFiniteCoordinate(line()))
}
