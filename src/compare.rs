//! Comparison of hull paths produced by different algorithms.
use std::fmt;

use crate::data::{HullPath, Point};
use crate::HullScalar;

/// Lists longer than this are cut short by [`PathDifferences`]'s `Display`.
const MAX_DISPLAYED_POINTS: usize = 20;

/// Outcome of [`compare_paths`].
///
/// The comparison stops at the first problem, so the report is not
/// exhaustive. It is however never empty when the paths differ.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDifferences<T> {
  /// Number of points in the input set the hulls were computed from.
  pub source_len: usize,
  pub count_differs: bool,
  /// Reference point near which the two sequences diverge.
  pub first_sequence_error: Option<Point<T>>,
  /// Reference points absent from the candidate.
  pub missing: Vec<Point<T>>,
  /// Candidate points absent from the reference.
  pub unwanted: Vec<Point<T>>,
  /// Whether the candidate repeated its first point at the end.
  pub candidate_closed: bool,
}

impl<T> PathDifferences<T> {
  pub fn has_errors(&self) -> bool {
    self.count_differs
      || self.first_sequence_error.is_some()
      || !self.missing.is_empty()
      || !self.unwanted.is_empty()
  }
}

/// $O(n)$, or $O(n^2)$ when the paths differ. Check whether `candidate`
/// visits the same points as `reference` in the same cyclic order.
///
/// Closing duplicates are ignored on both sides. The candidate may start at
/// any vertex and may run in either direction.
///
/// # Examples
///
/// ```rust
/// # use quadrant_hull::compare::compare_paths;
/// # use quadrant_hull::data::Point;
/// let source = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2]), Point::new([1, 0])];
/// let reference = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2])];
/// let rotated = vec![Point::new([0, 2]), Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2])];
/// let diffs = compare_paths(&source, &reference, &rotated);
/// assert!(!diffs.has_errors());
/// assert!(diffs.candidate_closed);
/// ```
pub fn compare_paths<T>(
  source: &[Point<T>],
  reference: &[Point<T>],
  candidate: &[Point<T>],
) -> PathDifferences<T>
where
  T: HullScalar,
{
  let reference_path = HullPath::new(reference);
  let candidate_path = HullPath::new(candidate);
  let expected = reference_path.points();
  let actual = candidate_path.points();

  let mut diffs = PathDifferences {
    source_len: source.len(),
    count_differs: false,
    first_sequence_error: None,
    missing: Vec::new(),
    unwanted: Vec::new(),
    candidate_closed: candidate_path.is_closed(),
  };

  if expected.len() != actual.len() {
    diffs.count_differs = true;
    fill_differences(expected, actual, &mut diffs);
    return diffs;
  }
  let n = expected.len();
  if n == 0 {
    return diffs;
  }

  let start = match actual.iter().position(|pt| *pt == expected[0]) {
    Some(start) => start,
    None => {
      diffs.first_sequence_error = Some(expected[0]);
      fill_differences(expected, actual, &mut diffs);
      return diffs;
    }
  };

  let forward = first_mismatch(expected, |i| &actual[(start + i) % n]);
  let mismatch = match forward {
    None => return diffs,
    // Only the starting point matched, the candidate may run backwards.
    Some(1) => first_mismatch(expected, |i| &actual[(start + n - i) % n]),
    Some(at) => Some(at),
  };
  if let Some(at) = mismatch {
    diffs.first_sequence_error = Some(expected[at]);
    fill_differences(expected, actual, &mut diffs);
  }
  diffs
}

fn first_mismatch<'a, T, F>(expected: &[Point<T>], actual: F) -> Option<usize>
where
  T: HullScalar + 'a,
  F: Fn(usize) -> &'a Point<T>,
{
  (0..expected.len()).find(|&i| *actual(i) != expected[i])
}

fn fill_differences<T: HullScalar>(
  expected: &[Point<T>],
  actual: &[Point<T>],
  diffs: &mut PathDifferences<T>,
) {
  diffs.missing = expected
    .iter()
    .filter(|pt| !actual.contains(pt))
    .copied()
    .collect();
  diffs.unwanted = actual
    .iter()
    .filter(|pt| !expected.contains(pt))
    .copied()
    .collect();
}

impl<T: fmt::Debug> fmt::Display for PathDifferences<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Source points: {}", self.source_len)?;
    if !self.has_errors() {
      return writeln!(f, "Paths are equivalent");
    }
    if self.count_differs {
      writeln!(f, "Count of points is different")?;
    }
    if let Some(pt) = &self.first_sequence_error {
      writeln!(f, "First sequence error near point {:?}", pt.array)?;
    }
    write_points(f, "Missing points", &self.missing)?;
    write_points(f, "Unwanted points", &self.unwanted)?;
    if self.candidate_closed {
      writeln!(f, "Candidate path is closed")?;
    }
    Ok(())
  }
}

fn write_points<T: fmt::Debug>(
  f: &mut fmt::Formatter<'_>,
  label: &str,
  points: &[Point<T>],
) -> fmt::Result {
  if points.is_empty() {
    return Ok(());
  }
  write!(f, "{} ({}):", label, points.len())?;
  for pt in points.iter().take(MAX_DISPLAYED_POINTS) {
    write!(f, " {:?}", pt.array)?;
  }
  if points.len() > MAX_DISPLAYED_POINTS {
    write!(f, " ...")?;
  }
  writeln!(f)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pts(coords: &[[i32; 2]]) -> Vec<Point<i32>> {
    coords.iter().copied().map(Point::new).collect()
  }

  fn square() -> Vec<Point<i32>> {
    pts(&[[0, 0], [1, 0], [1, 1], [0, 1]])
  }

  #[test]
  fn identical() {
    let diffs = compare_paths(&square(), &square(), &square());
    assert!(!diffs.has_errors());
    assert!(!diffs.candidate_closed);
  }

  #[test]
  fn rotated_and_closed() {
    let candidate = pts(&[[1, 1], [0, 1], [0, 0], [1, 0], [1, 1]]);
    let diffs = compare_paths(&square(), &square(), &candidate);
    assert!(!diffs.has_errors());
    assert!(diffs.candidate_closed);
  }

  #[test]
  fn reversed() {
    let candidate = pts(&[[1, 0], [0, 0], [0, 1], [1, 1]]);
    assert!(!compare_paths(&square(), &square(), &candidate).has_errors());
  }

  #[test]
  fn count_mismatch() {
    let candidate = pts(&[[0, 0], [1, 0], [1, 1]]);
    let diffs = compare_paths(&square(), &square(), &candidate);
    assert!(diffs.count_differs);
    assert_eq!(diffs.missing, pts(&[[0, 1]]));
    assert!(diffs.unwanted.is_empty());
  }

  #[test]
  fn wrong_point() {
    let candidate = pts(&[[0, 0], [1, 0], [2, 2], [0, 1]]);
    let diffs = compare_paths(&square(), &square(), &candidate);
    assert!(!diffs.count_differs);
    assert_eq!(diffs.first_sequence_error, Some(Point::new([1, 1])));
    assert_eq!(diffs.missing, pts(&[[1, 1]]));
    assert_eq!(diffs.unwanted, pts(&[[2, 2]]));
  }

  #[test]
  fn missing_start() {
    let candidate = pts(&[[5, 5], [1, 0], [1, 1], [0, 1]]);
    let diffs = compare_paths(&square(), &square(), &candidate);
    assert_eq!(diffs.first_sequence_error, Some(Point::new([0, 0])));
    assert_eq!(diffs.unwanted, pts(&[[5, 5]]));
  }

  #[test]
  fn shuffled() {
    // Same points, not a rotation or reflection.
    let candidate = pts(&[[0, 0], [1, 1], [1, 0], [0, 1]]);
    let diffs = compare_paths(&square(), &square(), &candidate);
    assert!(diffs.has_errors());
    assert!(diffs.missing.is_empty());
    assert!(diffs.unwanted.is_empty());
  }

  #[test]
  fn display_is_truncated() {
    let reference: Vec<Point<i32>> = (0..30).map(|i| Point::new([i, i * i])).collect();
    let diffs = compare_paths(&reference, &reference, &[]);
    let text = diffs.to_string();
    assert!(text.contains("Count of points is different"));
    assert!(text.contains("Missing points (30)"));
    assert!(text.contains("[19, 361]"));
    assert!(!text.contains("[20, 400]"));
    assert!(text.contains("..."));
  }
}
