use std::cmp::Ordering;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// Borrowed view of a hull as returned by the convex hull algorithms.
///
/// A closing duplicate (first point repeated at the end) is ignored, so open
/// and closed paths describe the same polygon.
#[derive(Debug, Clone, Copy)]
pub struct HullPath<'a, T> {
  points: &'a [Point<T>],
  closed: bool,
}

impl<'a, T> HullPath<'a, T>
where
  T: HullScalar,
{
  pub fn new(points: &'a [Point<T>]) -> HullPath<'a, T> {
    match points {
      [first, .., last] if first == last => HullPath {
        points: &points[..points.len() - 1],
        closed: true,
      },
      _ => HullPath {
        points,
        closed: false,
      },
    }
  }

  /// Vertices without the closing duplicate.
  pub fn points(&self) -> &'a [Point<T>] {
    self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn is_closed(&self) -> bool {
    self.closed
  }

  /// $O(n \log n)$ Check that the path is a strictly convex, counter-clockwise
  /// polygon without repeated vertices.
  ///
  /// Paths with fewer than three vertices are valid as long as they do not
  /// repeat a point.
  pub fn validate(&self) -> Result<(), Error> {
    let mut sorted = self.points.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if sorted.windows(2).any(|w| w[0] == w[1]) {
      return Err(Error::DuplicatePoints);
    }
    let n = self.points.len();
    if n < 3 {
      return Ok(());
    }
    for i in 0..n {
      let prev = &self.points[(i + n - 1) % n];
      let next = &self.points[(i + 1) % n];
      if !Point::orient(prev, &self.points[i], next).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    // Local turns cannot see a path that winds around more than once.
    let origin = &self.points[0];
    for w in self.points[1..].windows(2) {
      if !Point::orient(origin, &w[0], &w[1]).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the polygon.
  ///
  /// Assumes the path is valid. Single points and segments have no interior.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.points {
      [] => PointLocation::Outside,
      [a] if a == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        if Point::orient(a, b, pt).is_colinear() && within_box(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let n = self.points.len();
        let mut on_edge = false;
        for i in 0..n {
          match Point::orient(&self.points[i], &self.points[(i + 1) % n], pt) {
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
    }
  }
}

fn within_box<T: HullScalar>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  let between = |lo: &T, hi: &T, v: &T| (lo <= v && v <= hi) || (hi <= v && v <= lo);
  between(a.x_coord(), b.x_coord(), pt.x_coord()) && between(a.y_coord(), b.y_coord(), pt.y_coord())
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn square() -> Vec<Point<i32>> {
    vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([2, 2]),
      Point::new([0, 2]),
    ]
  }

  #[test]
  fn closed_paths_drop_the_duplicate() {
    let mut pts = square();
    pts.push(pts[0]);
    let path = HullPath::new(&pts);
    assert!(path.is_closed());
    assert_eq!(path.len(), 4);
    assert_ok!(path.validate());
  }

  #[test]
  fn validate_square() {
    assert_ok!(HullPath::new(&square()).validate());
  }

  #[test]
  fn validate_clockwise() {
    let mut pts = square();
    pts.reverse();
    assert_err_eq!(HullPath::new(&pts).validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_colinear() {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([1, 1]),
    ];
    assert_err_eq!(HullPath::new(&pts).validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_duplicates() {
    let pts = vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([1, 0])];
    assert_err_eq!(HullPath::new(&pts).validate(), Error::DuplicatePoints);
  }

  #[test]
  fn validate_double_winding() {
    // Regular pentagon visited as a pentagram: every turn is CCW.
    let pentagon = [
      Point::new([10, 0]),
      Point::new([3, 10]),
      Point::new([-8, 6]),
      Point::new([-8, -6]),
      Point::new([3, -10]),
    ];
    let star: Vec<Point<i32>> = [0, 2, 4, 1, 3].iter().map(|&i| pentagon[i]).collect();
    assert_err_eq!(HullPath::new(&star).validate(), Error::ConvexViolation);
  }

  #[test]
  fn locate_square() {
    let pts = square();
    let path = HullPath::new(&pts);
    assert_eq!(path.locate(&Point::new([1, 1])), PointLocation::Inside);
    assert_eq!(path.locate(&Point::new([1, 0])), PointLocation::OnBoundary);
    assert_eq!(path.locate(&Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(path.locate(&Point::new([3, 1])), PointLocation::Outside);
  }

  #[test]
  fn locate_degenerate() {
    let empty: Vec<Point<i32>> = vec![];
    assert_eq!(
      HullPath::new(&empty).locate(&Point::new([0, 0])),
      PointLocation::Outside
    );
    let single = vec![Point::new([5, 5])];
    let path = HullPath::new(&single);
    assert_eq!(path.locate(&Point::new([5, 5])), PointLocation::OnBoundary);
    assert_eq!(path.locate(&Point::new([5, 6])), PointLocation::Outside);
    let segment = vec![Point::new([0, 0]), Point::new([4, 2])];
    let path = HullPath::new(&segment);
    assert_eq!(path.locate(&Point::new([2, 1])), PointLocation::OnBoundary);
    assert_eq!(path.locate(&Point::new([6, 3])), PointLocation::Outside);
    assert_eq!(path.locate(&Point::new([2, 2])), PointLocation::Outside);
  }
}
