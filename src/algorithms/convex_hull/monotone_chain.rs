use std::cmp::Ordering;

use crate::data::Point;
use crate::HullScalar;

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    Output is strictly convex and counter-clockwise.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Andrew's [monotone chain][wiki] algorithm. The points are sorted by x (then
/// y) and the lower and upper hulls are built in two sweeps. The hull starts at
/// the left-most, lowest point.
///
/// Follows the same conventions as [`convex_hull`](crate::convex_hull) for
/// empty, single point and colinear inputs.
///
/// # Examples
///
/// ```rust
/// # use quadrant_hull::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use quadrant_hull::data::Point;
/// let pts = vec![
///   Point::new([2, 2]),
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 0]),
/// ];
/// assert_eq!(
///   convex_hull(&pts, false),
///   vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([2, 2])]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(points: &[Point<T>], close_path: bool) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut pts = points.to_vec();
  pts.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
  pts.dedup();
  if pts.len() < 2 {
    return pts;
  }

  let mut hull: Vec<Point<T>> = Vec::with_capacity(pts.len() + 1);
  // Lower hull, left to right.
  for pt in pts.iter() {
    while hull.len() >= 2 && !turns_left(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) {
      hull.pop();
    }
    hull.push(*pt);
  }
  // Upper hull, right to left.
  let floor = hull.len() + 1;
  for pt in pts.iter().rev().skip(1) {
    while hull.len() >= floor && !turns_left(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) {
      hull.pop();
    }
    hull.push(*pt);
  }
  // The upper hull ends where the lower hull started.
  hull.pop();

  if close_path {
    hull.push(hull[0]);
  }
  hull
}

fn turns_left<T: HullScalar>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> bool {
  Point::orient(p, q, r).is_ccw()
}
