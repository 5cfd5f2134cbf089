use super::monotone_chain;
use super::quadrant::Extremes;
use crate::data::Point;
use crate::HullScalar;

/// $O(n \log n)$ Convex hull with [Akl–Toussaint][paper] pre-filtering.
///
/// Points strictly inside the polygon spanned by the eight extreme points
/// cannot be hull vertices and are discarded before running the
/// [monotone chain](monotone_chain::convex_hull) algorithm on the rest. On
/// uniformly distributed inputs the filter removes most points.
///
/// [paper]: https://doi.org/10.1016/0020-0190(78)90063-X
pub fn convex_hull<T>(points: &[Point<T>], close_path: bool) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let extremes = match Extremes::scan(points) {
    Some(extremes) => extremes,
    None => return Vec::new(),
  };
  let mut octagon = extremes.octagon().to_vec();
  octagon.dedup();
  while octagon.len() > 1 && octagon.first() == octagon.last() {
    octagon.pop();
  }
  if octagon.len() < 3 {
    return monotone_chain::convex_hull(points, close_path);
  }
  let survivors: Vec<Point<T>> = points
    .iter()
    .filter(|pt| !strictly_inside(&octagon, pt))
    .copied()
    .collect();
  monotone_chain::convex_hull(&survivors, close_path)
}

// `polygon` is convex and counter-clockwise but may have colinear vertices.
fn strictly_inside<T: HullScalar>(polygon: &[Point<T>], pt: &Point<T>) -> bool {
  let n = polygon.len();
  (0..n).all(|i| Point::orient(&polygon[i], &polygon[(i + 1) % n], pt).is_ccw())
}
