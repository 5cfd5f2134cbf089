// https://www.codeproject.com/Articles/1210225/Fast-and-improved-2D-Convex-Hull-algorithm-and-its
use crate::data::Point;
use crate::{Error, HullScalar};

pub mod chain;
pub mod extremes;
mod merge;
pub mod parallel;

pub use chain::QuadrantChain;
pub use extremes::Extremes;

/// One of the four regions the plane is divided into around the extreme
/// points of the input.
///
/// Each quadrant owns the part of the hull between two extreme points. The
/// first quadrant runs from the right-most point to the top-most point, the
/// second from the top-most to the left-most, and so on counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
  First,
  Second,
  Third,
  Fourth,
}

impl Quadrant {
  /// Quadrants in counter-clockwise order.
  pub const ALL: [Quadrant; 4] = [
    Quadrant::First,
    Quadrant::Second,
    Quadrant::Third,
    Quadrant::Fourth,
  ];

  pub fn index(self) -> usize {
    match self {
      Quadrant::First => 0,
      Quadrant::Second => 1,
      Quadrant::Third => 2,
      Quadrant::Fourth => 3,
    }
  }

  fn faces_right(self) -> bool {
    matches!(self, Quadrant::First | Quadrant::Fourth)
  }

  fn faces_up(self) -> bool {
    matches!(self, Quadrant::First | Quadrant::Second)
  }

  /// True if `pt` lies strictly beyond `root` on both axes, in the directions
  /// this quadrant faces.
  pub fn contains<T: HullScalar>(self, root: &Point<T>, pt: &Point<T>) -> bool {
    beyond(self.faces_right(), pt.x_coord(), root.x_coord())
      && beyond(self.faces_up(), pt.y_coord(), root.y_coord())
  }

  // `pt` is no further out than `vertex` on either axis.
  fn dominated_by<T: HullScalar>(self, vertex: &Point<T>, pt: &Point<T>) -> bool {
    !beyond(self.faces_right(), pt.x_coord(), vertex.x_coord())
      && !beyond(self.faces_up(), pt.y_coord(), vertex.y_coord())
  }

  // Chains of the upper quadrants are stored by decreasing x, chains of the
  // lower quadrants by increasing x.
  fn precedes<T: HullScalar>(self, a: &Point<T>, b: &Point<T>) -> bool {
    beyond(self.faces_up(), a.x_coord(), b.x_coord())
  }
}

fn beyond<T: PartialOrd>(positive: bool, a: &T, b: &T) -> bool {
  if positive {
    a > b
  } else {
    a < b
  }
}

// Properties:
//    No allocations other than the four chains and the result.
//    Output is strictly convex and counter-clockwise.
//    Running the algorithm on its own output gives the same output.
/// $O(n \log h)$ Convex hull of a set of points.
///
/// The input is scanned once for the eight extreme points (left-most,
/// right-most, top-most and bottom-most, with ties broken both ways). These
/// split the plane into four [quadrants](Quadrant), each bounded by a chain of
/// hull vertices. A second pass offers every point to the quadrants in order
/// and stops at the first quadrant that accepts it. Finally the four chains are
/// joined into a single counter-clockwise path, starting with the chain of the
/// first quadrant.
///
/// If `close_path` is set and the hull has more than one vertex, the first
/// vertex is repeated at the end.
///
/// Inputs must be finite. NaN coordinates give an unspecified result, use
/// [`try_convex_hull`] to check the input first.
///
/// # Properties
/// * No points from the input set will be outside the returned polygon.
/// * All vertices in the returned polygon are from the input set.
/// * Colinear and duplicate points are dropped.
///
/// # Examples
///
/// ```rust
/// # use quadrant_hull::convex_hull;
/// # use quadrant_hull::data::Point;
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
///   Point::new([0.5, 0.5]),
/// ];
/// assert_eq!(
///   convex_hull(&pts, true),
///   vec![
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 1.0]),
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
///   ]
/// );
/// ```
///
/// ```rust
/// # use quadrant_hull::convex_hull;
/// # use quadrant_hull::data::Point;
/// let empty: Vec<Point<i32>> = vec![];
/// assert!(convex_hull(&empty, true).is_empty());
/// let dups = vec![Point::new([3, 4])].repeat(5);
/// assert_eq!(convex_hull(&dups, true), vec![Point::new([3, 4])]);
/// ```
pub fn convex_hull<T>(points: &[Point<T>], close_path: bool) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let extremes = match Extremes::scan(points) {
    Some(extremes) => extremes,
    None => return Vec::new(),
  };
  let mut chains = Quadrant::ALL.map(|quadrant| QuadrantChain::new(quadrant, &extremes));
  for pt in points {
    insert(&mut chains, pt);
  }
  let [q1, q2, q3, q4] = &chains;
  merge::merge([q1.points(), q2.points(), q3.points(), q4.points()], close_path)
}

/// Same as [`convex_hull`] but rejects NaN and infinite coordinates.
///
/// # Errors
/// Will return [`Error::NonFiniteCoordinate`] if any input coordinate is NaN
/// or infinite.
pub fn try_convex_hull<T>(points: &[Point<T>], close_path: bool) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  if !points.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  Ok(convex_hull(points, close_path))
}

// Quadrant regions may overlap, so a point rejected by one quadrant is still
// offered to the next.
fn insert<T: HullScalar>(chains: &mut [QuadrantChain<T>; 4], pt: &Point<T>) -> bool {
  chains
    .iter_mut()
    .any(|chain| chain.contains(pt) && chain.try_insert(pt))
}
