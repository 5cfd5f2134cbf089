use super::{Extremes, Quadrant};
use crate::data::Point;
use crate::HullScalar;

/// Starting capacity of every chain. Hulls of random inputs rarely grow past
/// it.
pub const INITIAL_CAPACITY: usize = 1000;

/// Hull vertices between the two extremes of one quadrant.
///
/// The chain always starts and ends with the quadrant's extremes and every
/// consecutive triple turns counter-clockwise. A point extends the arc when it
/// makes a right turn with the edge it falls under.
#[derive(Debug, Clone)]
pub struct QuadrantChain<T> {
  quadrant: Quadrant,
  root: Point<T>,
  points: Vec<Point<T>>,
}

impl<T: HullScalar> QuadrantChain<T> {
  pub fn new(quadrant: Quadrant, extremes: &Extremes<T>) -> QuadrantChain<T> {
    let [first, last] = extremes.seeds(quadrant);
    let mut points = Vec::with_capacity(INITIAL_CAPACITY);
    points.push(first);
    if first != last {
      points.push(last);
    }
    QuadrantChain {
      quadrant,
      root: extremes.root(quadrant),
      points,
    }
  }

  pub fn quadrant(&self) -> Quadrant {
    self.quadrant
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  /// True if `pt` is inside the region of this quadrant. Points outside the
  /// region can never be vertices of the chain.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.quadrant.contains(&self.root, pt)
  }

  /// $O(\log h + k)$ Add `pt` to the chain if it extends the convex arc,
  /// removing the `k` vertices it hides.
  ///
  /// Returns `false`, leaving the chain untouched, if `pt` is inside or on the
  /// arc. Only call this for points the quadrant [contains](Self::contains).
  pub fn try_insert(&mut self, pt: &Point<T>) -> bool {
    let quadrant = self.quadrant;
    let chain = &self.points;

    // Binary search for the pair of vertices bracketing `pt` along the x axis.
    let mut lo = 0;
    let mut hi = chain.len();
    while lo + 1 < hi {
      let mid = lo + (hi - lo) / 2;
      let vertex = &chain[mid];
      if quadrant.dominated_by(vertex, pt) {
        return false;
      }
      if quadrant.precedes(pt, vertex) {
        hi = mid;
      } else if quadrant.precedes(vertex, pt) {
        lo = mid;
      } else {
        lo = mid - 1;
        hi = mid + 1;
        break;
      }
    }
    // A single vertex chain has an empty region.
    if hi >= chain.len() {
      return false;
    }

    if !is_right_turn(&chain[lo], &chain[hi], pt) {
      return false;
    }
    while lo > 0 && !is_right_turn(&chain[lo - 1], pt, &chain[lo]) {
      lo -= 1;
    }
    let last = chain.len() - 1;
    while hi < last && !is_right_turn(pt, &chain[hi + 1], &chain[hi]) {
      hi += 1;
    }

    // Vertices strictly between lo and hi are hidden by `pt`.
    match hi - lo {
      1 => self.points.insert(lo + 1, *pt),
      2 => self.points[lo + 1] = *pt,
      _ => {
        self.points[lo + 1] = *pt;
        self.points.drain(lo + 2..hi);
      }
    }
    true
  }
}

fn is_right_turn<T: HullScalar>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> bool {
  Point::orient(p, q, r).is_cw()
}
