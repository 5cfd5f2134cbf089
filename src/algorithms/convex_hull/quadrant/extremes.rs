use super::Quadrant;
use crate::data::Point;
use crate::HullScalar;

/// The eight extreme points of a point set.
///
/// The name of each field gives the quadrant whose chain it bounds and whether
/// it starts (`p1`) or ends (`p2`) that chain:
///
/// | Field  | Extreme                           |
/// |--------|-----------------------------------|
/// | `q1p1` | right-most, highest on ties       |
/// | `q4p2` | right-most, lowest on ties        |
/// | `q1p2` | top-most, right-most on ties      |
/// | `q2p1` | top-most, left-most on ties       |
/// | `q2p2` | left-most, highest on ties        |
/// | `q3p1` | left-most, lowest on ties         |
/// | `q3p2` | bottom-most, left-most on ties    |
/// | `q4p1` | bottom-most, right-most on ties   |
///
/// Every field is a lexicographic extreme, so the extremes of a union are the
/// extremes of the extremes of its parts. See [`Extremes::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes<T> {
  pub q1p1: Point<T>,
  pub q1p2: Point<T>,
  pub q2p1: Point<T>,
  pub q2p2: Point<T>,
  pub q3p1: Point<T>,
  pub q3p2: Point<T>,
  pub q4p1: Point<T>,
  pub q4p2: Point<T>,
}

impl<T: HullScalar> Extremes<T> {
  /// Extremes of the set containing only `pt`.
  pub fn new(pt: Point<T>) -> Extremes<T> {
    Extremes {
      q1p1: pt,
      q1p2: pt,
      q2p1: pt,
      q2p2: pt,
      q3p1: pt,
      q3p2: pt,
      q4p1: pt,
      q4p2: pt,
    }
  }

  /// $O(n)$ Extremes of `points`, or `None` if there are no points.
  pub fn scan(points: &[Point<T>]) -> Option<Extremes<T>> {
    let (first, rest) = points.split_first()?;
    let mut extremes = Extremes::new(*first);
    for pt in rest {
      extremes.observe(pt);
    }
    Some(extremes)
  }

  pub fn observe(&mut self, pt: &Point<T>) {
    let (x, y) = (pt.x_coord(), pt.y_coord());

    // Right
    if x >= self.q1p1.x_coord() {
      if x == self.q1p1.x_coord() {
        if y > self.q1p1.y_coord() {
          self.q1p1 = *pt;
        } else if y < self.q4p2.y_coord() {
          self.q4p2 = *pt;
        }
      } else {
        self.q1p1 = *pt;
        self.q4p2 = *pt;
      }
    }

    // Left
    if x <= self.q2p2.x_coord() {
      if x == self.q2p2.x_coord() {
        if y > self.q2p2.y_coord() {
          self.q2p2 = *pt;
        } else if y < self.q3p1.y_coord() {
          self.q3p1 = *pt;
        }
      } else {
        self.q2p2 = *pt;
        self.q3p1 = *pt;
      }
    }

    // Top
    if y >= self.q1p2.y_coord() {
      if y == self.q1p2.y_coord() {
        if x < self.q2p1.x_coord() {
          self.q2p1 = *pt;
        } else if x > self.q1p2.x_coord() {
          self.q1p2 = *pt;
        }
      } else {
        self.q1p2 = *pt;
        self.q2p1 = *pt;
      }
    }

    // Bottom
    if y <= self.q3p2.y_coord() {
      if y == self.q3p2.y_coord() {
        if x < self.q3p2.x_coord() {
          self.q3p2 = *pt;
        } else if x > self.q4p1.x_coord() {
          self.q4p1 = *pt;
        }
      } else {
        self.q3p2 = *pt;
        self.q4p1 = *pt;
      }
    }
  }

  /// Extremes of the union of the two underlying point sets.
  pub fn merge(mut self, other: &Extremes<T>) -> Extremes<T> {
    for pt in other.octagon().iter() {
      self.observe(pt);
    }
    self
  }

  /// All eight extremes in counter-clockwise order, starting with `q1p1`.
  /// Neighbouring entries may be equal.
  pub fn octagon(&self) -> [Point<T>; 8] {
    [
      self.q1p1, self.q1p2, self.q2p1, self.q2p2, self.q3p1, self.q3p2, self.q4p1, self.q4p2,
    ]
  }

  /// The two extremes bounding the chain of `quadrant`, in chain order.
  pub fn seeds(&self, quadrant: Quadrant) -> [Point<T>; 2] {
    match quadrant {
      Quadrant::First => [self.q1p1, self.q1p2],
      Quadrant::Second => [self.q2p1, self.q2p2],
      Quadrant::Third => [self.q3p1, self.q3p2],
      Quadrant::Fourth => [self.q4p1, self.q4p2],
    }
  }

  /// Corner of the region of `quadrant`. Only points strictly beyond the root
  /// on both axes can be vertices of the quadrant's chain.
  pub fn root(&self, quadrant: Quadrant) -> Point<T> {
    let [p1, p2] = self.seeds(quadrant);
    match quadrant {
      Quadrant::First | Quadrant::Third => Point::new([*p2.x_coord(), *p1.y_coord()]),
      Quadrant::Second | Quadrant::Fourth => Point::new([*p1.x_coord(), *p2.y_coord()]),
    }
  }
}
