use std::ops::Range;

use crate::data::Point;
use crate::HullScalar;

// Joins the four quadrant chains into one counter-clockwise path. Neighbouring
// chains share their end points (or collapse into a single point) and every
// shared point is emitted once.
pub(crate) fn merge<T: HullScalar>(chains: [&[Point<T>]; 4], close_path: bool) -> Vec<Point<T>> {
  debug_assert!(chains.iter().all(|chain| !chain.is_empty()));
  let [q1, q2, q3, q4] = chains;
  let (q1_first, mut last) = match (q1.first(), q1.last()) {
    (Some(first), Some(last)) => (*first, *last),
    _ => return Vec::new(),
  };

  let r2 = junction(q2, &mut last);
  let r3 = junction(q3, &mut last);
  let r4 = junction(q4, &mut last);
  let r1 = if q1_first == last { 1..q1.len() } else { 0..q1.len() };

  let ranges = [r1, r2, r3, r4];
  let count: usize = ranges.iter().map(|r| r.len()).sum();
  if count <= 1 {
    return vec![last];
  }

  let mut hull = Vec::with_capacity(count + 1);
  for (chain, range) in chains.iter().zip(ranges) {
    hull.extend_from_slice(&chain[range]);
  }
  if close_path {
    hull.push(hull[0]);
  }
  hull
}

// Part of `chain` not already emitted by the previous chain, ending at `last`.
fn junction<T: HullScalar>(chain: &[Point<T>], last: &mut Point<T>) -> Range<usize> {
  match chain {
    [] => 0..0,
    [only] => {
      if *only == *last {
        1..1
      } else {
        *last = *only;
        0..1
      }
    }
    [first, .., tail] => {
      let start = usize::from(*first == *last);
      *last = *tail;
      start..chain.len()
    }
  }
}
