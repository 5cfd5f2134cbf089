use rayon::prelude::*;

use super::{merge, Extremes, Quadrant, QuadrantChain};
use crate::data::Point;
use crate::HullScalar;

/// Points handled by a single task while scanning and bucketing.
const CHUNK_SIZE: usize = 16 * 1024;

/// Parallel version of [`convex_hull`](super::convex_hull).
///
/// The extremes are found with a parallel reduction, then each point is routed
/// to every quadrant whose region contains it and the four chains are built
/// concurrently, one task per quadrant. For finite inputs with exact
/// arithmetic the result is identical to the sequential algorithm.
///
/// # Examples
///
/// ```rust
/// # use quadrant_hull::algorithms::{convex_hull, convex_hull_par};
/// # use quadrant_hull::data::Point;
/// let pts: Vec<Point<i64>> = (0..1000)
///   .map(|i| Point::new([(i * 7919) % 1009, (i * 104729) % 1013]))
///   .collect();
/// assert_eq!(convex_hull_par(&pts, true), convex_hull(&pts, true));
/// ```
pub fn convex_hull_par<T>(points: &[Point<T>], close_path: bool) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let extremes = match points
    .par_chunks(CHUNK_SIZE)
    .filter_map(Extremes::scan)
    .reduce_with(|a, b| a.merge(&b))
  {
    Some(extremes) => extremes,
    None => return Vec::new(),
  };

  let mut chains: Vec<QuadrantChain<T>> = Quadrant::ALL
    .iter()
    .map(|&quadrant| QuadrantChain::new(quadrant, &extremes))
    .collect();

  // Buckets keep the input order so every chain sees the same sequence of
  // candidates as in the sequential algorithm.
  let buckets: Vec<[Vec<Point<T>>; 4]> = points
    .par_chunks(CHUNK_SIZE)
    .map(|chunk| bucket(&chains, chunk))
    .collect();

  chains.par_iter_mut().for_each(|chain| {
    let idx = chain.quadrant().index();
    for pt in buckets.iter().flat_map(|bucket| bucket[idx].iter()) {
      chain.try_insert(pt);
    }
  });

  merge::merge(
    [
      chains[0].points(),
      chains[1].points(),
      chains[2].points(),
      chains[3].points(),
    ],
    close_path,
  )
}

fn bucket<T: HullScalar>(chains: &[QuadrantChain<T>], points: &[Point<T>]) -> [Vec<Point<T>>; 4] {
  let mut buckets: [Vec<Point<T>>; 4] = Default::default();
  for pt in points {
    for chain in chains {
      if chain.contains(pt) {
        buckets[chain.quadrant().index()].push(*pt);
      }
    }
  }
  buckets
}

#[cfg(test)]
mod tests {
  use super::super::convex_hull;
  use super::*;
  use crate::testing::*;

  use test_strategy::proptest;

  #[test]
  fn empty() {
    let empty: Vec<Point<i32>> = vec![];
    assert!(convex_hull_par(&empty, true).is_empty());
  }

  #[test]
  fn spans_many_chunks() {
    let n = 3 * CHUNK_SIZE as i64 + 17;
    let points: Vec<Point<i64>> = (0..n)
      .map(|i| Point::new([(i * 7919) % 10007, (i * 104729) % 10009]))
      .collect();
    assert_eq!(convex_hull_par(&points, false), convex_hull(&points, false));
    // Reversing the input moves the extremes into other chunks.
    let reversed: Vec<Point<i64>> = points.iter().rev().copied().collect();
    assert_eq!(convex_hull_par(&reversed, true), convex_hull(&points, true));
  }

  #[proptest]
  fn matches_sequential(#[strategy(small_points(0..100))] points: Vec<Point<i32>>) {
    assert_eq!(convex_hull_par(&points, true), convex_hull(&points, true));
  }

  #[proptest]
  fn matches_sequential_wide(#[strategy(wide_points(0..300))] points: Vec<Point<i64>>) {
    assert_eq!(convex_hull_par(&points, false), convex_hull(&points, false));
  }
}
