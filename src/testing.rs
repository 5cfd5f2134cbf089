// This module contains strategies for:
//  * points
//  * point sets with many ties
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Bounded points

/// Finite floating point coordinates far away from overflow.
pub fn any_finite() -> impl Strategy<Value = Point<f64>> {
  (-1e6f64..1e6f64, -1e6f64..1e6f64).prop_map(|(x, y)| Point::new([x, y]))
}

/// Coordinates on a small grid. Duplicates, shared extremes and colinear
/// triples show up in almost every sample.
pub fn small_point() -> impl Strategy<Value = Point<i32>> {
  (-20i32..20, -20i32..20).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn small_points(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec(small_point(), len)
}

/// Coordinates large enough to leave the grid but small enough that the
/// orientation predicate cannot overflow.
pub fn wide_points(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point<i64>>> {
  vec(
    (-1_000_000i64..1_000_000, -1_000_000i64..1_000_000).prop_map(|(x, y)| Point::new([x, y])),
    len,
  )
}
