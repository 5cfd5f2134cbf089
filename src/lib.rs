// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets.
//!
//! The main entry point is [`convex_hull`], an incremental algorithm that
//! splits the plane into four quadrants around the extreme points of the
//! input and maintains one monotone chain per quadrant.
//!
//! ```rust
//! use quadrant_hull::convex_hull;
//! use quadrant_hull::data::Point;
//!
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([2, 0]),
//!   Point::new([2, 2]),
//!   Point::new([0, 2]),
//!   Point::new([1, 1]),
//! ];
//! let hull = convex_hull(&pts, false);
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.contains(&Point::new([1, 1])));
//! ```
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::ops::BitXor;

pub mod algorithms;
pub mod compare;
pub mod data;
pub mod generators;
mod orientation;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::convex_hull::quadrant::{convex_hull, try_convex_hull};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// An input coordinate is NaN or infinite.
  NonFiniteCoordinate,
  /// Two vertices of the path are equal.
  DuplicatePoints,
  /// Three consecutive vertices are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types the hull algorithms can work with.
///
/// Every comparison the algorithms make is either a plain coordinate
/// comparison (`PartialOrd`) or an orientation test ([`HullScalar::cmp_slope`]).
pub trait HullScalar: std::fmt::Debug + Copy + PartialOrd + Send + Sync {
  /// Sign of the signed area of the triangle `p, q, r`.
  ///
  /// `Ordering::Greater` means `p -> q -> r` turns counter-clockwise,
  /// `Ordering::Less` means it turns clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  fn is_finite(&self) -> bool {
    true
  }
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong: ty ) => {
    impl HullScalar for $ty {
      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

// Native arithmetic: the signed area is rounded like any other float
// expression, so nearly colinear triples may be misclassified.
macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let area = (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0]);
          area.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
        }

        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $wrapper:ident, $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $wrapper<$ty> {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          <$ty as HullScalar>::cmp_slope(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          )
        }

        fn is_finite(&self) -> bool {
          self.into_inner().is_finite()
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
floating_precision!(f32, f64);
wrapped_floating_precision!(OrderedFloat, f32, f64);
wrapped_floating_precision!(NotNan, f32, f64);

#[cfg(test)]
pub mod testing;
