use array_init::{array_init, try_array_init};
use num_traits::float::FloatCore;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; N]) -> Point<NotNan<T>, N>
  where
    T: FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// True if no coordinate is NaN or infinite.
  pub fn is_finite(&self) -> bool
  where
    T: HullScalar,
  {
    self.array.iter().all(HullScalar::is_finite)
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Direction of the turn `p -> q -> r`.
  pub fn orient(p: &Point<T, 2>, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  /// Same as [`Point::orient`]`(self, q, r)`.
  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: HullScalar,
  {
    Point::orient(self, q, r)
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Point<T, 2>> for (T, T) {
  fn from(point: Point<T, 2>) -> (T, T) {
    let [x, y] = point.array;
    (x, y)
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::Orientation::*;

  use rand::SeedableRng;

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::orient(
        &Point::new([0, 0]),
        &Point::new([1, 1]),
        &Point::new([2, 2])
      ),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 0]), &Point::new([1, 0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([2, 0]), &Point::new([0, 0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([0, 6]), &Point::new([0, 8])),
      ClockWise
    );
  }

  #[test]
  fn finite() {
    assert!(Point::new([1.0, -2.5]).is_finite());
    assert!(!Point::new([f64::NAN, 0.0]).is_finite());
    assert!(!Point::new([0.0, f32::INFINITY]).is_finite());
    assert!(Point::new([i8::MIN, i8::MAX]).is_finite());
  }

  #[test]
  fn not_nan_conversion() {
    assert!(Point::<NotNan<f64>>::try_from(Point::new([1.0, 2.0])).is_ok());
    assert!(Point::<NotNan<f64>>::try_from(Point::new([1.0, f64::NAN])).is_err());
  }

  #[test]
  fn not_nan_constructor() {
    let pt = Point::new_nn([1.5f32, -2.0]);
    assert_eq!(pt.array.map(NotNan::into_inner), [1.5, -2.0]);
    let converted = Point::<NotNan<f64>>::try_from(Point::new([0.5, 3.0])).unwrap();
    assert_eq!(Point::new_nn([0.5, 3.0]), converted);
  }

  #[test]
  #[should_panic]
  fn not_nan_constructor_panics() {
    Point::new_nn([0.0, f64::NAN]);
  }

  #[test]
  fn tuples() {
    let pt: Point<i32> = (3, 4).into();
    assert_eq!(pt.x_coord(), &3);
    assert_eq!(pt.y_coord(), &4);
    assert_eq!(<(i32, i32)>::from(pt), (3, 4));
  }

  #[test]
  fn sampling_is_seeded() {
    let a: Point<i16> = rand::rngs::SmallRng::seed_from_u64(7).gen();
    let b: Point<i16> = rand::rngs::SmallRng::seed_from_u64(7).gen();
    assert_eq!(a, b);
  }
}
