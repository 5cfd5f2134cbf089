//! Random point sets for tests and benchmarks.
//!
//! Every generator draws from the given [`Rng`], so a seeded generator gives
//! reproducible point sets.
//!
//! ```rust
//! # use quadrant_hull::generators::Distribution;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! for dist in Distribution::ALL {
//!   assert_eq!(dist.generate(100, &mut rng).len(), 100);
//! }
//! ```
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;

use crate::data::Point;

/// Points uniform in angle and distance around a random centre, so denser
/// towards the centre.
pub fn in_circle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  let radius = rng.gen::<f64>() * 1000.0;
  let center = [rng.gen::<f64>() * 5000.0, rng.gen::<f64>() * 5000.0];
  let mut points = Vec::with_capacity(n);
  push_circle(&mut points, n, center, radius, rng);
  points
}

/// Five [circles](in_circle) of random size and position. Each of the first
/// four takes a random share of at most 90% of the points left.
pub fn in_five_circles<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  let mut points = Vec::with_capacity(n);
  let mut left = n;
  for circle in 1..=5 {
    let radius = rng.gen::<f64>() * 1000.0;
    let center = [rng.gen::<f64>() * 10000.0, rng.gen::<f64>() * 10000.0];
    let count = if circle < 5 {
      (rng.gen::<f64>() * left as f64 * 0.9) as usize
    } else {
      left
    };
    left -= count;
    push_circle(&mut points, count, center, radius, rng);
  }
  points
}

fn push_circle<R: Rng + ?Sized>(
  points: &mut Vec<Point<f64>>,
  n: usize,
  center: [f64; 2],
  radius: f64,
  rng: &mut R,
) {
  for _ in 0..n {
    let length = rng.gen::<f64>() * radius;
    let angle = rng.gen::<f64>() * 2.0 * PI;
    points.push(Point::new([
      center[0] + angle.cos() * length,
      center[1] + angle.sin() * length,
    ]));
  }
}

/// Uniform in `[0, 1000)²`.
pub fn in_rectangle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  (0..n)
    .map(|_| Point::new([rng.gen::<f64>() * 1000.0, rng.gen::<f64>() * 1000.0]))
    .collect()
}

/// Random walk. Both the start and every step are uniform in `[-500, 500)²`.
pub fn throw_away<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  let mut x = rng.gen::<f64>() * 1000.0 - 500.0;
  let mut y = rng.gen::<f64>() * 1000.0 - 500.0;
  (0..n)
    .map(|_| {
      x += rng.gen::<f64>() * 1000.0 - 500.0;
      y += rng.gen::<f64>() * 1000.0 - 500.0;
      Point::new([x, y])
    })
    .collect()
}

/// Points on the lower right quarter of a circle. Every point is a hull
/// vertex, which is the worst case for output-sensitive algorithms.
pub fn on_arc_fourth_quadrant<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  let radius_max = rng.gen::<f64>() * 1000.0;
  let center = [rng.gen::<f64>() * 10000.0, rng.gen::<f64>() * 10000.0];
  let length = rng.gen::<f64>() * radius_max;
  (0..n)
    .map(|_| {
      let angle = rng.gen::<f64>() * PI / 2.0;
      Point::new([
        center[0] + angle.cos() * length,
        center[1] - angle.sin() * length,
      ])
    })
    .collect()
}

/// Area-uniform points in the unit disk centred on the origin.
pub fn in_unit_disk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<f64>> {
  (0..n)
    .map(|_| {
      let r = rng.gen::<f64>().sqrt();
      let angle = rng.gen::<f64>() * 2.0 * PI;
      Point::new([r * angle.cos(), r * angle.sin()])
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
  Circle,
  FiveCircles,
  Rectangle,
  ThrowAway,
  ArcFourthQuadrant,
  UnitDisk,
}

impl Distribution {
  pub const ALL: [Distribution; 6] = [
    Distribution::Circle,
    Distribution::FiveCircles,
    Distribution::Rectangle,
    Distribution::ThrowAway,
    Distribution::ArcFourthQuadrant,
    Distribution::UnitDisk,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Distribution::Circle => "circle",
      Distribution::FiveCircles => "five_circles",
      Distribution::Rectangle => "rectangle",
      Distribution::ThrowAway => "throw_away",
      Distribution::ArcFourthQuadrant => "arc",
      Distribution::UnitDisk => "unit_disk",
    }
  }

  pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Vec<Point<f64>> {
    match self {
      Distribution::Circle => in_circle(n, rng),
      Distribution::FiveCircles => in_five_circles(n, rng),
      Distribution::Rectangle => in_rectangle(n, rng),
      Distribution::ThrowAway => throw_away(n, rng),
      Distribution::ArcFourthQuadrant => on_arc_fourth_quadrant(n, rng),
      Distribution::UnitDisk => in_unit_disk(n, rng),
    }
  }
}

impl fmt::Display for Distribution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
