pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::quadrant::convex_hull;

#[doc(inline)]
pub use convex_hull::quadrant::parallel::convex_hull_par;
