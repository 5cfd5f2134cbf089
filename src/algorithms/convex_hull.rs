//! Convex hulls of point sets.
//!
//! Every algorithm in this module takes a slice of points and a `close_path`
//! flag and returns the hull vertices in counter-clockwise order:
//!
//! * An empty input gives an empty hull.
//! * A single distinct point gives that point, never closed.
//! * Colinear inputs give the two end points.
//! * Colinear and duplicate points are never hull vertices.
//!
//! The starting vertex is algorithm specific. Use
//! [`compare_paths`](crate::compare::compare_paths) to compare the output of
//! two algorithms.
pub mod akl_toussaint;
pub mod monotone_chain;
pub mod quadrant;
