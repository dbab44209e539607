//!
//! # Basis splines
//!
//! A `SplineCurve` is fitted through a small set of control points using clamped cubic
//! basis functions with fixed interior knots, then sampled at evenly spaced parameter values.
//! The fit is a least-squares fit that always passes through the first and last control point.
//!

mod knots;
mod basis;
mod fit;
mod curve;

pub use self::knots::*;
pub use self::basis::*;
pub use self::fit::*;
pub use self::curve::*;
