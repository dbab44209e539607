//!
//! # flo_puzzle
//!
//! Generates the outline of a jigsaw puzzle: a lattice of jittered points where every interior edge
//! is a randomised basis spline shaped like a puzzle tab and every boundary edge is a straight line.
//!
//! ```
//! use flo_puzzle::*;
//!
//! let puzzle = generate_puzzle(&PuzzleConfig { seed: Some(42), ..PuzzleConfig::with_size(4, 5) }).unwrap();
//! assert!(puzzle.segments.len() == 4*4 + 5*3);
//! ```
//!

#![warn(bare_trait_objects)]

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

mod error;
pub use self::error::*;

pub mod jitter;
pub use self::jitter::*;

pub mod bspline;
pub use self::bspline::{SplineCurve, SplineConfig, TEMPLATE_CONTROL_POINTS, TEMPLATE_KNOTS, DEFAULT_SAMPLE_COUNT};

mod transform;
pub use self::transform::*;

mod lattice;
pub use self::lattice::*;

mod edges;
pub use self::edges::*;

mod config;
pub use self::config::*;

mod puzzle;
pub use self::puzzle::*;
