use crate::error::*;
use crate::edges::*;
use crate::bspline::*;
use crate::lattice::*;
use crate::jitter::*;
use crate::coordinate::*;

use serde_derive::{Serialize, Deserialize};

///
/// The settings used to generate a puzzle
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of rows of points (along the x axis)
    pub rows: usize,

    /// Number of columns of points (along the y axis)
    pub cols: usize,

    /// How far interior lattice points can be moved from their integer positions
    pub grid_jitter: f64,

    /// How far the interior control points of each edge can be moved
    pub control_point_jitter: f64,

    /// The shape of a piece edge, running from its start point to its end point
    pub template_control_points: Vec<Coord2>,

    /// Fitting and sampling settings for the edge splines
    #[serde(flatten)]
    pub spline: SplineConfig,

    /// Whether interior edges are curves or straight lines
    pub edge_style: EdgeStyle,

    /// Seed for the random number generator (a random seed is chosen if this is not set)
    pub seed: Option<u64>
}

impl Default for PuzzleConfig {
    fn default() -> PuzzleConfig {
        PuzzleConfig {
            rows:                       7,
            cols:                       9,
            grid_jitter:                DEFAULT_GRID_JITTER,
            control_point_jitter:       DEFAULT_CONTROL_POINT_JITTER,
            template_control_points:    TEMPLATE_CONTROL_POINTS.to_vec(),
            spline:                     SplineConfig::default(),
            edge_style:                 EdgeStyle::default(),
            seed:                       None
        }
    }
}

impl PuzzleConfig {
    ///
    /// Creates the default configuration for a lattice of a particular size
    ///
    pub fn with_size(rows: usize, cols: usize) -> PuzzleConfig {
        PuzzleConfig {
            rows:   rows,
            cols:   cols,
            ..PuzzleConfig::default()
        }
    }

    ///
    /// Checks the parts of this configuration that don't need a spline fit to verify
    ///
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(PuzzleError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }

        check_jitter(self.grid_jitter)?;
        check_jitter(self.control_point_jitter)?;

        if self.spline.sample_count < 2 {
            return Err(PuzzleError::InvalidSampleCount(self.spline.sample_count));
        }

        Ok(())
    }

    ///
    /// Creates the edge synthesizer described by this configuration
    ///
    pub fn edge_synthesizer(&self) -> Result<EdgeSynthesizer, PuzzleError> {
        EdgeSynthesizer::new(&self.template_control_points, self.control_point_jitter, self.spline.clone(), self.edge_style)
    }
}
