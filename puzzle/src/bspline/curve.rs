use super::fit::*;
use super::basis::*;
use crate::error::*;
use crate::jitter::*;
use crate::transform::*;
use crate::coordinate::*;

use rand::Rng;
use serde_derive::{Serialize, Deserialize};

/// Number of points each spline curve is sampled at
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Interior knots chosen for the puzzle tab template (in control point index space)
pub const TEMPLATE_KNOTS: [f64; 3] = [2.0, 3.0, 4.0];

///
/// Control points for the edge of a puzzle piece, running from (0, 0) to (20, 0) with a tab in the middle
///
pub const TEMPLATE_CONTROL_POINTS: [Coord2; 9] = [
    Coord2(0.0, 0.0), Coord2(7.0, 1.0),
    Coord2(9.0, 0.0),
    Coord2(8.0, -2.0), Coord2(10.0, -3.0), Coord2(12.0, -2.0),
    Coord2(11.0, 0.0),
    Coord2(13.0, 1.0), Coord2(20.0, 0.0)
];

///
/// Describes how spline curves are fitted and sampled
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Interior knots, in control point index space
    pub knots: Vec<f64>,

    /// The number of points to sample along each curve
    pub sample_count: usize
}

impl Default for SplineConfig {
    fn default() -> SplineConfig {
        SplineConfig {
            knots:          TEMPLATE_KNOTS.to_vec(),
            sample_count:   DEFAULT_SAMPLE_COUNT
        }
    }
}

///
/// A cubic basis spline fitted through a set of control points and sampled at evenly spaced intervals
///
/// The control points are fixed once the curve is created: transformations only move the samples.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SplineCurve {
    control_x:  Vec<f64>,
    control_y:  Vec<f64>,
    samples:    Vec<Coord2>
}

impl SplineCurve {
    ///
    /// Fits a spline through a set of control points, jittering every control point except the
    /// first and last by up to `jitter` on each axis
    ///
    pub fn new<R: Rng+?Sized>(control_points: &[Coord2], jitter: f64, config: &SplineConfig, rng: &mut R) -> Result<SplineCurve, PuzzleError> {
        let jitter                  = check_jitter(jitter)?;
        let fit                     = SplineFit::new(&config.knots, control_points.len())?;
        let (control_x, control_y)  = split_axes(control_points);

        let control_x               = perturb_interior(&control_x, jitter, rng);
        let control_y               = perturb_interior(&control_y, jitter, rng);

        Self::fit_samples(&fit, control_x, control_y, config.sample_count)
    }

    ///
    /// Fits a spline through a set of control points without jittering them
    ///
    pub fn from_template(control_points: &[Coord2], config: &SplineConfig) -> Result<SplineCurve, PuzzleError> {
        let fit                     = SplineFit::new(&config.knots, control_points.len())?;
        let (control_x, control_y)  = split_axes(control_points);

        Self::fit_samples(&fit, control_x, control_y, config.sample_count)
    }

    ///
    /// Fits both axes and samples the result
    ///
    fn fit_samples(fit: &SplineFit, control_x: Vec<f64>, control_y: Vec<f64>, sample_count: usize) -> Result<SplineCurve, PuzzleError> {
        if sample_count < 2 {
            return Err(PuzzleError::InvalidSampleCount(sample_count));
        }

        let coefficients_x  = fit.fit(&control_x)?;
        let coefficients_y  = fit.fit(&control_y)?;

        let knots           = fit.knots();
        let end             = knots.end();
        let last_sample     = sample_count-1;

        let samples = (0..sample_count)
            .map(|sample_num| {
                // Pin the last sample to the end of the range rather than relying on rounding
                let t = if sample_num == last_sample { end } else { end * (sample_num as f64) / (last_sample as f64) };
                Coord2(evaluate(knots, &coefficients_x, t), evaluate(knots, &coefficients_y, t))
            })
            .collect();

        Ok(SplineCurve { control_x, control_y, samples })
    }

    ///
    /// The x coordinates of the control points (after any jitter)
    ///
    #[inline]
    pub fn control_x(&self) -> &[f64] {
        &self.control_x
    }

    ///
    /// The y coordinates of the control points (after any jitter)
    ///
    #[inline]
    pub fn control_y(&self) -> &[f64] {
        &self.control_y
    }

    ///
    /// The control points this curve was fitted through
    ///
    pub fn control_points(&self) -> Vec<Coord2> {
        self.control_x.iter()
            .zip(self.control_y.iter())
            .map(|(x, y)| Coord2(*x, *y))
            .collect()
    }

    ///
    /// The points sampled along this curve
    ///
    #[inline]
    pub fn samples(&self) -> &[Coord2] {
        &self.samples
    }

    ///
    /// Consumes this curve, returning the sampled points
    ///
    #[inline]
    pub fn into_samples(self) -> Vec<Coord2> {
        self.samples
    }
}

impl SampledCurve for SplineCurve {
    #[inline]
    fn samples(&self) -> &[Coord2] {
        &self.samples
    }

    #[inline]
    fn samples_mut(&mut self) -> &mut [Coord2] {
        &mut self.samples
    }
}

///
/// Splits a list of points into separate lists of x and y coordinates
///
fn split_axes(points: &[Coord2]) -> (Vec<f64>, Vec<f64>) {
    points.iter()
        .map(|point| (point.x(), point.y()))
        .unzip()
}
