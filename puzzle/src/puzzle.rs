use crate::error::*;
use crate::edges::*;
use crate::config::*;
use crate::lattice::*;
use crate::bspline::*;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use log::*;

///
/// A generated puzzle: the lattice of piece corners and the edges that join them
///
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub lattice:    Lattice,
    pub segments:   Vec<Segment>
}

///
/// Generates a puzzle using a random number generator
///
/// The lattice is built first and then the edges are generated, so the same generator state always
/// produces the same puzzle.
///
pub fn generate_puzzle_with_rng<R: Rng+?Sized>(config: &PuzzleConfig, rng: &mut R) -> Result<Puzzle, PuzzleError> {
    config.validate()?;

    // Check the template before any random numbers are used
    let synthesizer = config.edge_synthesizer()?;
    let lattice     = Lattice::new(config.rows, config.cols, config.grid_jitter, rng)?;
    let segments    = synthesizer.synthesize(&lattice, rng)?;

    Ok(Puzzle { lattice, segments })
}

///
/// Generates a puzzle, seeding the random number generator from the configuration (or from entropy if no seed is set)
///
pub fn generate_puzzle(config: &PuzzleConfig) -> Result<Puzzle, PuzzleError> {
    let mut rng = config_rng(config);

    info!("Generating {}x{} puzzle (seed {:?})", config.rows, config.cols, config.seed);

    generate_puzzle_with_rng(config, &mut rng)
}

///
/// Generates a single edge curve from the template in a configuration, without moving it onto a lattice
///
/// The template control points are jittered by the configured control point jitter, so this shows
/// what one interior edge can look like before it's aligned.
///
pub fn generate_spline_preview_with_rng<R: Rng+?Sized>(config: &PuzzleConfig, rng: &mut R) -> Result<SplineCurve, PuzzleError> {
    SplineCurve::new(&config.template_control_points, config.control_point_jitter, &config.spline, rng)
}

///
/// Generates a single edge curve, seeding the random number generator the same way as `generate_puzzle()`
///
pub fn generate_spline_preview(config: &PuzzleConfig) -> Result<SplineCurve, PuzzleError> {
    let mut rng = config_rng(config);

    info!("Generating spline preview with {} control points (seed {:?})", config.template_control_points.len(), config.seed);

    generate_spline_preview_with_rng(config, &mut rng)
}

///
/// Creates the random number generator described by a configuration
///
fn config_rng(config: &PuzzleConfig) -> StdRng {
    match config.seed {
        Some(seed)  => StdRng::seed_from_u64(seed),
        None        => StdRng::from_entropy()
    }
}
