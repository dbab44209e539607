use crate::error::*;
use crate::jitter::*;
use crate::lattice::*;
use crate::bspline::*;
use crate::transform::*;
use crate::coordinate::*;

use rand::Rng;
use log::*;
use serde_derive::{Serialize, Deserialize};

/// Default jitter magnitude for the control points of each piece edge
pub const DEFAULT_CONTROL_POINT_JITTER: f64 = 0.75;

/// How close to exactly 1 apart two points must be along an axis for their edge to be straight
const ALIGNED_TOLERANCE: f64 = 1e-12;

///
/// A polyline to draw: either a 2-point straight edge or the samples of a curved edge
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>
}

impl Segment {
    ///
    /// Creates a straight segment between two points
    ///
    pub fn straight(start: Coord2, end: Coord2) -> Segment {
        Segment {
            xs: vec![start.x(), end.x()],
            ys: vec![start.y(), end.y()]
        }
    }

    ///
    /// Creates a segment that follows a list of points
    ///
    pub fn from_samples(samples: &[Coord2]) -> Segment {
        let (xs, ys) = samples.iter().map(|point| (point.x(), point.y())).unzip();
        Segment { xs, ys }
    }

    /// The number of points in this segment
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// True if this segment is a single straight line
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.xs.len() == 2
    }

    ///
    /// The points making up this segment
    ///
    pub fn points<'a>(&'a self) -> impl 'a+Iterator<Item=Coord2> {
        self.xs.iter().zip(self.ys.iter()).map(|(x, y)| Coord2(*x, *y))
    }

    /// The first point in this segment
    pub fn start(&self) -> Option<Coord2> {
        self.points().next()
    }

    /// The last point in this segment
    pub fn end(&self) -> Option<Coord2> {
        self.points().last()
    }
}

///
/// How the edges between interior points are drawn
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Interior edges are basis splines shaped like a puzzle tab
    BSpline,

    /// Every edge is a straight line
    Straight
}

impl Default for EdgeStyle {
    fn default() -> EdgeStyle { EdgeStyle::BSpline }
}

///
/// True if two neighbouring points are exactly one unit apart along the axis they're separated by
///
/// This only happens when neither point was jittered, which is the case along the boundary of a lattice.
///
pub fn is_aligned(start: &LatticePoint, end: &LatticePoint, neighbour: Neighbour) -> bool {
    let offset = match neighbour {
        Neighbour::Below    => start.x() - end.x(),
        Neighbour::Right    => start.y() - end.y()
    };

    (offset.abs() - 1.0).abs() <= ALIGNED_TOLERANCE
}

///
/// Generates the segments that join the points in a lattice
///
#[derive(Clone, Debug)]
pub struct EdgeSynthesizer {
    /// Control points for the shape of an edge, running from its start point to its end point
    template:               Vec<Coord2>,

    /// How far each interior control point can move for each edge
    control_point_jitter:   f64,

    /// Fitting and sampling settings for the edge splines
    spline:                 SplineConfig,

    /// Whether or not to generate curves
    style:                  EdgeStyle
}

impl EdgeSynthesizer {
    ///
    /// Creates an edge synthesizer that shapes interior edges after a template
    ///
    /// The template is fitted once here so that invalid control points are reported before any edges are generated.
    ///
    pub fn new(template: &[Coord2], control_point_jitter: f64, spline: SplineConfig, style: EdgeStyle) -> Result<EdgeSynthesizer, PuzzleError> {
        let control_point_jitter = check_jitter(control_point_jitter)?;

        // A template that starts and ends in the same place can't be stretched between two points
        if style == EdgeStyle::BSpline {
            let mut preview = SplineCurve::from_template(template, &spline)?;
            preview.scale(1.0)?;
        }

        Ok(EdgeSynthesizer {
            template:               template.to_vec(),
            control_point_jitter:   control_point_jitter,
            spline:                 spline,
            style:                  style
        })
    }

    ///
    /// Creates an edge synthesizer with the default jitter and spline settings
    ///
    pub fn with_template(template: &[Coord2]) -> Result<EdgeSynthesizer, PuzzleError> {
        Self::new(template, DEFAULT_CONTROL_POINT_JITTER, SplineConfig::default(), EdgeStyle::BSpline)
    }

    ///
    /// Generates the segment between two neighbouring points
    ///
    pub fn edge_between<R: Rng+?Sized>(&self, start: &LatticePoint, end: &LatticePoint, neighbour: Neighbour, rng: &mut R) -> Result<Segment, PuzzleError> {
        if self.style == EdgeStyle::Straight || is_aligned(start, end, neighbour) {
            trace!("Straight edge ({}, {}) {:?}", start.row, start.col, neighbour);
            Ok(Segment::straight(start.position, end.position))
        } else {
            trace!("Curved edge ({}, {}) {:?}", start.row, start.col, neighbour);

            let mut curve = SplineCurve::new(&self.template, self.control_point_jitter, &self.spline, rng)?;
            curve.align_to(start.position, end.position)?;

            Ok(Segment::from_samples(curve.samples()))
        }
    }

    ///
    /// Generates one segment for every pair of adjacent points in a lattice
    ///
    /// Segments are in row-major order of their start point, with the edge to the point below before
    /// the edge to the point on the right.
    ///
    pub fn synthesize<R: Rng+?Sized>(&self, lattice: &Lattice, rng: &mut R) -> Result<Vec<Segment>, PuzzleError> {
        let mut segments = Vec::with_capacity(lattice.num_adjacencies());

        for (start, end, neighbour) in lattice.adjacencies() {
            segments.push(self.edge_between(start, end, neighbour, rng)?);
        }

        debug!("Synthesized {} edges ({} curved)", segments.len(), segments.iter().filter(|segment| !segment.is_straight()).count());

        Ok(segments)
    }
}

///
/// Generates the segments for a lattice using the default edge settings
///
pub fn synthesize_edges<R: Rng+?Sized>(lattice: &Lattice, template: &[Coord2], rng: &mut R) -> Result<Vec<Segment>, PuzzleError> {
    EdgeSynthesizer::with_template(template)?.synthesize(lattice, rng)
}
