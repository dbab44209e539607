use std::fmt;
use std::error::Error;

///
/// Reasons why a set of control points cannot be fitted with a basis spline
///
#[derive(Clone, Debug, PartialEq)]
pub enum ControlPointError {
    /// A cubic fit needs at least 4 control points (the value is the number that were supplied)
    TooFewPoints(usize),

    /// An interior knot is not strictly inside the index range of the control points
    KnotOutOfRange(f64),

    /// The interior knots must be strictly increasing
    KnotsNotIncreasing,

    /// There are more spline coefficients than control points to determine them
    TooManyKnots { knots: usize, points: usize },

    /// The least-squares system for the fit has no unique solution
    SingularFit,

    /// A fit was prepared for one number of values but given a different number
    WrongNumberOfValues { expected: usize, actual: usize }
}

///
/// Errors that can occur while generating a puzzle
///
#[derive(Clone, Debug, PartialEq)]
pub enum PuzzleError {
    /// The control points (or the knots used to fit them) can't produce a spline
    InvalidControlPoints(ControlPointError),

    /// A curve can't be scaled because its endpoints (or the target endpoints) are in the same place
    DegenerateCurve,

    /// A lattice must have at least one row and one column
    InvalidDimensions { rows: usize, cols: usize },

    /// Jitter magnitudes must be finite and non-negative
    InvalidJitter(f64),

    /// Curves must be sampled at 2 or more points
    InvalidSampleCount(usize)
}

impl From<ControlPointError> for PuzzleError {
    fn from(err: ControlPointError) -> PuzzleError {
        PuzzleError::InvalidControlPoints(err)
    }
}

impl fmt::Display for ControlPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ControlPointError::*;

        match self {
            TooFewPoints(count)                      => write!(f, "at least 4 control points are required (got {})", count),
            KnotOutOfRange(knot)                     => write!(f, "knot {} is outside the control point index range", knot),
            KnotsNotIncreasing                       => write!(f, "knots must be strictly increasing"),
            TooManyKnots { knots, points }           => write!(f, "{} knots need more than {} control points", knots, points),
            SingularFit                              => write!(f, "the control points do not determine a unique spline"),
            WrongNumberOfValues { expected, actual } => write!(f, "expected {} values to fit (got {})", expected, actual)
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::PuzzleError::*;

        match self {
            InvalidControlPoints(err)           => write!(f, "invalid control points: {}", err),
            DegenerateCurve                     => write!(f, "cannot scale a curve between two identical points"),
            InvalidDimensions { rows, cols }    => write!(f, "invalid lattice dimensions {}x{}", rows, cols),
            InvalidJitter(jitter)               => write!(f, "invalid jitter magnitude {}", jitter),
            InvalidSampleCount(count)           => write!(f, "curves need at least 2 samples (got {})", count)
        }
    }
}

impl Error for ControlPointError { }

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PuzzleError::InvalidControlPoints(err)  => Some(err),
            _                                       => None
        }
    }
}
