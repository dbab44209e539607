use crate::error::*;

/// Degree of the splines used for piece edges
pub const DEGREE: usize = 3;

///
/// A clamped knot vector for a cubic spline parameterised by control point index
///
/// The parameter runs from 0 to `num_points-1`. Both ends are repeated `DEGREE+1` times, so the
/// spline starts at its first coefficient and ends at its last.
///
#[derive(Clone, Debug, PartialEq)]
pub struct KnotVector {
    knots: Vec<f64>
}

impl KnotVector {
    ///
    /// Creates the clamped knot vector for fitting `num_points` values with the specified interior knots
    ///
    pub fn clamped(interior: &[f64], num_points: usize) -> Result<KnotVector, ControlPointError> {
        if num_points < DEGREE+1 {
            return Err(ControlPointError::TooFewPoints(num_points));
        }

        let end = (num_points-1) as f64;

        // Interior knots must lie strictly within the parameter range
        if let Some(bad_knot) = interior.iter().find(|knot| !(**knot > 0.0 && **knot < end)) {
            return Err(ControlPointError::KnotOutOfRange(*bad_knot));
        }

        if interior.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ControlPointError::KnotsNotIncreasing);
        }

        // Every coefficient needs at least one value to pin it down
        let num_coefficients = interior.len() + DEGREE + 1;
        if num_coefficients > num_points {
            return Err(ControlPointError::TooManyKnots { knots: interior.len(), points: num_points });
        }

        let mut knots = Vec::with_capacity(interior.len() + 2*(DEGREE+1));
        knots.extend((0..=DEGREE).map(|_| 0.0));
        knots.extend(interior.iter().cloned());
        knots.extend((0..=DEGREE).map(|_| end));

        Ok(KnotVector { knots })
    }

    ///
    /// The full list of knots, including the repeated knots at either end
    ///
    #[inline]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    ///
    /// The number of coefficients (and basis functions) a spline on these knots has
    ///
    #[inline]
    pub fn num_coefficients(&self) -> usize {
        self.knots.len() - DEGREE - 1
    }

    /// The first parameter value
    #[inline]
    pub fn start(&self) -> f64 {
        self.knots[0]
    }

    /// The last parameter value
    #[inline]
    pub fn end(&self) -> f64 {
        self.knots[self.knots.len()-1]
    }
}
