use super::knots::*;
use super::basis::*;
use crate::error::*;

/// Pivots smaller than this are treated as zero when solving the fit
const SINGULAR_PIVOT: f64 = 1e-12;

///
/// A least-squares fit of a clamped cubic spline to values sampled at the parameters `0, 1, 2, ...`
///
/// The first and last coefficients are pinned to the first and last values, which makes the
/// spline pass exactly through both end values. The remaining coefficients minimise the squared
/// error against the interior values. The normal equations only depend on the knots, so one fit
/// can be reused for both axes of a curve.
///
#[derive(Clone, Debug)]
pub struct SplineFit {
    /// The knots the spline is fitted on
    knots: KnotVector,

    /// Basis function values for each of the values being fitted
    design: Vec<Vec<f64>>,

    /// Normal matrix for the free coefficients (row-major, `free*free` entries)
    normal: Vec<f64>
}

impl SplineFit {
    ///
    /// Prepares a fit of `num_points` values using the specified interior knots
    ///
    pub fn new(interior_knots: &[f64], num_points: usize) -> Result<SplineFit, ControlPointError> {
        let knots   = KnotVector::clamped(interior_knots, num_points)?;
        let design  = (0..num_points)
            .map(|index| basis_row(&knots, index as f64))
            .collect::<Vec<_>>();

        // Only the interior rows and interior coefficients take part in the least-squares problem
        let free        = knots.num_coefficients()-2;
        let mut normal  = vec![0.0; free*free];

        for row in &design[1..num_points-1] {
            for i in 0..free {
                for j in 0..free {
                    normal[i*free + j] += row[i+1] * row[j+1];
                }
            }
        }

        let fit = SplineFit { knots, design, normal };

        // Fitting all zeros checks that the system can be solved before any real values are used
        fit.fit(&vec![0.0; num_points])?;

        Ok(fit)
    }

    ///
    /// The knots used by this fit
    ///
    #[inline]
    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    ///
    /// Computes the spline coefficients that best fit a set of values
    ///
    pub fn fit(&self, values: &[f64]) -> Result<Vec<f64>, ControlPointError> {
        let num_points          = self.design.len();
        let num_coefficients    = self.knots.num_coefficients();
        let free                = num_coefficients-2;

        if values.len() != num_points {
            return Err(ControlPointError::WrongNumberOfValues { expected: num_points, actual: values.len() });
        }

        let first   = values[0];
        let last    = values[num_points-1];

        // Right-hand side: the interior values with the contribution of the pinned coefficients removed
        let mut rhs = vec![0.0; free];
        for (row, value) in self.design[1..num_points-1].iter().zip(values[1..num_points-1].iter()) {
            let residual = value - row[0]*first - row[num_coefficients-1]*last;

            for i in 0..free {
                rhs[i] += row[i+1] * residual;
            }
        }

        let interior = solve_linear_system(self.normal.clone(), rhs)?;

        let mut coefficients = Vec::with_capacity(num_coefficients);
        coefficients.push(first);
        coefficients.extend(interior);
        coefficients.push(last);

        Ok(coefficients)
    }
}

///
/// Solves `matrix * x = rhs` by Gaussian elimination with partial pivoting
///
fn solve_linear_system(mut matrix: Vec<f64>, mut rhs: Vec<f64>) -> Result<Vec<f64>, ControlPointError> {
    let size = rhs.len();

    for col in 0..size {
        // Swap the row with the largest value in this column into place
        let pivot_row = (col..size)
            .max_by(|a, b| matrix[a*size + col].abs().total_cmp(&matrix[b*size + col].abs()))
            .unwrap_or(col);

        if matrix[pivot_row*size + col].abs() < SINGULAR_PIVOT {
            return Err(ControlPointError::SingularFit);
        }

        if pivot_row != col {
            for k in 0..size {
                matrix.swap(pivot_row*size + k, col*size + k);
            }
            rhs.swap(pivot_row, col);
        }

        // Eliminate this column from the rows below
        let pivot = matrix[col*size + col];
        for row in (col+1)..size {
            let factor = matrix[row*size + col] / pivot;
            if factor == 0.0 { continue; }

            for k in col..size {
                matrix[row*size + k] -= factor * matrix[col*size + k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back substitution
    let mut result = vec![0.0; size];
    for row in (0..size).rev() {
        let known: f64 = ((row+1)..size).map(|k| matrix[row*size + k] * result[k]).sum();
        result[row] = (rhs[row] - known) / matrix[row*size + row];
    }

    Ok(result)
}
