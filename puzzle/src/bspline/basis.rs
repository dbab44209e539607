use super::knots::*;

///
/// Finds the index of the knot span containing `t`
///
/// The result `span` satisfies `knots[span] <= t < knots[span+1]`, except at the very end of the
/// parameter range where the last non-empty span is returned.
///
pub fn find_span(knots: &KnotVector, t: f64) -> usize {
    let knot_values = knots.knots();
    let last        = knots.num_coefficients()-1;

    if t >= knot_values[last+1] {
        return last;
    }

    if t <= knot_values[DEGREE] {
        return DEGREE;
    }

    // Binary search between the clamped ends
    let mut low     = DEGREE;
    let mut high    = last+1;
    let mut mid     = (low+high)/2;

    while t < knot_values[mid] || t >= knot_values[mid+1] {
        if t < knot_values[mid] {
            high = mid;
        } else {
            low = mid;
        }

        mid = (low+high)/2;
    }

    mid
}

///
/// Computes the `DEGREE+1` basis functions that are non-zero in a span at the parameter `t`
///
/// Entry `i` is the value of basis function `span-DEGREE+i`. The values always sum to 1.
///
pub fn basis_functions(knots: &KnotVector, span: usize, t: f64) -> [f64; DEGREE+1] {
    let knot_values     = knots.knots();
    let mut basis       = [0.0; DEGREE+1];
    let mut left        = [0.0; DEGREE+1];
    let mut right       = [0.0; DEGREE+1];

    basis[0] = 1.0;

    for j in 1..=DEGREE {
        left[j]         = t - knot_values[span+1-j];
        right[j]        = knot_values[span+j] - t;
        let mut saved   = 0.0;

        for r in 0..j {
            let temp    = basis[r] / (right[r+1] + left[j-r]);
            basis[r]    = saved + right[r+1]*temp;
            saved       = left[j-r]*temp;
        }

        basis[j] = saved;
    }

    basis
}

///
/// Evaluates every basis function at `t`, returning one weight per spline coefficient
///
pub fn basis_row(knots: &KnotVector, t: f64) -> Vec<f64> {
    let mut row = vec![0.0; knots.num_coefficients()];
    let span    = find_span(knots, t);
    let basis   = basis_functions(knots, span, t);

    for (offset, weight) in basis.iter().enumerate() {
        row[span-DEGREE+offset] = *weight;
    }

    row
}

///
/// Evaluates the spline with the specified coefficients at `t`
///
/// Parameters outside of the knot range are clamped, and the ends evaluate exactly to the first
/// and last coefficients.
///
pub fn evaluate(knots: &KnotVector, coefficients: &[f64], t: f64) -> f64 {
    if t <= knots.start() {
        coefficients[0]
    } else if t >= knots.end() {
        coefficients[coefficients.len()-1]
    } else {
        let span    = find_span(knots, t);
        let basis   = basis_functions(knots, span, t);

        basis.iter()
            .enumerate()
            .map(|(offset, weight)| coefficients[span-DEGREE+offset] * weight)
            .sum()
    }
}
