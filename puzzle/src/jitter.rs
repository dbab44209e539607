use crate::error::*;

use rand::Rng;

///
/// Generates a random offset in the range `-magnitude..=magnitude`
///
/// The sign and the size are drawn separately, so the offset is `± U(0,1) × magnitude`.
/// A magnitude of 0 draws nothing from the generator.
///
pub fn jitter<R: Rng+?Sized>(magnitude: f64, rng: &mut R) -> f64 {
    if magnitude == 0.0 {
        0.0
    } else {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        sign * rng.gen::<f64>() * magnitude
    }
}

///
/// Returns a copy of a list of values where every value except the first and last has been jittered
///
/// The endpoints are left alone so that a curve fitted through the values still starts and ends
/// where its template does.
///
pub fn perturb_interior<R: Rng+?Sized>(values: &[f64], magnitude: f64, rng: &mut R) -> Vec<f64> {
    let last = values.len().saturating_sub(1);

    values.iter()
        .enumerate()
        .map(|(index, value)| {
            if index == 0 || index == last {
                *value
            } else {
                *value + jitter(magnitude, rng)
            }
        })
        .collect()
}

///
/// Checks that a jitter magnitude can be used to perturb coordinates
///
pub fn check_jitter(magnitude: f64) -> Result<f64, PuzzleError> {
    if magnitude.is_finite() && magnitude >= 0.0 {
        Ok(magnitude)
    } else {
        Err(PuzzleError::InvalidJitter(magnitude))
    }
}
