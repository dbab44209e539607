use crate::error::*;
use crate::coordinate::*;

use log::*;

///
/// Trait implemented by curves that are represented by a list of sampled points
///
pub trait SampledCurve {
    ///
    /// The sampled points, in order from the start of the curve to the end
    ///
    fn samples(&self) -> &[Coord2];

    ///
    /// Mutable access to the sampled points
    ///
    fn samples_mut(&mut self) -> &mut [Coord2];

    ///
    /// The first sampled point (or the origin if there are no samples)
    ///
    #[inline]
    fn start_point(&self) -> Coord2 {
        self.samples().first().cloned().unwrap_or_else(Coord2::origin)
    }

    ///
    /// The last sampled point (or the origin if there are no samples)
    ///
    #[inline]
    fn end_point(&self) -> Coord2 {
        self.samples().last().cloned().unwrap_or_else(Coord2::origin)
    }
}

impl SampledCurve for Vec<Coord2> {
    #[inline]
    fn samples(&self) -> &[Coord2] {
        self
    }

    #[inline]
    fn samples_mut(&mut self) -> &mut [Coord2] {
        self
    }
}

///
/// Transformations that move the samples of a curve so that its endpoints land on a target segment
///
/// These act on the sampled points only: for a `SplineCurve` the control points are left as they were.
///
pub trait CurveTransform : SampledCurve {
    ///
    /// Scales the curve about the origin so that the distance between its endpoints becomes `target_distance`
    ///
    fn scale(&mut self, target_distance: f64) -> Result<(), PuzzleError> {
        let original_distance = self.start_point().distance_to(&self.end_point());

        if original_distance == 0.0 || target_distance == 0.0 || !target_distance.is_finite() {
            return Err(PuzzleError::DegenerateCurve);
        }

        let scale_factor = original_distance / target_distance;
        for point in self.samples_mut().iter_mut() {
            *point = Coord2(point.0 / scale_factor, point.1 / scale_factor);
        }

        Ok(())
    }

    ///
    /// Rotates the curve clockwise about the origin by `angle` radians
    ///
    /// Every sample is multiplied by the matrix `[[cos θ, sin θ], [-sin θ, cos θ]]`. Use
    /// `Coordinate2D::clockwise_angle_to()` to find the angle that points a curve lying along the
    /// x axis towards a target.
    ///
    fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();

        for point in self.samples_mut().iter_mut() {
            let Coord2(x, y) = *point;
            *point = Coord2(cos*x + sin*y, -sin*x + cos*y);
        }
    }

    ///
    /// Moves every sample by an offset
    ///
    fn translate(&mut self, offset: Coord2) {
        for point in self.samples_mut().iter_mut() {
            *point = *point + offset;
        }
    }

    ///
    /// Scales, rotates and translates (in that order) this curve so that it runs from `start` to `end`
    ///
    /// The rotation and translation are relative to where the curve currently starts and points,
    /// so for a template that runs from the origin along the x axis they are exactly the angle
    /// from `start` to `end` and the position of `start`.
    ///
    fn align_to(&mut self, start: Coord2, end: Coord2) -> Result<(), PuzzleError> {
        self.scale(start.distance_to(&end))?;

        let chord_angle     = self.start_point().clockwise_angle_to(&self.end_point());
        let target_angle    = start.clockwise_angle_to(&end);
        self.rotate(target_angle - chord_angle);

        let offset          = start - self.start_point();
        self.translate(offset);

        trace!("Aligned curve to {:?} -> {:?}", start, end);

        Ok(())
    }
}

impl<Curve: SampledCurve> CurveTransform for Curve { }
