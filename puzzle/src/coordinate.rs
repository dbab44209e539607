use serde_derive::{Serialize, Deserialize};

use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a puzzle lattice or a sampled curve
///
pub trait Coordinate : Sized+Copy+PartialEq+Add<Self, Output=Self>+Mul<f64, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    fn dot(&self, target: &Self) -> f64;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f64 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f64::sqrt(squared_distance)
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    ///
    /// The angle of the vector from this point to another, measured clockwise from the x axis
    ///
    /// This is the angle that `CurveTransform::rotate()` expects: rotating a vector along the
    /// x axis by this amount makes it point from this coordinate towards the target.
    ///
    /// `rotate()` applies `[[cos θ, sin θ], [-sin θ, cos θ]]`, which turns `(d, 0)` into
    /// `(d cos θ, -d sin θ)`. Matching that to `(dx, dy)` needs `sin θ = -dy/d`, so the angle is
    /// `atan2(-dy, dx)`. The counter-clockwise `atan2(dy, dx)` would send the end point to
    /// `(dx, -dy)`, which misses the target whenever `dy` is not 0.
    ///
    #[inline]
    fn clockwise_angle_to(&self, target: &Self) -> f64 {
        let dx = target.x() - self.x();
        let dy = target.y() - self.y();

        f64::atan2(-dy, dx)
    }
}

/// Represents a 2D point
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1
    }
}
