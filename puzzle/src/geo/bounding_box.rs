use super::geo::*;
use crate::coordinate::*;

use serde_derive::{Serialize, Deserialize};

///
/// Trait implemented by things representing axis-aligned bounding boxes
///
pub trait BoundingBox : Geo+Sized {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Returns a bounding box containing a set of points (or None if there are no points)
    ///
    fn bounds_for_points<PointIter: IntoIterator<Item=Self::Point>>(points: PointIter) -> Option<Self> {
        let mut points  = points.into_iter();
        let first       = points.next()?;

        let (min, max)  = points.fold((first, first), |(min, max), point| {
            (Self::Point::from_smallest_components(min, point), Self::Point::from_biggest_components(max, point))
        });

        Some(Self::from_min_max(min, max))
    }

    ///
    /// Returns a copy of this bounding box grown by the same amount in every direction
    ///
    fn inflate(&self, amount: Self::Point) -> Self {
        Self::from_min_max(self.min() - amount, self.max() + amount)
    }
}

///
/// Type representing a bounding box
///
/// (Unlike a normal point tuple this always represents its bounds in minimum/maximum order)
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds<Point: Coordinate>(Point, Point);

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point=Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        Bounds(Point::from_smallest_components(min, max), Point::from_biggest_components(min, max))
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}

impl Bounds<Coord2> {
    ///
    /// The size of these bounds along the x and y axes
    ///
    #[inline]
    pub fn size(&self) -> Coord2 {
        self.1 - self.0
    }
}
