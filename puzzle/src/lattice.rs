use crate::geo::*;
use crate::error::*;
use crate::jitter::*;
use crate::coordinate::*;

use rand::Rng;
use log::*;
use itertools::iproduct;
use serde_derive::{Serialize, Deserialize};

/// Default jitter magnitude for points in the interior of a lattice
pub const DEFAULT_GRID_JITTER: f64 = 0.1;

///
/// A point in a lattice, starting at its integer (row, column) position and possibly jittered away from it
///
/// The row is the x coordinate and the column is the y coordinate.
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticePoint {
    /// The row this point is in
    pub row:        usize,

    /// The column this point is in
    pub col:        usize,

    /// The magnitude of the jitter that was applied to this point
    pub jitter:     f64,

    /// Where the point ended up
    pub position:   Coord2
}

impl LatticePoint {
    ///
    /// Creates a point at (row, col), moved by up to `magnitude` along each axis
    ///
    pub fn new<R: Rng+?Sized>(row: usize, col: usize, magnitude: f64, rng: &mut R) -> LatticePoint {
        let x = row as f64 + jitter(magnitude, rng);
        let y = col as f64 + jitter(magnitude, rng);

        LatticePoint {
            row:        row,
            col:        col,
            jitter:     magnitude,
            position:   Coord2(x, y)
        }
    }
}

impl Coordinate2D for LatticePoint {
    #[inline]
    fn x(&self) -> f64 {
        self.position.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.position.1
    }
}

///
/// The two neighbours of a lattice point that have edges generated from it
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighbour {
    /// The point in the next row (one step along the x axis)
    Below,

    /// The point in the next column (one step along the y axis)
    Right
}

/// Neighbours in the order their edges are generated
static NEIGHBOURS: [Neighbour; 2] = [Neighbour::Below, Neighbour::Right];

///
/// An M×N grid of points where the interior points are jittered and the boundary points are not
///
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    rows:   usize,
    cols:   usize,

    /// The points, in row-major order
    points: Vec<LatticePoint>,

    /// The bounds of all of the points
    bounds: Bounds<Coord2>
}

impl Lattice {
    ///
    /// Creates a new lattice, jittering every point that isn't on the boundary by up to `grid_jitter` on each axis
    ///
    pub fn new<R: Rng+?Sized>(rows: usize, cols: usize, grid_jitter: f64, rng: &mut R) -> Result<Lattice, PuzzleError> {
        if rows < 1 || cols < 1 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }

        let grid_jitter = check_jitter(grid_jitter)?;

        let points = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| {
                // Boundary points must stay on their integer coordinates so their edges stay straight
                let magnitude = if is_boundary(rows, cols, row, col) { 0.0 } else { grid_jitter };
                LatticePoint::new(row, col, magnitude, rng)
            })
            .collect::<Vec<_>>();

        let bounds: Bounds<Coord2> = Bounds::bounds_for_points(points.iter().map(|point| point.position))
            .ok_or(PuzzleError::InvalidDimensions { rows, cols })?;

        debug!("Built {}x{} lattice with bounds {:?}", rows, cols, bounds);

        Ok(Lattice { rows, cols, points, bounds })
    }

    /// The number of rows in this lattice
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns in this lattice
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    ///
    /// All of the points in this lattice, in row-major order
    ///
    #[inline]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    ///
    /// The rows of this lattice, each as a slice of points in column order
    ///
    pub fn mesh(&self) -> impl Iterator<Item=&[LatticePoint]> {
        self.points.chunks(self.cols)
    }

    ///
    /// Retrieves the point at a particular row and column
    ///
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Option<&LatticePoint> {
        if row < self.rows && col < self.cols {
            self.points.get(row*self.cols + col)
        } else {
            None
        }
    }

    ///
    /// True if the specified row and column is on the edge of this lattice
    ///
    #[inline]
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        is_boundary(self.rows, self.cols, row, col)
    }

    ///
    /// Retrieves a neighbour of the point at (row, col)
    ///
    pub fn neighbour(&self, row: usize, col: usize, neighbour: Neighbour) -> Option<&LatticePoint> {
        match neighbour {
            Neighbour::Below    => self.point(row+1, col),
            Neighbour::Right    => self.point(row, col+1)
        }
    }

    ///
    /// Every pair of adjacent points, with each adjacency reported once
    ///
    /// Points are visited in row-major order, and for each point the edge to the point below
    /// comes before the edge to the point on the right.
    ///
    pub fn adjacencies(&self) -> impl '_+Iterator<Item=(&LatticePoint, &LatticePoint, Neighbour)> {
        self.points.iter()
            .flat_map(move |start| {
                NEIGHBOURS.iter()
                    .filter_map(move |neighbour| {
                        self.neighbour(start.row, start.col, *neighbour)
                            .map(|end| (start, end, *neighbour))
                    })
            })
    }

    ///
    /// The number of adjacencies in this lattice (`rows×(cols-1) + cols×(rows-1)`)
    ///
    #[inline]
    pub fn num_adjacencies(&self) -> usize {
        self.rows*(self.cols-1) + self.cols*(self.rows-1)
    }

    ///
    /// The bounding box of every point in this lattice
    ///
    #[inline]
    pub fn bounds(&self) -> Bounds<Coord2> {
        self.bounds
    }

    #[inline] pub fn min_x(&self) -> f64 { self.bounds.min().x() }
    #[inline] pub fn max_x(&self) -> f64 { self.bounds.max().x() }
    #[inline] pub fn min_y(&self) -> f64 { self.bounds.min().y() }
    #[inline] pub fn max_y(&self) -> f64 { self.bounds.max().y() }
}

///
/// True if (row, col) is on the edge of a lattice with the specified size
///
fn is_boundary(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row == rows-1 || col == cols-1
}
