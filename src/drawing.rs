use crate::error::*;

use flo_puzzle::*;

use serde_derive::Serialize;

use std::slice;

/// Amount of space to leave around the lattice when drawing it
pub const DRAWING_MARGIN: f64 = 1.0;

/// Number of pixels used for one lattice unit in an SVG drawing
pub const PIXELS_PER_UNIT: f64 = 100.0;

///
/// Something that can be written out as an SVG or JSON document
///
/// Polylines are drawn as green lines and dots as blue circles.
///
pub trait Drawing : serde::Serialize {
    ///
    /// The area to draw
    ///
    fn view_bounds(&self) -> Bounds<Coord2>;

    ///
    /// The lines to draw
    ///
    fn polylines(&self) -> &[Segment];

    ///
    /// The points to mark with a dot
    ///
    fn dots(&self) -> Vec<Coord2>;

    ///
    /// Writes this drawing as a JSON document
    ///
    fn to_json(&self) -> Result<String, JigsawError> {
        serde_json::to_string_pretty(self).map_err(JigsawError::Output)
    }

    ///
    /// Writes this drawing as an SVG document
    ///
    /// The y axis points up, so the drawing has the same orientation as a plot of the lattice.
    ///
    fn to_svg(&self) -> String {
        let view_bounds = self.view_bounds();
        let size        = view_bounds.size();
        let min         = view_bounds.min();
        let max         = view_bounds.max();
        let svg_point   = |point: Coord2| ((point.x()-min.x())*PIXELS_PER_UNIT, (max.y()-point.y())*PIXELS_PER_UNIT);

        let mut svg = String::new();

        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        svg.push_str(&format!("<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = size.x()*PIXELS_PER_UNIT, h = size.y()*PIXELS_PER_UNIT));

        // Lines
        svg.push_str("  <g fill=\"none\" stroke=\"green\" stroke-width=\"2\" stroke-linejoin=\"round\">\n");
        for segment in self.polylines().iter() {
            let points = segment.points()
                .map(|point| svg_point(point))
                .map(|(x, y)| format!("{:.3},{:.3}", x, y))
                .collect::<Vec<_>>()
                .join(" ");

            svg.push_str(&format!("    <polyline points=\"{}\" />\n", points));
        }
        svg.push_str("  </g>\n");

        // Dots
        svg.push_str("  <g fill=\"blue\">\n");
        for point in self.dots().into_iter() {
            let (x, y) = svg_point(point);
            svg.push_str(&format!("    <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"4\" />\n", x, y));
        }
        svg.push_str("  </g>\n");

        svg.push_str("</svg>\n");

        svg
    }
}

///
/// The parts of a puzzle that are needed to draw it
///
#[derive(Clone, Debug, Serialize)]
pub struct PuzzleDrawing<'a> {
    /// The area to draw (the lattice extents with a margin added)
    pub view_bounds:    Bounds<Coord2>,

    /// The corners of the puzzle pieces
    pub points:         Vec<Coord2>,

    /// The edges of the puzzle pieces
    pub segments:       &'a [Segment]
}

impl<'a> PuzzleDrawing<'a> {
    ///
    /// Prepares a puzzle for drawing
    ///
    pub fn new(puzzle: &'a Puzzle) -> PuzzleDrawing<'a> {
        PuzzleDrawing {
            view_bounds:    puzzle.lattice.bounds().inflate(Coord2(DRAWING_MARGIN, DRAWING_MARGIN)),
            points:         puzzle.lattice.points().iter().map(|point| point.position).collect(),
            segments:       &puzzle.segments
        }
    }
}

impl<'a> Drawing for PuzzleDrawing<'a> {
    fn view_bounds(&self) -> Bounds<Coord2> { self.view_bounds }
    fn polylines(&self) -> &[Segment]       { self.segments }
    fn dots(&self) -> Vec<Coord2>           { self.points.clone() }
}

///
/// A single edge curve drawn with the control points it was fitted through
///
#[derive(Clone, Debug, Serialize)]
pub struct SplineDrawing {
    /// The area to draw (the extents of the sampled curve with a margin added)
    pub view_bounds:    Bounds<Coord2>,

    /// The x coordinates of the control points
    pub control_x:      Vec<f64>,

    /// The y coordinates of the control points
    pub control_y:      Vec<f64>,

    /// The sampled curve
    pub samples:        Segment
}

impl SplineDrawing {
    ///
    /// Prepares a spline curve for drawing
    ///
    pub fn new(curve: SplineCurve) -> SplineDrawing {
        let control_x   = curve.control_x().to_vec();
        let control_y   = curve.control_y().to_vec();
        let samples     = curve.into_samples();

        let view_bounds = Bounds::<Coord2>::bounds_for_points(samples.iter().cloned())
            .unwrap_or_else(|| Bounds::from_min_max(Coord2::origin(), Coord2::origin()))
            .inflate(Coord2(DRAWING_MARGIN, DRAWING_MARGIN));

        SplineDrawing {
            view_bounds:    view_bounds,
            control_x:      control_x,
            control_y:      control_y,
            samples:        Segment::from_samples(&samples)
        }
    }
}

impl Drawing for SplineDrawing {
    fn view_bounds(&self) -> Bounds<Coord2> {
        self.view_bounds
    }

    fn polylines(&self) -> &[Segment] {
        slice::from_ref(&self.samples)
    }

    fn dots(&self) -> Vec<Coord2> {
        self.control_x.iter()
            .zip(self.control_y.iter())
            .map(|(x, y)| Coord2(*x, *y))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_puzzle() -> Puzzle {
        generate_puzzle(&PuzzleConfig { seed: Some(1), ..PuzzleConfig::with_size(3, 4) }).unwrap()
    }

    fn test_spline() -> SplineCurve {
        generate_spline_preview(&PuzzleConfig { seed: Some(1), ..PuzzleConfig::default() }).unwrap()
    }

    #[test]
    fn view_bounds_have_margin() {
        let puzzle  = test_puzzle();
        let drawing = PuzzleDrawing::new(&puzzle);

        assert!(drawing.view_bounds.min() == Coord2(-1.0, -1.0));
        assert!(drawing.view_bounds.max() == Coord2(3.0, 4.0));
        assert!(drawing.points.len() == 12);
    }

    #[test]
    fn svg_has_every_segment_and_point() {
        let puzzle  = test_puzzle();
        let svg     = PuzzleDrawing::new(&puzzle).to_svg();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("viewBox=\"0 0 400 500\""));
        assert!(svg.matches("<polyline").count() == puzzle.segments.len());
        assert!(svg.matches("<circle").count() == 12);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn json_contains_segments() {
        let puzzle  = test_puzzle();
        let json    = PuzzleDrawing::new(&puzzle).to_json().unwrap();
        let value   = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert!(value["segments"].as_array().map(|segments| segments.len()) == Some(puzzle.segments.len()));
        assert!(value["points"].as_array().map(|points| points.len()) == Some(12));
    }

    #[test]
    fn spline_view_bounds_surround_samples() {
        let drawing = SplineDrawing::new(test_spline());
        let min     = drawing.view_bounds.min();
        let max     = drawing.view_bounds.max();

        // The curve runs from (0, 0) to (20, 0)
        assert!(min.x() <= -1.0);
        assert!(max.x() >= 21.0);
        assert!(drawing.samples.points().all(|point| {
            point.x() >= min.x()+1.0-1e-9 && point.x() <= max.x()-1.0+1e-9
                && point.y() >= min.y()+1.0-1e-9 && point.y() <= max.y()-1.0+1e-9
        }));
    }

    #[test]
    fn spline_svg_has_control_points_and_one_curve() {
        let svg = SplineDrawing::new(test_spline()).to_svg();

        assert!(svg.matches("<circle").count() == 9);
        assert!(svg.matches("<polyline").count() == 1);

        let polyline_start  = svg.find("<polyline points=\"").unwrap() + "<polyline points=\"".len();
        let polyline_end    = polyline_start + svg[polyline_start..].find('"').unwrap();
        assert!(svg[polyline_start..polyline_end].split_whitespace().count() == 100);
    }

    #[test]
    fn spline_json_has_control_points_and_samples() {
        let json    = SplineDrawing::new(test_spline()).to_json().unwrap();
        let value   = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert!(value["control_x"].as_array().map(|xs| xs.len()) == Some(9));
        assert!(value["control_y"].as_array().map(|ys| ys.len()) == Some(9));
        assert!(value["samples"]["xs"].as_array().map(|xs| xs.len()) == Some(100));
        assert!(value["samples"]["ys"].as_array().map(|ys| ys.len()) == Some(100));
    }
}
