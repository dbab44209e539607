use flo_puzzle::*;

#[test]
fn generate_seeded_puzzle() {
    let config = PuzzleConfig { seed: Some(42), ..PuzzleConfig::with_size(7, 9) };

    let puzzle1 = generate_puzzle(&config).unwrap();
    let puzzle2 = generate_puzzle(&config).unwrap();

    assert!(puzzle1.lattice.points().len() == 63);
    assert!(puzzle1.segments.len() == 7*8 + 9*6);
    assert!(puzzle1.lattice == puzzle2.lattice);
    assert!(puzzle1.segments == puzzle2.segments);
}

#[test]
fn generate_unseeded_puzzle() {
    let puzzle = generate_puzzle(&PuzzleConfig::with_size(3, 4)).unwrap();

    assert!(puzzle.segments.len() == 3*3 + 4*2);
}

#[test]
fn zero_grid_jitter_makes_a_straight_grid() {
    let config = PuzzleConfig { seed: Some(1), grid_jitter: 0.0, ..PuzzleConfig::with_size(5, 5) };
    let puzzle = generate_puzzle(&config).unwrap();

    assert!(puzzle.segments.iter().all(|segment| segment.is_straight()));
}

#[test]
fn invalid_dimensions() {
    let config = PuzzleConfig::with_size(0, 3);

    assert!(generate_puzzle(&config).err() == Some(PuzzleError::InvalidDimensions { rows: 0, cols: 3 }));
}

#[test]
fn invalid_jitter() {
    let config = PuzzleConfig { control_point_jitter: f64::INFINITY, ..PuzzleConfig::with_size(3, 3) };

    assert!(generate_puzzle(&config).err() == Some(PuzzleError::InvalidJitter(f64::INFINITY)));
}

#[test]
fn default_config_matches_template() {
    let config = PuzzleConfig::default();

    assert!(config.grid_jitter == 0.1);
    assert!(config.control_point_jitter == 0.75);
    assert!(config.template_control_points == TEMPLATE_CONTROL_POINTS.to_vec());
    assert!(config.spline.knots == vec![2.0, 3.0, 4.0]);
    assert!(config.spline.sample_count == 100);
    assert!(config.edge_style == EdgeStyle::BSpline);
}

#[test]
fn read_partial_config_from_json() {
    let config: PuzzleConfig = serde_json::from_str(r#"{ "rows": 3, "cols": 4, "seed": 5, "edge_style": "straight", "sample_count": 50 }"#).unwrap();

    assert!(config.rows == 3);
    assert!(config.cols == 4);
    assert!(config.seed == Some(5));
    assert!(config.edge_style == EdgeStyle::Straight);
    assert!(config.spline.sample_count == 50);
    assert!(config.spline.knots == vec![2.0, 3.0, 4.0]);
    assert!(config.template_control_points == TEMPLATE_CONTROL_POINTS.to_vec());
}

#[test]
fn read_template_from_json() {
    let config: PuzzleConfig = serde_json::from_str(r#"{ "template_control_points": [[0, 0], [1, 2], [3, 2], [4, 0]], "knots": [] }"#).unwrap();

    assert!(config.template_control_points == vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)]);
    assert!(config.spline.knots.is_empty());

    let puzzle = generate_puzzle(&PuzzleConfig { seed: Some(3), rows: 4, cols: 4, ..config }).unwrap();
    assert!(puzzle.segments.len() == 4*3 + 4*3);
}

#[test]
fn config_round_trips_through_json() {
    let config  = PuzzleConfig { seed: Some(9), ..PuzzleConfig::with_size(2, 3) };
    let json    = serde_json::to_string(&config).unwrap();
    let read    = serde_json::from_str::<PuzzleConfig>(&json).unwrap();

    assert!(read == config);
}

#[test]
fn seeded_spline_preview() {
    let config  = PuzzleConfig { seed: Some(17), ..PuzzleConfig::default() };
    let curve1  = generate_spline_preview(&config).unwrap();
    let curve2  = generate_spline_preview(&config).unwrap();

    assert!(curve1 == curve2);
    assert!(curve1.control_x().len() == 9);
    assert!(curve1.control_y().len() == 9);
    assert!(curve1.samples()[0] == Coord2(0.0, 0.0));
    assert!(curve1.samples()[99] == Coord2(20.0, 0.0));

    let samples = curve1.into_samples();
    assert!(samples.len() == 100);
}

#[test]
fn unjittered_spline_preview_is_the_template() {
    let config      = PuzzleConfig { control_point_jitter: 0.0, ..PuzzleConfig::default() };
    let preview     = generate_spline_preview(&config).unwrap();
    let template    = SplineCurve::from_template(&TEMPLATE_CONTROL_POINTS, &SplineConfig::default()).unwrap();

    assert!(preview == template);
    assert!(preview.control_points() == TEMPLATE_CONTROL_POINTS.to_vec());
}

#[test]
fn spline_preview_reports_bad_template() {
    let config = PuzzleConfig { template_control_points: vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)], ..PuzzleConfig::default() };

    assert!(generate_spline_preview(&config).err() == Some(PuzzleError::InvalidControlPoints(ControlPointError::TooFewPoints(2))));
}
