use flo_puzzle::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

use std::f64::consts::PI;

fn approx_equal(a: Coord2, b: Coord2) -> bool {
    a.distance_to(&b) < 1e-6
}

#[test]
fn scale_to_target_distance() {
    let mut line = vec![Coord2(0.0, 0.0), Coord2(1.5, 2.0), Coord2(3.0, 4.0)];
    line.scale(10.0).unwrap();

    assert!(approx_equal(line[1], Coord2(3.0, 4.0)));
    assert!(approx_equal(line[2], Coord2(6.0, 8.0)));
}

#[test]
fn scale_zero_length_curve() {
    let mut line = vec![Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(1.0, 1.0)];

    assert!(line.scale(3.0) == Err(PuzzleError::DegenerateCurve));
}

#[test]
fn scale_to_zero_length() {
    let mut line = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0)];

    assert!(line.scale(0.0) == Err(PuzzleError::DegenerateCurve));
}

#[test]
fn rotate_is_clockwise() {
    let mut line = vec![Coord2(1.0, 0.0), Coord2(0.0, 1.0)];
    line.rotate(PI/2.0);

    assert!(approx_equal(line[0], Coord2(0.0, -1.0)));
    assert!(approx_equal(line[1], Coord2(1.0, 0.0)));
}

#[test]
fn rotate_by_clockwise_angle_points_at_target() {
    let target      = Coord2(-3.0, 2.0);
    let mut line    = vec![Coord2(0.0, 0.0), Coord2(target.magnitude(), 0.0)];
    line.rotate(Coord2(0.0, 0.0).clockwise_angle_to(&target));

    assert!(approx_equal(line[1], target));
}

#[test]
fn counter_clockwise_angle_mirrors_the_target() {
    // atan2(dy, dx) with the clockwise rotation lands on the target reflected in the x axis
    let target      = Coord2(3.0, 4.0);
    let mut line    = vec![Coord2(0.0, 0.0), Coord2(5.0, 0.0)];
    line.rotate(f64::atan2(target.y(), target.x()));

    assert!(approx_equal(line[1], Coord2(3.0, -4.0)));
    assert!(!approx_equal(line[1], target));
}

#[test]
fn clockwise_angles() {
    let origin = Coord2(0.0, 0.0);

    assert!((origin.clockwise_angle_to(&Coord2(1.0, 0.0)) - 0.0).abs() < 1e-12);
    assert!((origin.clockwise_angle_to(&Coord2(0.0, 1.0)) + PI/2.0).abs() < 1e-12);
    assert!((origin.clockwise_angle_to(&Coord2(0.0, -1.0)) - PI/2.0).abs() < 1e-12);
}

#[test]
fn translate_moves_every_point() {
    let mut line = vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0)];
    line.translate(Coord2(3.0, -1.0));

    assert!(line == vec![Coord2(3.0, -1.0), Coord2(4.0, 1.0)]);
}

#[test]
fn align_template_to_targets() {
    let targets = vec![
        (Coord2(0.0, 0.0), Coord2(1.0, 0.0)),
        (Coord2(2.0, 3.0), Coord2(3.0, 3.0)),
        (Coord2(1.05, 2.0), Coord2(1.97, 2.08)),
        (Coord2(4.0, 4.0), Coord2(4.1, 5.0)),
        (Coord2(4.0, 4.0), Coord2(3.0, 4.0)),
        (Coord2(4.0, 4.0), Coord2(4.0, 3.0)),
        (Coord2(-2.0, 7.5), Coord2(-9.0, -1.0))
    ];

    for (start, end) in targets {
        let mut curve = SplineCurve::from_template(&TEMPLATE_CONTROL_POINTS, &SplineConfig::default()).unwrap();
        curve.align_to(start, end).unwrap();

        assert!(approx_equal(curve.samples()[0], start));
        assert!(approx_equal(curve.samples()[99], end));
    }
}

#[test]
fn align_jittered_curves() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..50 {
        let start       = Coord2(1.0 + jitter(0.1, &mut rng), 1.0 + jitter(0.1, &mut rng));
        let end         = Coord2(2.0 + jitter(0.1, &mut rng), 1.0 + jitter(0.1, &mut rng));
        let mut curve   = SplineCurve::new(&TEMPLATE_CONTROL_POINTS, 0.75, &SplineConfig::default(), &mut rng).unwrap();

        curve.align_to(start, end).unwrap();

        assert!(approx_equal(curve.start_point(), start));
        assert!(approx_equal(curve.end_point(), end));
    }
}

#[test]
fn align_template_that_does_not_lie_along_x_axis() {
    let template    = vec![Coord2(1.0, 1.0), Coord2(2.0, 3.0), Coord2(3.0, 0.0), Coord2(5.0, 2.0), Coord2(6.0, 4.0)];
    let config      = SplineConfig { knots: vec![2.0], sample_count: 40 };
    let mut curve   = SplineCurve::from_template(&template, &config).unwrap();

    curve.align_to(Coord2(10.0, 10.0), Coord2(10.0, 12.0)).unwrap();

    assert!(approx_equal(curve.samples()[0], Coord2(10.0, 10.0)));
    assert!(approx_equal(curve.samples()[39], Coord2(10.0, 12.0)));
}

#[test]
fn align_preserves_shape() {
    let template    = SplineCurve::from_template(&TEMPLATE_CONTROL_POINTS, &SplineConfig::default()).unwrap();
    let mut curve   = template.clone();
    curve.align_to(Coord2(3.0, 4.0), Coord2(3.6, 4.8)).unwrap();

    // The target is 1 unit long and the template is 20, so every distance shrinks by the same factor
    for (original, aligned) in template.samples().iter().zip(curve.samples().iter()) {
        let original_distance   = original.distance_to(&template.samples()[0]);
        let aligned_distance    = aligned.distance_to(&curve.samples()[0]);

        assert!((original_distance/20.0 - aligned_distance).abs() < 1e-9);
    }
}

#[test]
fn transform_leaves_control_points_alone() {
    let mut curve = SplineCurve::from_template(&TEMPLATE_CONTROL_POINTS, &SplineConfig::default()).unwrap();
    curve.align_to(Coord2(1.0, 1.0), Coord2(2.0, 1.1)).unwrap();

    assert!(curve.control_points() == TEMPLATE_CONTROL_POINTS.to_vec());
}
