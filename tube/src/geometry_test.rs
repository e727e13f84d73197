#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn cubic_point(start: Point, seg: &Cubic, t: f64) -> Point {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Point::new(
        (w0 * start.x) + (w1 * seg.c1.x) + (w2 * seg.c2.x) + (w3 * seg.end.x),
        (w0 * start.y) + (w1 * seg.c1.y) + (w2 * seg.c2.y) + (w3 * seg.end.y),
    )
}

// =============================================================
// lerp
// =============================================================

#[test]
fn lerp_is_exact_at_endpoints() {
    assert_eq!(lerp(62.0, 46.0, 0.0), 62.0);
    assert_eq!(lerp(62.0, 46.0, 1.0), 46.0);
    assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
}

#[test]
fn lerp_midpoint() {
    assert!(approx_eq(lerp(10.0, 20.0, 0.5), 15.0));
}

// =============================================================
// Extremes
// =============================================================

#[test]
fn extremes_map_to_narrow_and_wide() {
    assert_eq!(TubeProfile::at(0.0), TubeProfile::NARROW);
    assert_eq!(TubeProfile::at(1.0), TubeProfile::WIDE);
}

#[test]
fn extremes_produce_distinct_boundaries() {
    let narrow = TubeProfile::at(0.0).boundary();
    let wide = TubeProfile::at(1.0).boundary();
    assert_ne!(narrow, wide);
    assert_ne!(narrow.to_svg_path(), wide.to_svg_path());
}

#[test]
fn out_of_range_regulation_is_clamped() {
    assert_eq!(TubeProfile::at(-2.0), TubeProfile::NARROW);
    assert_eq!(TubeProfile::at(5.0), TubeProfile::WIDE);
    assert_eq!(TubeProfile::at(f64::NAN), TubeProfile::NARROW);
}

#[test]
fn wide_opens_further_than_narrow() {
    assert!(TubeProfile::WIDE.mouth_height() > TubeProfile::NARROW.mouth_height());
    assert!(TubeProfile::WIDE.mid_height() > TubeProfile::NARROW.mid_height());
}

#[test]
fn mid_heights_at_extremes() {
    assert!(approx_eq(TubeProfile::NARROW.mid_height(), 24.0));
    assert!(approx_eq(TubeProfile::WIDE.mid_height(), 86.0));
    assert!(approx_eq(TubeProfile::NARROW.mouth_height(), 36.0));
    assert!(approx_eq(TubeProfile::WIDE.mouth_height(), 68.0));
}

// =============================================================
// Continuity and monotonicity
// =============================================================

#[test]
fn small_regulation_steps_move_coordinates_by_small_amounts() {
    const STEPS: u32 = 1000;
    let max_span = TubeProfile::NARROW
        .coords()
        .iter()
        .zip(TubeProfile::WIDE.coords())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    let bound = max_span / f64::from(STEPS) + EPSILON;

    let mut prev = TubeProfile::at(0.0);
    for i in 1..=STEPS {
        let next = TubeProfile::at(f64::from(i) / f64::from(STEPS));
        for (a, b) in prev.coords().iter().zip(next.coords()) {
            assert!((a - b).abs() <= bound, "step {i}: {a} -> {b}");
        }
        prev = next;
    }
}

#[test]
fn walls_move_outward_monotonically() {
    let mut prev = TubeProfile::at(0.0);
    for i in 1..=200 {
        let next = TubeProfile::at(f64::from(i) / 200.0);
        assert!(next.upper_mouth <= prev.upper_mouth);
        assert!(next.upper_mid <= prev.upper_mid);
        assert!(next.lower_mid >= prev.lower_mid);
        assert!(next.lower_mouth >= prev.lower_mouth);
        prev = next;
    }
}

#[test]
fn boundary_is_finite_for_all_sampled_values() {
    for i in 0..=100 {
        let boundary = TubeProfile::at(f64::from(i) / 100.0).boundary();
        for p in boundary.points() {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

// =============================================================
// Lumen
// =============================================================

#[test]
fn lumen_is_inset_by_wall_thickness() {
    let lumen = TubeProfile::NARROW.lumen();
    assert!(approx_eq(lumen.upper_mouth, TubeProfile::NARROW.upper_mouth + WALL_THICKNESS));
    assert!(approx_eq(lumen.lower_mouth, TubeProfile::NARROW.lower_mouth - WALL_THICKNESS));
    assert!(approx_eq(
        lumen.mid_height(),
        TubeProfile::NARROW.mid_height() - 2.0 * WALL_THICKNESS
    ));
}

#[test]
fn narrow_lumen_stays_open() {
    assert!(TubeProfile::NARROW.lumen().mid_height() > 0.0);
    assert!(TubeProfile::NARROW.lumen().mouth_height() > 0.0);
}

// =============================================================
// Boundary
// =============================================================

#[test]
fn boundary_spans_tube_length_and_closes_on_left_mouth() {
    let b = TubeProfile::NARROW.boundary();
    assert_eq!(b.start, Point::new(TUBE_START_X, TubeProfile::NARROW.upper_mouth));
    assert_eq!(b.upper.end.x, TUBE_END_X);
    assert_eq!(b.right_mouth.x, TUBE_END_X);
    assert_eq!(b.lower.end.x, TUBE_START_X);
}

#[test]
fn boundary_svg_path_for_narrow_profile() {
    assert_eq!(
        TubeProfile::NARROW.boundary().to_svg_path(),
        "M 40.00 62.00 C 146.67 70.00 253.33 70.00 360.00 62.00 L 360.00 98.00 \
         C 253.33 90.00 146.67 90.00 40.00 98.00 Z"
    );
}

#[test]
fn cubic_point_hits_endpoints_and_midpoint() {
    let b = TubeProfile::NARROW.boundary();
    assert_eq!(cubic_point(b.start, &b.upper, 0.0), b.start);
    let end = cubic_point(b.start, &b.upper, 1.0);
    assert!(approx_eq(end.x, b.upper.end.x) && approx_eq(end.y, b.upper.end.y));
    let mid = cubic_point(b.start, &b.upper, 0.5);
    assert!(approx_eq(mid.x, (TUBE_START_X + TUBE_END_X) / 2.0));
    assert!(approx_eq(mid.y, 68.0));
}
