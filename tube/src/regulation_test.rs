#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// clamp01
// =============================================================

#[test]
fn clamp01_passes_values_in_range() {
    assert_eq!(clamp01(0.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(1.0), 1.0);
}

#[test]
fn clamp01_clamps_out_of_range() {
    assert_eq!(clamp01(-0.1), 0.0);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f64::INFINITY), 1.0);
    assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f64::NAN), 0.0);
}

// =============================================================
// TrackBounds
// =============================================================

#[test]
fn bounds_usable_requires_positive_finite_width() {
    assert!(TrackBounds::new(10.0, 400.0).is_usable());
    assert!(!TrackBounds::new(10.0, 0.0).is_usable());
    assert!(!TrackBounds::new(10.0, -5.0).is_usable());
    assert!(!TrackBounds::new(f64::NAN, 400.0).is_usable());
    assert!(!TrackBounds::new(0.0, f64::INFINITY).is_usable());
}

#[test]
fn logical_scale_is_one_at_native_width() {
    assert_eq!(TrackBounds::new(0.0, VIEWBOX_WIDTH).logical_scale(), 1.0);
    assert_eq!(TrackBounds::new(0.0, VIEWBOX_WIDTH * 2.0).logical_scale(), 0.5);
}

// =============================================================
// compute_regulation
// =============================================================

#[test]
fn pointer_at_handle_start_maps_to_zero() {
    let bounds = TrackBounds::new(100.0, VIEWBOX_WIDTH);
    let x = 100.0 + TRACK_START_X + HANDLE_WIDTH / 2.0;
    assert_eq!(compute_regulation(x, bounds), Some(0.0));
}

#[test]
fn pointer_at_handle_end_maps_to_one() {
    let bounds = TrackBounds::new(100.0, VIEWBOX_WIDTH);
    let x = 100.0 + TRACK_START_X + TRACK_WIDTH - HANDLE_WIDTH / 2.0;
    assert_eq!(compute_regulation(x, bounds), Some(1.0));
}

#[test]
fn pointer_at_track_centre_maps_to_half() {
    let bounds = TrackBounds::new(100.0, VIEWBOX_WIDTH);
    let x = 100.0 + TRACK_START_X + TRACK_WIDTH / 2.0;
    let value = compute_regulation(x, bounds).unwrap_or(-1.0);
    assert!(approx_eq(value, 0.5));
}

#[test]
fn mapping_scales_with_rendered_width() {
    // Rendered at twice the logical width: 2 px per logical unit.
    let bounds = TrackBounds::new(0.0, VIEWBOX_WIDTH * 2.0);
    let x = (TRACK_START_X + TRACK_WIDTH / 2.0) * 2.0;
    let value = compute_regulation(x, bounds).unwrap_or(-1.0);
    assert!(approx_eq(value, 0.5));
}

#[test]
fn pointer_far_outside_track_is_clamped() {
    let bounds = TrackBounds::new(50.0, 320.0);
    assert_eq!(compute_regulation(-10_000.0, bounds), Some(0.0));
    assert_eq!(compute_regulation(10_000.0, bounds), Some(1.0));
    assert_eq!(compute_regulation(f64::NEG_INFINITY, bounds), Some(0.0));
    assert_eq!(compute_regulation(f64::INFINITY, bounds), Some(1.0));
}

#[test]
fn nan_pointer_is_clamped_to_zero() {
    let bounds = TrackBounds::new(50.0, 320.0);
    assert_eq!(compute_regulation(f64::NAN, bounds), Some(0.0));
}

#[test]
fn degenerate_bounds_yield_no_candidate() {
    assert_eq!(compute_regulation(10.0, TrackBounds::new(0.0, 0.0)), None);
    assert_eq!(compute_regulation(10.0, TrackBounds::new(0.0, -1.0)), None);
}

#[test]
fn every_sampled_pointer_position_stays_in_unit_range() {
    let widths = [1.0, 37.5, 200.0, VIEWBOX_WIDTH, 1234.0];
    for width in widths {
        let bounds = TrackBounds::new(-20.0, width);
        let mut x = -5_000.0;
        while x <= 5_000.0 {
            let value = compute_regulation(x, bounds).unwrap_or(-1.0);
            assert!((0.0..=1.0).contains(&value), "x={x} width={width} -> {value}");
            x += 13.7;
        }
    }
}

#[test]
fn mapping_is_monotonic_in_pointer_position() {
    let bounds = TrackBounds::new(0.0, VIEWBOX_WIDTH);
    let mut prev = 0.0;
    for step in 0..=400 {
        let value = compute_regulation(f64::from(step), bounds).unwrap_or(-1.0);
        assert!(value >= prev);
        prev = value;
    }
}

// =============================================================
// Read path
// =============================================================

#[test]
fn handle_offset_spans_track_minus_handle() {
    assert_eq!(handle_offset(0.0, 280.0, 24.0), 0.0);
    assert_eq!(handle_offset(1.0, 280.0, 24.0), 256.0);
    assert_eq!(handle_offset(0.5, 280.0, 24.0), 128.0);
}

#[test]
fn handle_offset_clamps_regulation_and_degenerate_track() {
    assert_eq!(handle_offset(2.0, 280.0, 24.0), 256.0);
    assert_eq!(handle_offset(-1.0, 280.0, 24.0), 0.0);
    assert_eq!(handle_offset(0.5, 10.0, 24.0), 0.0);
}

#[test]
fn track_handle_offset_uses_layout_constants() {
    assert_eq!(track_handle_offset(1.0), TRACK_WIDTH - HANDLE_WIDTH);
}

#[test]
fn percent_label_rounds_to_whole_percent() {
    assert_eq!(percent_label(0.5), "50%");
    assert_eq!(percent_label(0.0), "0%");
    assert_eq!(percent_label(1.0), "100%");
    assert_eq!(percent_label(0.334), "33%");
    assert_eq!(percent_label(0.336), "34%");
    assert_eq!(percent_label(0.999), "100%");
}

#[test]
fn percent_matches_round_of_scaled_value() {
    for i in 0..=1000 {
        let r = f64::from(i) / 1000.0;
        assert_eq!(percent(r), (r * 100.0).round() as i64);
    }
}

#[test]
fn percent_stays_in_label_range_for_any_input() {
    for r in [f64::MAX, 1e300, 7.5, f64::INFINITY, -f64::MAX, f64::NEG_INFINITY, f64::NAN] {
        assert!((0..=100).contains(&percent(r)), "percent({r}) = {}", percent(r));
    }
    assert_eq!(percent(f64::MAX), 100);
    assert_eq!(percent(f64::NEG_INFINITY), 0);
}

#[test]
fn default_regulation_is_half() {
    assert_eq!(DEFAULT_REGULATION, 0.5);
    assert_eq!(percent_label(DEFAULT_REGULATION), "50%");
}
