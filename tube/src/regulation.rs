//! The normalized regulation value and its mappings.
//!
//! `regulation` lives in `[0, 1]`. Every path that produces one goes through
//! [`clamp01`], so no pointer position can push the state out of range.

#[cfg(test)]
#[path = "regulation_test.rs"]
mod regulation_test;

use crate::consts::{HANDLE_WIDTH, TRACK_START_X, TRACK_WIDTH, VIEWBOX_WIDTH};

/// Initial regulation of a freshly mounted illustration.
pub const DEFAULT_REGULATION: f64 = 0.5;

/// Clamp to `[0, 1]`. NaN maps to `0.0`.
#[must_use]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// On-screen horizontal extent of the drawing surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Whether the bounds can be used to map a pointer position.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Logical units per CSS pixel for the current rendered size.
    #[must_use]
    pub fn logical_scale(&self) -> f64 {
        VIEWBOX_WIDTH / self.width
    }
}

/// Map a horizontal pointer position to a regulation value.
///
/// `relative_x = pointer_x - bounds.left` is converted into logical viewBox
/// units, offset by the track start and half the handle so that the handle
/// centre follows the pointer, then normalized over the handle's travel.
///
/// Returns `None` when `bounds` is degenerate; the caller keeps its current
/// value in that case.
#[must_use]
pub fn compute_regulation(pointer_x: f64, bounds: TrackBounds) -> Option<f64> {
    if !bounds.is_usable() {
        return None;
    }
    let relative_x = pointer_x - bounds.left;
    let logical_x = relative_x * bounds.logical_scale();
    let travel = TRACK_WIDTH - HANDLE_WIDTH;
    let candidate = (logical_x - TRACK_START_X - (HANDLE_WIDTH * 0.5)) / travel;
    Some(clamp01(candidate))
}

/// Handle offset from the track start: `regulation * (track_width - handle_width)`.
#[must_use]
pub fn handle_offset(regulation: f64, track_width: f64, handle_width: f64) -> f64 {
    clamp01(regulation) * (track_width - handle_width).max(0.0)
}

/// Handle offset on the illustration's own track.
#[must_use]
pub fn track_handle_offset(regulation: f64) -> f64 {
    handle_offset(regulation, TRACK_WIDTH, HANDLE_WIDTH)
}

/// Whole-number percentage shown next to the slider.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn percent(regulation: f64) -> i64 {
    // Clamped to 0..=100 before the cast.
    (clamp01(regulation) * 100.0).round() as i64
}

/// Label text for the slider readout, e.g. `"50%"`.
#[must_use]
pub fn percent_label(regulation: f64) -> String {
    format!("{}%", percent(regulation))
}
