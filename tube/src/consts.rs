//! Logical layout of the illustration, in viewBox units.

// ── ViewBox ─────────────────────────────────────────────────────

/// Logical width of the drawing surface.
pub const VIEWBOX_WIDTH: f64 = 400.0;

/// Logical height of the drawing surface.
pub const VIEWBOX_HEIGHT: f64 = 200.0;

// ── Tube ────────────────────────────────────────────────────────

/// Left mouth of the tube.
pub const TUBE_START_X: f64 = 40.0;

/// Right mouth of the tube.
pub const TUBE_END_X: f64 = 360.0;

/// Horizontal centreline the tube is symmetric around.
pub const TUBE_CENTER_Y: f64 = 80.0;

/// Wall thickness between the outer boundary and the lumen.
pub const WALL_THICKNESS: f64 = 6.0;

// ── Slider track ────────────────────────────────────────────────

/// Left edge of the slider track.
pub const TRACK_START_X: f64 = 60.0;

/// Width of the slider track.
pub const TRACK_WIDTH: f64 = 280.0;

/// Vertical position of the slider track.
pub const TRACK_Y: f64 = 166.0;

/// Height of the slider track.
pub const TRACK_HEIGHT: f64 = 8.0;

/// Width of the draggable handle.
pub const HANDLE_WIDTH: f64 = 24.0;

/// Height of the draggable handle.
pub const HANDLE_HEIGHT: f64 = 24.0;
