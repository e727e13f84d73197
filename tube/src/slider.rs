//! Drag session state machine for the regulation slider.
//!
//! The slider is `Idle` until a pointer/touch goes down on the track, then
//! `Dragging` until it is released or leaves the drawing surface. Only move
//! events that arrive while `Dragging` change the value; releasing keeps the
//! last value (no snap-back).

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use crate::geometry::TubeProfile;
use crate::regulation::{DEFAULT_REGULATION, TrackBounds, compute_regulation, percent_label};

/// Whether a drag session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No session; move events are ignored.
    #[default]
    Idle,
    /// Between down and up/leave; move events update the value.
    Dragging,
}

/// Input events the slider reacts to, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Pointer or touch pressed on the track.
    Down,
    /// Pointer or touch moved to `pointer_x` (CSS px) over a surface at `bounds`.
    Move { pointer_x: f64, bounds: TrackBounds },
    /// Pointer or touch released.
    Up,
    /// Pointer left the drawing surface.
    Leave,
}

/// Regulation value plus the drag session flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    regulation: f64,
    state: DragState,
}

impl Default for Slider {
    fn default() -> Self {
        Self { regulation: DEFAULT_REGULATION, state: DragState::Idle }
    }
}

impl Slider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn regulation(&self) -> f64 {
        self.regulation
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Feed one input event through the state machine.
    ///
    /// Returns `true` when anything observable changed: the value, or the
    /// session starting or ending. Repeated downs, moves to the same spot,
    /// and releases without a session report `false`.
    pub fn handle(&mut self, event: SliderEvent) -> bool {
        match event {
            SliderEvent::Down => self.set_state(DragState::Dragging),
            SliderEvent::Move { pointer_x, bounds } => self.pointer_move(pointer_x, bounds),
            SliderEvent::Up | SliderEvent::Leave => self.set_state(DragState::Idle),
        }
    }

    fn set_state(&mut self, next: DragState) -> bool {
        let changed = self.state != next;
        self.state = next;
        changed
    }

    fn pointer_move(&mut self, pointer_x: f64, bounds: TrackBounds) -> bool {
        if self.state != DragState::Dragging {
            return false;
        }
        let Some(next) = compute_regulation(pointer_x, bounds) else {
            return false;
        };
        let changed = (next - self.regulation).abs() > f64::EPSILON;
        self.regulation = next;
        changed
    }

    /// Readout label for the current value.
    #[must_use]
    pub fn label(&self) -> String {
        percent_label(self.regulation)
    }

    /// Tube profile for the current value.
    #[must_use]
    pub fn profile(&self) -> TubeProfile {
        TubeProfile::at(self.regulation)
    }
}
