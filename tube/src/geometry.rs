//! Tube cross-section geometry.
//!
//! A [`TubeProfile`] holds the four control coordinates of the outer wall:
//! the upper and lower wall heights at the mouths and at mid-span. Profiles
//! are interpolated linearly between [`TubeProfile::NARROW`] and
//! [`TubeProfile::WIDE`], and a closed [`Boundary`] of two cubic Bézier walls
//! is built from them. Everything is recomputed from the regulation value on
//! demand; nothing is cached.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt::Write as _;

use crate::consts::{TUBE_CENTER_Y, TUBE_END_X, TUBE_START_X, WALL_THICKNESS};
use crate::regulation::clamp01;

/// A point in logical viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation, exact at `t = 0` and `t = 1`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (a * (1.0 - t)) + (b * t)
}

/// Control coordinates of the outer tube wall, as `y` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeProfile {
    /// Upper wall at both mouths.
    pub upper_mouth: f64,
    /// Upper wall Bézier control height at mid-span.
    pub upper_mid: f64,
    /// Lower wall Bézier control height at mid-span.
    pub lower_mid: f64,
    /// Lower wall at both mouths.
    pub lower_mouth: f64,
}

impl TubeProfile {
    /// Fully contracted: the tube necks in at mid-span.
    pub const NARROW: Self = Self {
        upper_mouth: TUBE_CENTER_Y - 18.0,
        upper_mid: TUBE_CENTER_Y - 10.0,
        lower_mid: TUBE_CENTER_Y + 10.0,
        lower_mouth: TUBE_CENTER_Y + 18.0,
    };

    /// Fully expanded: the tube bulges out at mid-span.
    pub const WIDE: Self = Self {
        upper_mouth: TUBE_CENTER_Y - 34.0,
        upper_mid: TUBE_CENTER_Y - 46.0,
        lower_mid: TUBE_CENTER_Y + 46.0,
        lower_mouth: TUBE_CENTER_Y + 34.0,
    };

    /// Profile for `regulation` (clamped to `[0, 1]`).
    #[must_use]
    pub fn at(regulation: f64) -> Self {
        let t = clamp01(regulation);
        Self {
            upper_mouth: lerp(Self::NARROW.upper_mouth, Self::WIDE.upper_mouth, t),
            upper_mid: lerp(Self::NARROW.upper_mid, Self::WIDE.upper_mid, t),
            lower_mid: lerp(Self::NARROW.lower_mid, Self::WIDE.lower_mid, t),
            lower_mouth: lerp(Self::NARROW.lower_mouth, Self::WIDE.lower_mouth, t),
        }
    }

    /// Control coordinates in a fixed order, for element-wise comparisons.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn coords(&self) -> [f64; 4] {
        [self.upper_mouth, self.upper_mid, self.lower_mid, self.lower_mouth]
    }

    /// The lumen: the same profile moved inward by `thickness` on both walls.
    #[must_use]
    pub fn inset(&self, thickness: f64) -> Self {
        Self {
            upper_mouth: self.upper_mouth + thickness,
            upper_mid: self.upper_mid + thickness,
            lower_mid: self.lower_mid - thickness,
            lower_mouth: self.lower_mouth - thickness,
        }
    }

    /// Inner channel using the standard wall thickness.
    #[must_use]
    pub fn lumen(&self) -> Self {
        self.inset(WALL_THICKNESS)
    }

    /// Opening height at the tube mouths.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn mouth_height(&self) -> f64 {
        self.lower_mouth - self.upper_mouth
    }

    /// Opening height where the walls reach at mid-span.
    ///
    /// Both Bézier controls share a height, so the curve midpoint sits at
    /// `0.25 * mouth + 0.75 * mid` on each wall.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn mid_height(&self) -> f64 {
        let upper = (0.25 * self.upper_mouth) + (0.75 * self.upper_mid);
        let lower = (0.25 * self.lower_mouth) + (0.75 * self.lower_mid);
        lower - upper
    }

    /// Closed outline for this profile.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary::from_profile(self)
    }
}

/// One cubic Bézier segment; the start point is the previous segment's end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

/// Closed tube outline: upper wall left→right, a straight right mouth, lower
/// wall right→left, and an implicit close back to `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub start: Point,
    pub upper: Cubic,
    pub right_mouth: Point,
    pub lower: Cubic,
}

impl Boundary {
    #[must_use]
    pub fn from_profile(profile: &TubeProfile) -> Self {
        let span = TUBE_END_X - TUBE_START_X;
        let left_ctrl = TUBE_START_X + (span / 3.0);
        let right_ctrl = TUBE_END_X - (span / 3.0);

        Self {
            start: Point::new(TUBE_START_X, profile.upper_mouth),
            upper: Cubic {
                c1: Point::new(left_ctrl, profile.upper_mid),
                c2: Point::new(right_ctrl, profile.upper_mid),
                end: Point::new(TUBE_END_X, profile.upper_mouth),
            },
            right_mouth: Point::new(TUBE_END_X, profile.lower_mouth),
            lower: Cubic {
                c1: Point::new(right_ctrl, profile.lower_mid),
                c2: Point::new(left_ctrl, profile.lower_mid),
                end: Point::new(TUBE_START_X, profile.lower_mouth),
            },
        }
    }

    /// Every point of the outline in drawing order.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn points(&self) -> [Point; 8] {
        [
            self.start,
            self.upper.c1,
            self.upper.c2,
            self.upper.end,
            self.right_mouth,
            self.lower.c1,
            self.lower.c2,
            self.lower.end,
        ]
    }

    /// SVG path data, e.g. `M 40.00 62.00 C ... Z`.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(128);
        push_cmd(&mut d, "M", &[self.start]);
        push_cmd(&mut d, "C", &[self.upper.c1, self.upper.c2, self.upper.end]);
        push_cmd(&mut d, "L", &[self.right_mouth]);
        push_cmd(&mut d, "C", &[self.lower.c1, self.lower.c2, self.lower.end]);
        d.push('Z');
        d
    }
}

fn push_cmd(out: &mut String, cmd: &str, points: &[Point]) {
    out.push_str(cmd);
    for p in points {
        if write!(out, " {:.2} {:.2}", p.x, p.y).is_err() {
            return;
        }
    }
    out.push(' ');
}
