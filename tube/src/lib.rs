//! Regulation, geometry, and motion logic for the adjustable-diameter tube
//! illustration.
//!
//! This crate has no browser dependencies. The `site` crate feeds it raw
//! pointer positions and element bounds, reads back the normalized
//! regulation value, and renders the resulting boundary paths and particle
//! positions as SVG. Everything here is a pure function of its inputs so the
//! interaction contract can be tested without a DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`regulation`] | Clamping, pointer-to-value mapping, handle offset and label |
//! | [`slider`] | Drag session state machine (`Idle` / `Dragging`) |
//! | [`geometry`] | Tube profile interpolation and closed boundary curves |
//! | [`particles`] | Time-driven decorative particle positions |
//! | [`consts`] | Logical viewBox layout shared by all of the above |

pub mod consts;
pub mod geometry;
pub mod particles;
pub mod regulation;
pub mod slider;
