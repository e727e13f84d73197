//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Window, DOM, and timer access is isolated here behind the `hydrate`
//! feature. Server rendering gets inert fallbacks so components compile and
//! render the same markup on both sides.

pub mod clock;
pub mod pointer;
pub mod scroll;
