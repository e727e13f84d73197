//! Page-shell and component presentation state.
//!
//! DESIGN
//! ======
//! Each model is a plain value type with explicit transitions so the
//! behaviour can be tested without a browser. Components hold them in
//! `RwSignal`s; the page shell provides `nav` and `consent` as context.

pub mod consent;
pub mod nav;
pub mod video;
