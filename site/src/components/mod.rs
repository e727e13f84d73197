//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static content from [`crate::content`]. Only three pieces
//! hold interactive state: the nav bar and consent popover read the shared
//! signals provided by [`crate::app::App`], while the diameter illustration and
//! each video card own a private signal.

pub mod contacts;
pub mod cookie_consent;
pub mod diameter_illustration;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod idea;
pub mod nav_bar;
pub mod resources;
pub mod section_header;
pub mod team;
pub mod video_card;
