//! Cookie-consent popover state.
//!
//! The popover starts visible. Accepting hides it for the rest of the page
//! session; only the floating toggle can show it again. Nothing is persisted.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieConsent {
    visible: bool,
    accepted: bool,
}

impl Default for CookieConsent {
    fn default() -> Self {
        Self { visible: true, accepted: false }
    }
}

impl CookieConsent {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub(crate) fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept cookies and hide the popover.
    pub fn accept(&mut self) {
        self.accepted = true;
        self.visible = false;
    }

    /// Floating control: show or hide the popover.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
