//! Per-card video player state.
//!
//! A hosted-embed card starts `Dormant` (thumbnail and play button) and
//! becomes `Active` (live player) on activation. There is no way back.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoCardState {
    #[default]
    Dormant,
    Active,
}

impl VideoCardState {
    /// Activate the player. Returns `true` only on the dormant→active edge.
    pub fn activate(&mut self) -> bool {
        let was_dormant = *self == Self::Dormant;
        *self = Self::Active;
        was_dormant
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}
