use crate::constants::{OVERLAY_FADE_DELAY_MS, OVERLAY_REMOVE_DELAY_MS};

pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading animation. Please try refreshing the page or try a different browser.";

/// Two back-to-back timers: start the CSS fade, then hide the element
/// outright whether or not the transition ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlaySchedule {
    pub fade_delay_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for OverlaySchedule {
    fn default() -> Self {
        Self {
            fade_delay_ms: OVERLAY_FADE_DELAY_MS,
            remove_delay_ms: OVERLAY_REMOVE_DELAY_MS,
        }
    }
}
