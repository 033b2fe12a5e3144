//! Page tunables.
//!
//! DESIGN
//! ======
//! The page has no runtime configuration source (no env vars, no files). The
//! values below are the fixed presentation constants of the portfolio page,
//! gathered in one struct so the controller and the player adapter agree on
//! them and tests can override individual fields.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Viewport width (logical px) below which the mobile skill toggle is active.
pub const MOBILE_BREAKPOINT_PX: f64 = 450.0;

/// Volume the embedded player starts at (0-100).
pub const PLAYER_VOLUME: u8 = 10;

/// Playback quality requested on ready and re-requested while buffering.
pub const PLAYBACK_QUALITY: &str = "hd720";

/// Presentation constants shared by the controller and the player adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub mobile_breakpoint_px: f64,
    pub player_volume: u8,
    pub playback_quality: String,
    pub player_width: u32,
    pub player_height: u32,
    /// Element id the embedded player replaces.
    pub player_mount_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            player_volume: PLAYER_VOLUME,
            playback_quality: PLAYBACK_QUALITY.to_owned(),
            player_width: 1920,
            player_height: 1080,
            player_mount_id: "player".to_owned(),
        }
    }
}

impl PageConfig {
    /// Whether a viewport of `width` logical pixels uses the mobile layout.
    #[must_use]
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width < self.mobile_breakpoint_px
    }
}
