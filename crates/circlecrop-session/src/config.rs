//! Session configuration.

use circlecrop_core::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, OUTPUT_BITMAP_RESOLUTION};
use serde::{Deserialize, Serialize};

/// Tunable parameters of a crop session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bound on the larger dimension of the cropped output, in pixels.
    pub output_resolution: u32,
    /// Lower zoom clamp.
    pub min_zoom: f32,
    /// Upper zoom clamp for square images; non-square images get extra
    /// headroom via [`aspect_correction`](circlecrop_core::aspect_correction).
    pub max_zoom: f32,
    /// Inset between the crop circle and the viewport's near edges.
    pub horizontal_padding: f32,
    /// Extra inset lifting the crop circle above the bottom edge (room for
    /// the host's confirm/cancel controls).
    pub bottom_padding: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_resolution: OUTPUT_BITMAP_RESOLUTION,
            min_zoom: MIN_ZOOM_SCALE,
            max_zoom: MAX_ZOOM_SCALE,
            horizontal_padding: 16.0,
            bottom_padding: 0.0,
        }
    }
}
