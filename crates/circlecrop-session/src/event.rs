//! Typed input events for the crop session.
//!
//! Gesture detection lives in the host toolkit; what arrives here is an
//! already-interpreted stream of deltas, consumed one at a time. There is no
//! implicit cancellation between events - the latest event wins.

use circlecrop_core::Point;
use serde::{Deserialize, Serialize};

/// One step of the user's pan/zoom interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Drag by a screen-space delta.
    Pan { delta: Point },
    /// Multiply the current zoom scale.
    Zoom { factor: f32 },
    /// The gesture ended; the containment correction must run now.
    End,
}

/// Viewport dimensions delivered with a layout event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the viewport is taller than wide; the image is then
    /// width-aligned during layout.
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}
