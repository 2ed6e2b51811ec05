//! Pixel geometry of the timeline track strip
//!
//! The host owns layout and hands the engine a fresh [`TrackGeometry`] every
//! frame, so resizing the window never needs to touch engine state.

use serde::{Deserialize, Serialize};

/// Horizontal extent of the track in pixels, with an optional vertical band
/// used only for press/wheel hit testing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Left edge of the track
    pub x: f32,
    /// Track width (zero or negative widths are tolerated, see `Viewport`)
    pub width: f32,
    /// `(y, height)` of the track; `None` means any pointer height hits
    #[serde(default)]
    pub vertical: Option<(f32, f32)>,
}

impl TrackGeometry {
    /// Track with horizontal extent only
    pub fn new(x: f32, width: f32) -> Self {
        Self {
            x,
            width,
            vertical: None,
        }
    }

    /// Attach a vertical band for hit testing
    pub fn with_vertical(mut self, y: f32, height: f32) -> Self {
        self.vertical = Some((y, height));
        self
    }

    /// Right edge of the track
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether a pointer position lies on the track (edges inclusive)
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let inside_x = px >= self.x && px <= self.right();
        let inside_y = match self.vertical {
            Some((y, height)) => py >= y && py <= y + height,
            None => true,
        };
        inside_x && inside_y
    }

    /// Normalized horizontal position of `px`, clamped to `[0, 1]`
    ///
    /// Degenerate tracks (`width <= 0`) and non-finite input map to 0.
    pub fn ratio(&self, px: f32) -> f64 {
        if !(self.width > 0.0) {
            return 0.0;
        }
        let ratio = (px as f64 - self.x as f64) / self.width as f64;
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
