//! Mouse-wheel handling: cursor-anchored zoom with the modifier, pan without

use crate::geometry::TrackGeometry;
use crate::tick_space::Tick;
use crate::viewport::Viewport;

/// Scale change per wheel notch
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Ticks panned per notch at scale 1.0
pub const DEFAULT_WHEEL_PAN_TICKS: f64 = 20.0;

/// What a wheel event did to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// No wheel movement
    Ignored,
    /// Scale changed (or was already at a bound when `changed` is false)
    Zoomed { changed: bool },
    /// Window moved by the given (post-clamp) number of ticks
    Panned(Tick),
}

/// Wheel-to-viewport policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    /// Scale change per notch
    pub zoom_step: f64,
    /// Ticks per notch at scale 1.0; divided by the current scale
    pub pan_ticks: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_ticks: DEFAULT_WHEEL_PAN_TICKS,
        }
    }
}

impl ZoomController {
    pub fn new(zoom_step: f64, pan_ticks: f64) -> Self {
        Self {
            zoom_step,
            pan_ticks,
        }
    }

    /// Pan step per notch at the viewport's current scale (at least 1 tick)
    ///
    /// Shrinks as zoom increases so a notch covers roughly the same number
    /// of screen pixels at any scale.
    pub fn pan_step(&self, viewport: &Viewport) -> Tick {
        ((self.pan_ticks / viewport.scale()).round() as Tick).max(1)
    }

    /// Apply `delta_notches` of wheel movement (positive = wheel up/away)
    pub fn on_wheel(
        &self,
        viewport: &mut Viewport,
        delta_notches: f32,
        cursor_x: f32,
        track: &TrackGeometry,
        modifier_held: bool,
    ) -> WheelOutcome {
        if delta_notches == 0.0 || !delta_notches.is_finite() {
            return WheelOutcome::Ignored;
        }

        if modifier_held {
            let target = viewport.scale() + delta_notches as f64 * self.zoom_step;
            let changed = viewport.set_zoom(target, cursor_x, track);
            return WheelOutcome::Zoomed { changed };
        }

        let step = self.pan_step(viewport);
        let delta = (-(delta_notches as f64) * step as f64).round() as Tick;
        WheelOutcome::Panned(viewport.pan(delta))
    }
}
