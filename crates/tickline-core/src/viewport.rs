//! Visible window over the tick space and the tick <-> pixel transform
//!
//! The viewport is the only state shared by the playhead, selection and zoom
//! controllers. Both update logic and the renderer go through
//! [`Viewport::to_pixel`] / [`Viewport::to_tick`], so there is exactly one
//! definition of where a tick lands on screen.
//!
//! ```text
//!  0        offset            offset + visible_ticks        max_ticks
//!  |-----------[=================================]--------------|
//!              ^ track.x                         ^ track.x + width
//! ```

use crate::error::TimelineError;
use crate::geometry::TrackGeometry;
use crate::tick_space::{Tick, TickSpace};

// =============================================================================
// Constants
// =============================================================================

/// Most zoomed-out scale
pub const MIN_SCALE: f64 = 0.5;

/// Most zoomed-in scale
pub const MAX_SCALE: f64 = 5.0;

/// Scale at session start (whole space visible)
pub const DEFAULT_SCALE: f64 = 1.0;

// =============================================================================
// Viewport
// =============================================================================

/// Zoom `scale` and pan `offset` over an owned [`TickSpace`]
///
/// `visible_ticks` and `max_offset` are cached and recomputed whenever the
/// scale, offset or space changes, so every accessor sees a consistent
/// snapshot. Invariant: `0 <= offset <= max_offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    space: TickSpace,
    scale: f64,
    offset: Tick,
    visible_ticks: Tick,
    max_offset: Tick,
}

impl Viewport {
    /// Viewport at default zoom showing the start of `space`
    pub fn new(space: TickSpace) -> Self {
        let mut viewport = Self {
            space,
            scale: DEFAULT_SCALE,
            offset: 0,
            visible_ticks: 0,
            max_offset: 0,
        };
        viewport.recompute();
        viewport
    }

    pub fn space(&self) -> &TickSpace {
        &self.space
    }

    pub fn max_ticks(&self) -> Tick {
        self.space.max_ticks()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Tick {
        self.offset
    }

    /// `floor(max_ticks / scale)`; may exceed `max_ticks` when zoomed out
    pub fn visible_ticks(&self) -> Tick {
        self.visible_ticks
    }

    pub fn max_offset(&self) -> Tick {
        self.max_offset
    }

    /// Whether the window is narrower than the space (auto-scroll applies)
    pub fn is_zoomed_in(&self) -> bool {
        self.scale > 1.0
    }

    fn recompute(&mut self) {
        let max_ticks = self.space.max_ticks();
        self.visible_ticks = (max_ticks as f64 / self.scale).floor() as Tick;
        self.max_offset = (max_ticks - self.visible_ticks).max(0);
        self.offset = self.offset.clamp(0, self.max_offset);
    }

    /// Visible tick range `(start, end)` as reported to callers
    ///
    /// `start == end` is possible (empty space); use
    /// [`Viewport::transform_range`] for arithmetic.
    pub fn visible_range(&self) -> (Tick, Tick) {
        let start = self.offset;
        let end = (self.offset + self.visible_ticks).min(self.space.max_ticks());
        (start, end)
    }

    /// Visible range with a degenerate (empty) window widened to one tick,
    /// so the transform never divides by zero
    fn transform_range(&self) -> (Tick, Tick) {
        let (start, end) = self.visible_range();
        if end <= start {
            (start, start + 1)
        } else {
            (start, end)
        }
    }

    /// Pixel x of `tick` on `track` (rounded to whole pixels)
    pub fn to_pixel(&self, tick: Tick, track: &TrackGeometry) -> f32 {
        if !(track.width > 0.0) {
            return track.x;
        }
        let (start, end) = self.transform_range();
        let ratio = (tick as f64 - start as f64) / (end - start) as f64;
        track.x + (ratio * track.width as f64).round() as f32
    }

    /// Tick under pixel x on `track`, clamped to the track and the space
    pub fn to_tick(&self, pixel_x: f32, track: &TrackGeometry) -> Tick {
        let ratio = track.ratio(pixel_x);
        let (start, end) = self.transform_range();
        let tick = (start as f64 + ratio * (end - start) as f64).round() as Tick;
        self.space.clamp(tick)
    }

    /// Move the window by `delta_ticks`, clamped to `[0, max_offset]`
    ///
    /// Returns the delta actually applied.
    pub fn pan(&mut self, delta_ticks: Tick) -> Tick {
        let before = self.offset;
        self.offset = self.offset.saturating_add(delta_ticks).clamp(0, self.max_offset);
        self.offset - before
    }

    /// Set the window start directly (clamped)
    pub fn set_offset(&mut self, offset: Tick) {
        self.offset = offset.clamp(0, self.max_offset);
    }

    /// Change scale keeping the current offset (clamped)
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.recompute();
    }

    /// Cursor-anchored zoom
    ///
    /// The tick under `anchor_x` before the change stays under `anchor_x`
    /// afterwards, unless the solved offset has to be clamped at either end of
    /// the space. Returns `false` when the (clamped) scale did not change.
    pub fn set_zoom(&mut self, new_scale: f64, anchor_x: f32, track: &TrackGeometry) -> bool {
        if !new_scale.is_finite() {
            return false;
        }
        let new_scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }

        let old_scale = self.scale;
        let anchor_tick = self.to_tick(anchor_x, track);
        let anchor_ratio = track.ratio(anchor_x);

        self.scale = new_scale;
        self.recompute();

        let solved = (anchor_tick as f64 - anchor_ratio * self.visible_ticks as f64).round() as Tick;
        self.offset = solved.clamp(0, self.max_offset);

        log::debug!(
            "Viewport: zoom {:.2} -> {:.2} anchored at tick {} (offset {}, solved {})",
            old_scale,
            new_scale,
            anchor_tick,
            self.offset,
            solved
        );
        true
    }

    /// Grow the underlying space and re-derive the window bounds
    pub fn extend(&mut self, amount: Option<Tick>) -> Result<Tick, TimelineError> {
        let max_ticks = self.space.extend(amount)?;
        self.on_space_extended();
        Ok(max_ticks)
    }

    /// Re-derive `visible_ticks`/`max_offset` after the space changed
    pub fn on_space_extended(&mut self) {
        let offset = self.offset;
        self.recompute();
        if self.offset != offset {
            log::debug!(
                "Viewport: offset clamped {} -> {} after space change",
                offset,
                self.offset
            );
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(TickSpace::default())
    }
}
