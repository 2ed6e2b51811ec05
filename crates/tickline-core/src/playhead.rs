//! Playhead state, seek/drag controller and edge auto-scroll
//!
//! Dragging the playhead near either end of a zoomed-in track pans the
//! viewport. The pan is applied before the seek in the same frame, so the
//! playhead always reflects the post-scroll window.
//!
//! ```text
//!  |<-zone->|                                          |<-zone->|
//!  [########|..........................................|########]
//!   fast <- slow                                   slow -> fast
//!  zone = width / 20, speed = (10 / scale) * (0.2 + 2.8 * (1 - proximity)^2)
//! ```

use crate::geometry::TrackGeometry;
use crate::tick_space::Tick;
use crate::viewport::Viewport;

// =============================================================================
// Auto-scroll Policy
// =============================================================================

/// Fraction of the track width (per side) that triggers auto-scroll
pub const AUTO_SCROLL_ZONE_DIVISOR: f32 = 20.0;

/// Ticks per frame at scale 1.0 before the proximity curve is applied
pub const AUTO_SCROLL_BASE_SPEED: f64 = 10.0;

/// Speed multiplier at the inner boundary of the zone
const AUTO_SCROLL_MIN_FACTOR: f64 = 0.2;

/// Extra multiplier reached at the very edge (`min + extra` = 3.0x)
const AUTO_SCROLL_EXTRA_FACTOR: f64 = 2.8;

/// Pan delta (in ticks) for a playhead drag at `pixel_x` this frame
///
/// Zero when not zoomed in, outside both edge zones, or when the window
/// already touches the corresponding end of the space.
pub fn auto_scroll_delta(viewport: &Viewport, pixel_x: f32, track: &TrackGeometry) -> Tick {
    if !viewport.is_zoomed_in() {
        return 0;
    }
    let zone = track.width / AUTO_SCROLL_ZONE_DIVISOR;
    if !(zone > 0.0) {
        return 0;
    }

    if pixel_x < track.x + zone && viewport.offset() > 0 {
        let proximity = (pixel_x - track.x) / zone;
        return -edge_speed(viewport.scale(), proximity);
    }

    let right = track.right();
    if pixel_x > right - zone && viewport.offset() < viewport.max_offset() {
        let proximity = (right - pixel_x) / zone;
        return edge_speed(viewport.scale(), proximity);
    }

    0
}

/// Quadratic ease-in: 0.2x at the zone boundary up to 3.0x at the edge,
/// never less than one tick per frame
fn edge_speed(scale: f64, proximity: f32) -> Tick {
    let proximity = (proximity as f64).clamp(0.0, 1.0);
    let multiplier = (1.0 - proximity) * (1.0 - proximity);
    let base = AUTO_SCROLL_BASE_SPEED / scale;
    let speed = base * (AUTO_SCROLL_MIN_FACTOR + AUTO_SCROLL_EXTRA_FACTOR * multiplier);
    (speed.round() as Tick).max(1)
}

// =============================================================================
// Playhead
// =============================================================================

/// The single "current position" marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playhead {
    tick: Tick,
    dragging: bool,
}

impl Playhead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Whether a playhead drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Move to the tick under `pixel_x`
    pub fn seek_to_pixel(&mut self, viewport: &Viewport, pixel_x: f32, track: &TrackGeometry) {
        self.tick = viewport.to_tick(pixel_x, track);
    }

    /// Start a drag gesture and seek to the press position
    pub fn begin_drag(&mut self, viewport: &Viewport, pixel_x: f32, track: &TrackGeometry) {
        self.dragging = true;
        self.seek_to_pixel(viewport, pixel_x, track);
        log::debug!("Playhead: drag started at tick {}", self.tick);
    }

    /// Per-frame drag update: auto-scroll first, then seek
    ///
    /// Returns the pan delta that was applied to the viewport.
    pub fn update_drag(&mut self, viewport: &mut Viewport, pixel_x: f32, track: &TrackGeometry) -> Tick {
        if !self.dragging {
            return 0;
        }
        let delta = auto_scroll_delta(viewport, pixel_x, track);
        let applied = if delta != 0 { viewport.pan(delta) } else { 0 };
        self.seek_to_pixel(viewport, pixel_x, track);
        applied
    }

    pub fn end_drag(&mut self) {
        if self.dragging {
            log::debug!("Playhead: drag ended at tick {}", self.tick);
        }
        self.dragging = false;
    }

    /// Step by `delta_ticks`, clamped to the space
    pub fn nudge_by(&mut self, viewport: &Viewport, delta_ticks: Tick) {
        self.tick = viewport.space().clamp(self.tick.saturating_add(delta_ticks));
    }

    pub fn jump_to_start(&mut self) {
        self.tick = 0;
    }

    pub fn jump_to_end(&mut self, viewport: &Viewport) {
        self.tick = viewport.max_ticks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick_space::TickSpace;

    fn zoomed(max_ticks: Tick, scale: f64, offset: Tick) -> Viewport {
        let mut viewport = Viewport::new(TickSpace::new(max_ticks));
        viewport.set_scale(scale);
        viewport.set_offset(offset);
        viewport
    }

    #[test]
    fn test_no_auto_scroll_when_not_zoomed() {
        let vp = zoomed(600, 1.0, 0);
        let track = TrackGeometry::new(0.0, 400.0);
        assert_eq!(auto_scroll_delta(&vp, 0.0, &track), 0);
        assert_eq!(auto_scroll_delta(&vp, 400.0, &track), 0);
    }

    #[test]
    fn test_no_auto_scroll_in_middle() {
        let vp = zoomed(600, 3.0, 50);
        let track = TrackGeometry::new(0.0, 400.0);
        assert_eq!(auto_scroll_delta(&vp, 200.0, &track), 0);
        // Zone is 20px wide: 20.0 is its inner boundary, not inside it
        assert_eq!(auto_scroll_delta(&vp, 20.0, &track), 0);
    }

    #[test]
    fn test_left_edge_max_speed() {
        // scale 3: base = 10/3, factor at the edge = 3.0 -> 10 ticks
        let vp = zoomed(600, 3.0, 50);
        let track = TrackGeometry::new(0.0, 400.0);
        assert_eq!(auto_scroll_delta(&vp, 0.0, &track), -10);
    }

    #[test]
    fn test_speed_increases_toward_edge() {
        let vp = zoomed(6000, 2.0, 2000);
        let track = TrackGeometry::new(100.0, 1000.0);
        // Zone is 50px
        let near_boundary = auto_scroll_delta(&vp, 149.0, &track).abs();
        let mid_zone = auto_scroll_delta(&vp, 125.0, &track).abs();
        let at_edge = auto_scroll_delta(&vp, 100.0, &track).abs();
        assert!(near_boundary >= 1);
        assert!(near_boundary < mid_zone, "{} < {}", near_boundary, mid_zone);
        assert!(mid_zone < at_edge, "{} < {}", mid_zone, at_edge);
        assert_eq!(at_edge, 15);
    }

    #[test]
    fn test_right_edge_scrolls_forward() {
        let vp = zoomed(600, 2.0, 0);
        let track = TrackGeometry::new(0.0, 400.0);
        assert_eq!(auto_scroll_delta(&vp, 400.0, &track), 15);
    }

    #[test]
    fn test_no_scroll_past_space_ends() {
        let track = TrackGeometry::new(0.0, 400.0);
        let at_start = zoomed(600, 2.0, 0);
        assert_eq!(auto_scroll_delta(&at_start, 0.0, &track), 0);
        let at_end = zoomed(600, 2.0, 300);
        assert_eq!(auto_scroll_delta(&at_end, 400.0, &track), 0);
    }

    #[test]
    fn test_pointer_past_edge_is_capped_at_max_speed() {
        let vp = zoomed(600, 3.0, 300);
        let track = TrackGeometry::new(100.0, 400.0);
        assert_eq!(auto_scroll_delta(&vp, -500.0, &track), -10);
    }

    #[test]
    fn test_minimum_one_tick_per_frame() {
        // base = 10/5 = 2, at the zone boundary 2 * 0.2 = 0.4 -> clamped to 1
        let vp = zoomed(6000, 5.0, 1000);
        let track = TrackGeometry::new(0.0, 2000.0);
        assert_eq!(auto_scroll_delta(&vp, 99.9, &track), -1);
    }

    #[test]
    fn test_drag_at_left_edge_scrolls_to_zero() {
        let mut vp = zoomed(600, 3.0, 50);
        let track = TrackGeometry::new(0.0, 400.0);
        let mut playhead = Playhead::new();
        playhead.begin_drag(&vp, 0.0, &track);
        assert_eq!(playhead.tick(), 50);

        let mut last_offset = vp.offset();
        for _ in 0..4 {
            let applied = playhead.update_drag(&mut vp, 0.0, &track);
            assert_eq!(applied, -10, "Max speed at the very edge");
            assert!(vp.offset() < last_offset);
            assert_eq!(playhead.tick(), vp.offset(), "Seek follows the scrolled window");
            last_offset = vp.offset();
        }
        assert_eq!(vp.offset(), 10);

        playhead.update_drag(&mut vp, 0.0, &track);
        assert_eq!(vp.offset(), 0);
        for _ in 0..5 {
            assert_eq!(playhead.update_drag(&mut vp, 0.0, &track), 0);
            assert_eq!(vp.offset(), 0, "Offset never goes below zero");
        }
        assert_eq!(playhead.tick(), 0);
    }

    #[test]
    fn test_update_without_drag_is_noop() {
        let mut vp = zoomed(600, 3.0, 50);
        let track = TrackGeometry::new(0.0, 400.0);
        let mut playhead = Playhead::new();
        assert_eq!(playhead.update_drag(&mut vp, 0.0, &track), 0);
        assert_eq!(vp.offset(), 50);
        assert_eq!(playhead.tick(), 0);
    }

    #[test]
    fn test_end_drag_idempotent() {
        let vp = zoomed(600, 1.0, 0);
        let track = TrackGeometry::new(0.0, 600.0);
        let mut playhead = Playhead::new();
        playhead.begin_drag(&vp, 300.0, &track);
        playhead.end_drag();
        let after_first = playhead;
        playhead.end_drag();
        assert_eq!(playhead, after_first);
        assert!(!playhead.is_dragging());
        assert_eq!(playhead.tick(), 300);
    }

    #[test]
    fn test_nudge_and_jumps() {
        let vp = zoomed(100, 1.0, 0);
        let mut playhead = Playhead::new();
        playhead.nudge_by(&vp, -5);
        assert_eq!(playhead.tick(), 0);
        playhead.nudge_by(&vp, 5);
        assert_eq!(playhead.tick(), 5);
        playhead.jump_to_end(&vp);
        assert_eq!(playhead.tick(), 100);
        playhead.nudge_by(&vp, 5);
        assert_eq!(playhead.tick(), 100);
        playhead.jump_to_start();
        assert_eq!(playhead.tick(), 0);
    }
}
