//! Per-frame timeline engine
//!
//! One [`TimelineEngine`] is one editing session. The host calls
//! [`TimelineEngine::update`] once per rendered frame with an
//! [`InputSnapshot`]; everything else (renderer, event list, pickers) reads
//! state through [`TimelineEngine::view`] and the shared-reference accessors.
//!
//! Frame order:
//!
//! ```text
//! keyboard commands / held keys
//!   → wheel (zoom or pan)                      viewport
//!   → press: pick gesture by modifier          playhead xor selection
//!   → drag: auto-scroll pan, then seek/update  viewport → ticks
//!   → release (anywhere): end gesture          selection commit/discard
//! ```

use std::fmt;
use std::time::Instant;

use crate::config::TimelineConfig;
use crate::error::TimelineError;
use crate::geometry::TrackGeometry;
use crate::input::{HeldKeys, InputSnapshot, TimelineCommand};
use crate::playhead::Playhead;
use crate::repeat::RepeatTrigger;
use crate::selection::{Selection, SelectionState};
use crate::tick_space::{Tick, TickSpace};
use crate::viewport::Viewport;
use crate::zoom::{WheelOutcome, ZoomController};

/// Which controller owns the pointer until the next release
///
/// Decided once, from the modifier state at the press, and never re-evaluated
/// mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    None,
    Playhead,
    Selection,
}

/// What a frame did with its input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Input was used by the timeline and should not fall through to
    /// whatever lies underneath
    pub consumed: bool,
    /// Commands rejected this frame (state untouched for each)
    pub rejected: Vec<TimelineError>,
}

/// Read-only snapshot of everything a renderer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineView {
    pub playhead_tick: Tick,
    pub playhead_dragging: bool,
    pub scale: f64,
    pub offset: Tick,
    pub visible_range: (Tick, Tick),
    pub max_ticks: Tick,
    pub selection_state: SelectionState,
    /// Raw gesture-order anchor (meaningful while dragging or committed)
    pub selection_anchor: Tick,
    /// Raw gesture-order current tick
    pub selection_current: Tick,
    /// Normalized range once committed
    pub selection_range: Option<(Tick, Tick)>,
}

impl TimelineView {
    /// Whether `tick` is inside the committed selection
    pub fn selection_contains(&self, tick: Tick) -> bool {
        self.selection_range
            .is_some_and(|(start, end)| start <= tick && tick <= end)
    }
}

impl fmt::Display for TimelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.1}x | View: {}-{} ticks | Max: {}",
            self.scale, self.visible_range.0, self.visible_range.1, self.max_ticks
        )
    }
}

/// One editing session's timeline state and interaction logic
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: TimelineConfig,
    viewport: Viewport,
    playhead: Playhead,
    selection: Selection,
    zoom: ZoomController,
    gesture: Gesture,
    nudge_left: RepeatTrigger,
    nudge_right: RepeatTrigger,
}

impl TimelineEngine {
    pub fn new(config: TimelineConfig) -> Self {
        let config = config.sanitized();
        let space = TickSpace::new(config.space.initial_max_ticks);
        log::debug!(
            "TimelineEngine: new session with {} ticks",
            space.max_ticks()
        );
        Self {
            viewport: Viewport::new(space),
            playhead: Playhead::new(),
            selection: Selection::new(),
            zoom: ZoomController::new(config.wheel.zoom_step, config.wheel.pan_ticks),
            gesture: Gesture::None,
            nudge_left: RepeatTrigger::new(config.keyboard.repeat),
            nudge_right: RepeatTrigger::new(config.keyboard.repeat),
            config,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn playhead(&self) -> &Playhead {
        &self.playhead
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn view(&self) -> TimelineView {
        TimelineView {
            playhead_tick: self.playhead.tick(),
            playhead_dragging: self.playhead.is_dragging(),
            scale: self.viewport.scale(),
            offset: self.viewport.offset(),
            visible_range: self.viewport.visible_range(),
            max_ticks: self.viewport.max_ticks(),
            selection_state: self.selection.state(),
            selection_anchor: self.selection.anchor_tick(),
            selection_current: self.selection.current_tick(),
            selection_range: self.selection.range(),
        }
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    /// Process one frame of input
    pub fn update(&mut self, input: &InputSnapshot) -> FrameReport {
        let mut report = FrameReport::default();
        let (pointer_x, pointer_y) = input.pointer;
        let track = &input.track;
        let over_track = track.contains(pointer_x, pointer_y);

        if input.text_input_focused {
            self.nudge_left.reset();
            self.nudge_right.reset();
        } else {
            for &command in &input.commands {
                match self.apply_command(command) {
                    Ok(()) => report.consumed = true,
                    Err(e) => {
                        log::warn!("TimelineEngine: rejected {:?}: {}", command, e);
                        report.rejected.push(e);
                    }
                }
            }
            if self.apply_held_keys(input.held, input.now) {
                report.consumed = true;
            }
        }

        if input.wheel != 0.0 && over_track {
            let outcome = self.zoom.on_wheel(
                &mut self.viewport,
                input.wheel,
                pointer_x,
                track,
                input.modifier,
            );
            if outcome != WheelOutcome::Ignored {
                report.consumed = true;
            }
        }

        let mut ended = false;
        if input.primary.pressed {
            // A press while a gesture is open means the host lost a release
            if self.gesture != Gesture::None {
                self.end_gesture();
                ended = true;
            }
            if over_track {
                self.begin_gesture(pointer_x, track, input.modifier);
            }
        } else if input.primary.down {
            self.drag_gesture(pointer_x, track);
        }

        if input.primary.is_up() && self.gesture != Gesture::None {
            self.end_gesture();
            ended = true;
        }

        report.consumed |= over_track || ended || self.gesture != Gesture::None;
        report
    }

    fn begin_gesture(&mut self, pointer_x: f32, track: &TrackGeometry, modifier: bool) {
        self.selection.begin(&self.viewport, pointer_x, track, modifier);
        if modifier {
            self.gesture = Gesture::Selection;
        } else {
            self.playhead.begin_drag(&self.viewport, pointer_x, track);
            self.gesture = Gesture::Playhead;
        }
    }

    fn drag_gesture(&mut self, pointer_x: f32, track: &TrackGeometry) {
        match self.gesture {
            Gesture::Playhead => {
                self.playhead.update_drag(&mut self.viewport, pointer_x, track);
            }
            Gesture::Selection => self.selection.update(&self.viewport, pointer_x, track),
            Gesture::None => {}
        }
    }

    fn end_gesture(&mut self) {
        match self.gesture {
            Gesture::Playhead => self.playhead.end_drag(),
            Gesture::Selection => {
                self.selection.end();
            }
            Gesture::None => {}
        }
        self.gesture = Gesture::None;
    }

    fn apply_held_keys(&mut self, held: HeldKeys, now: Instant) -> bool {
        let step = self.config.keyboard.nudge_ticks;
        let mut fired = false;
        if self.nudge_left.update(held.nudge_left, now) {
            self.playhead.nudge_by(&self.viewport, -step);
            fired = true;
        }
        if self.nudge_right.update(held.nudge_right, now) {
            self.playhead.nudge_by(&self.viewport, step);
            fired = true;
        }
        fired
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a discrete command outside the frame loop
    pub fn apply_command(&mut self, command: TimelineCommand) -> Result<(), TimelineError> {
        match command {
            TimelineCommand::Nudge(delta) => self.playhead.nudge_by(&self.viewport, delta),
            TimelineCommand::JumpStart => self.playhead.jump_to_start(),
            TimelineCommand::JumpEnd => self.playhead.jump_to_end(&self.viewport),
            TimelineCommand::PageBack => {
                let step = self.page_step();
                self.viewport.pan(-step);
            }
            TimelineCommand::PageForward => {
                let step = self.page_step();
                self.viewport.pan(step);
            }
            TimelineCommand::Extend => {
                self.extend(None)?;
            }
            TimelineCommand::ExtendBy(amount) => {
                self.extend(Some(amount))?;
            }
        }
        Ok(())
    }

    /// Page Up/Down scroll distance at the current scale
    pub fn page_step(&self) -> Tick {
        let ticks = self.config.keyboard.page_scroll_ticks as f64 / self.viewport.scale();
        (ticks.floor() as Tick).max(1)
    }

    /// Grow the tick space by `amount`, or by the configured step when `None`
    pub fn extend(&mut self, amount: Option<Tick>) -> Result<Tick, TimelineError> {
        let amount = amount.unwrap_or(self.config.space.extend_step);
        self.viewport.extend(Some(amount))
    }

    /// Drop any selection regardless of state
    pub fn clear_selection(&mut self) {
        if self.gesture == Gesture::Selection {
            self.gesture = Gesture::None;
        }
        self.selection.clear();
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}
