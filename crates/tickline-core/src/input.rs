//! Per-frame input handed to the engine by the host

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::geometry::TrackGeometry;
use crate::tick_space::Tick;

/// Discrete timeline commands forwarded from host key/button bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineCommand {
    /// Move the playhead by a signed number of ticks
    Nudge(Tick),
    /// Playhead to tick 0 (Home)
    JumpStart,
    /// Playhead to the last tick (End)
    JumpEnd,
    /// Scroll the window back by a page (Page Up)
    PageBack,
    /// Scroll the window forward by a page (Page Down)
    PageForward,
    /// Grow the space by the configured step ("+" button)
    Extend,
    /// Grow the space by a custom amount
    ExtendBy(Tick),
}

/// Level state of the repeatable nudge keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldKeys {
    pub nudge_left: bool,
    pub nudge_right: bool,
}

/// Primary pointer button edges and level for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Is down at the end of this frame
    pub down: bool,
}

impl ButtonState {
    /// Button is up (release edge or idle)
    pub fn is_up(&self) -> bool {
        !self.down
    }
}

/// Everything the engine reads in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    /// Frame timestamp, used for key repeat
    pub now: Instant,
    /// Pointer position in pixels
    pub pointer: (f32, f32),
    pub primary: ButtonState,
    /// Signed wheel notches (positive = away from the user)
    pub wheel: f32,
    /// Range-select / zoom modifier (Ctrl)
    pub modifier: bool,
    /// Track layout for this frame
    pub track: TrackGeometry,
    pub held: HeldKeys,
    pub commands: Vec<TimelineCommand>,
    /// A text field owns the keyboard; commands and held keys are ignored
    pub text_input_focused: bool,
}

impl InputSnapshot {
    /// Idle frame: pointer at the track origin, nothing pressed
    pub fn idle(now: Instant, track: TrackGeometry) -> Self {
        Self {
            now,
            pointer: (track.x, track.vertical.map_or(0.0, |(y, _)| y)),
            primary: ButtonState::default(),
            wheel: 0.0,
            modifier: false,
            track,
            held: HeldKeys::default(),
            commands: Vec::new(),
            text_input_focused: false,
        }
    }

    /// Pointer at `(x, y)`
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.pointer = (x, y);
        self
    }

    /// Button went down this frame
    pub fn press(mut self) -> Self {
        self.primary = ButtonState {
            pressed: true,
            down: true,
        };
        self
    }

    /// Button still held from an earlier frame
    pub fn hold(mut self) -> Self {
        self.primary = ButtonState {
            pressed: false,
            down: true,
        };
        self
    }

    pub fn with_modifier(mut self) -> Self {
        self.modifier = true;
        self
    }

    pub fn with_wheel(mut self, notches: f32) -> Self {
        self.wheel = notches;
        self
    }

    pub fn with_command(mut self, command: TimelineCommand) -> Self {
        self.commands.push(command);
        self
    }
}
