//! Replay scripts: a track layout plus a list of recorded input frames
//!
//! ```yaml
//! track: { x: 0, width: 800, vertical: [0, 40] }
//! frame_ms: 16
//! frames:
//!   - { pointer: [120, 10], modifier: true, primary: { pressed: true, down: true } }
//!   - { pointer: [400, 10], primary: { down: true }, repeat: 10 }
//!   - { primary: { down: false } }
//!   - { commands: [jump_end, !nudge -5] }
//! ```
//!
//! Frames that omit `pointer` keep the previous frame's pointer, so a drag
//! can be written as a press followed by held frames at new positions.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use tickline_core::{
    ButtonState, HeldKeys, InputSnapshot, TimelineCommand, TimelineEngine, TimelineError,
    TimelineView, TrackGeometry,
};
use tickline_core::selection::SelectionState;

fn default_frame_ms() -> u64 {
    16
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub track: TrackGeometry,
    /// Simulated time between frames
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

/// One recorded frame (fields mirror [`InputSnapshot`])
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptFrame {
    pub pointer: Option<(f32, f32)>,
    pub primary: ButtonState,
    pub wheel: f32,
    pub modifier: bool,
    /// Per-frame layout change (window resize)
    pub track: Option<TrackGeometry>,
    pub held: HeldKeys,
    pub commands: Vec<TimelineCommand>,
    pub text_input_focused: bool,
    /// Replay this frame `repeat` times; commands only fire on the first copy
    pub repeat: u32,
}

impl Default for ScriptFrame {
    fn default() -> Self {
        Self {
            pointer: None,
            primary: ButtonState::default(),
            wheel: 0.0,
            modifier: false,
            track: None,
            held: HeldKeys::default(),
            commands: Vec::new(),
            text_input_focused: false,
            repeat: 1,
        }
    }
}

/// Totals gathered over a replay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub consumed: usize,
    pub rejected: Vec<TimelineError>,
}

pub fn parse_script(yaml: &str) -> Result<Script> {
    let script: Script = serde_yaml::from_str(yaml).context("Failed to parse replay script")?;
    validate_track(&script.track).context("Invalid script track")?;
    for (index, frame) in script.frames.iter().enumerate() {
        if let Some(track) = &frame.track {
            validate_track(track).with_context(|| format!("Invalid track in frame {}", index))?;
        }
    }
    Ok(script)
}

pub fn load_script(path: &Path) -> Result<Script> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script: {:?}", path))?;
    parse_script(&contents).with_context(|| format!("In replay script {:?}", path))
}

fn validate_track(track: &TrackGeometry) -> Result<()> {
    if !track.x.is_finite() || !track.width.is_finite() {
        bail!("track x/width must be finite (x = {}, width = {})", track.x, track.width);
    }
    if let Some((y, height)) = track.vertical {
        if !y.is_finite() || !height.is_finite() {
            bail!("track vertical band must be finite (y = {}, height = {})", y, height);
        }
    }
    Ok(())
}

/// Feed every frame of `script` to `engine`, frame `i` stamped `start + i * frame_ms`
pub fn replay(engine: &mut TimelineEngine, script: &Script, start: Instant) -> ReplaySummary {
    let frame_time = Duration::from_millis(script.frame_ms);
    let mut summary = ReplaySummary::default();
    let mut track = script.track;
    let mut pointer = (track.x, track.vertical.map_or(0.0, |(y, _)| y));

    for frame in &script.frames {
        if let Some(new_track) = frame.track {
            track = new_track;
        }
        if let Some(new_pointer) = frame.pointer {
            pointer = new_pointer;
        }

        for copy in 0..frame.repeat {
            let now = start + frame_time * summary.frames as u32;
            let input = InputSnapshot {
                now,
                pointer,
                // A press edge only happens once; later copies are held frames
                primary: ButtonState {
                    pressed: frame.primary.pressed && copy == 0,
                    down: frame.primary.down,
                },
                wheel: frame.wheel,
                modifier: frame.modifier,
                track,
                held: frame.held,
                commands: if copy == 0 {
                    frame.commands.clone()
                } else {
                    Vec::new()
                },
                text_input_focused: frame.text_input_focused,
            };

            let report = engine.update(&input);
            let view = engine.view();
            log::debug!(
                "frame {:>4}: pointer=({:.1}, {:.1}) consumed={} playhead={} {}",
                summary.frames,
                pointer.0,
                pointer.1,
                report.consumed,
                view.playhead_tick,
                view
            );

            summary.frames += 1;
            if report.consumed {
                summary.consumed += 1;
            }
            summary.rejected.extend(report.rejected);
        }
    }

    summary
}

/// Human-readable selection line for the final report
pub fn describe_selection(view: &TimelineView) -> String {
    match view.selection_state {
        SelectionState::Idle => "Selection: none".to_string(),
        SelectionState::Dragging => format!(
            "Selection: dragging {} -> {}",
            view.selection_anchor, view.selection_current
        ),
        SelectionState::Committed => match view.selection_range {
            Some((start, end)) => {
                format!("Selection: {}-{} ({} ticks)", start, end, end - start)
            }
            None => "Selection: none".to_string(),
        },
    }
}
