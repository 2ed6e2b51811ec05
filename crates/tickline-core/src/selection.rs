//! Modifier-gated range selection
//!
//! ```text
//!          modifier press            release, range >= 5
//!   Idle ──────────────────► Dragging ──────────────────► Committed
//!    ▲                          │                             │
//!    └──────────────────────────┘◄────────────────────────────┘
//!        release, range < 5          plain press / clear
//! ```
//!
//! While dragging, `anchor` and `current` stay in gesture order so the
//! renderer can grow the highlight from the true anchor in either direction.
//! They are only normalized (`anchor <= current`) on commit.

use serde::{Deserialize, Serialize};

use crate::geometry::TrackGeometry;
use crate::tick_space::Tick;
use crate::viewport::Viewport;

/// Minimum `|current - anchor|` for a selection to survive release
pub const MIN_SELECTION_TICKS: Tick = 5;

/// Selection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging,
    Committed,
}

/// Anchor/current tick pair plus its lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    anchor_tick: Tick,
    current_tick: Tick,
    state: SelectionState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Tick where the gesture started (raw gesture order while dragging)
    pub fn anchor_tick(&self) -> Tick {
        self.anchor_tick
    }

    /// Tick under the pointer (raw gesture order while dragging)
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn is_dragging(&self) -> bool {
        self.state == SelectionState::Dragging
    }

    pub fn is_committed(&self) -> bool {
        self.state == SelectionState::Committed
    }

    /// Normalized `(start, end)` of a committed selection
    pub fn range(&self) -> Option<(Tick, Tick)> {
        self.is_committed()
            .then_some((self.anchor_tick, self.current_tick))
    }

    /// Press on the track
    ///
    /// Without the modifier this only drops a committed selection (the press
    /// belongs to the playhead). With it, a new drag starts at the press tick.
    pub fn begin(
        &mut self,
        viewport: &Viewport,
        pixel_x: f32,
        track: &TrackGeometry,
        modifier_held: bool,
    ) {
        if !modifier_held {
            if self.state == SelectionState::Committed {
                self.clear();
            }
            return;
        }

        let tick = viewport.to_tick(pixel_x, track);
        self.anchor_tick = tick;
        self.current_tick = tick;
        self.state = SelectionState::Dragging;
        log::debug!("Selection: drag started at tick {}", tick);
    }

    pub fn update(&mut self, viewport: &Viewport, pixel_x: f32, track: &TrackGeometry) {
        if self.state != SelectionState::Dragging {
            return;
        }
        self.current_tick = viewport.to_tick(pixel_x, track);
    }

    /// Release: commit if the drag covers at least [`MIN_SELECTION_TICKS`],
    /// otherwise discard it as a micro-drag
    pub fn end(&mut self) -> SelectionState {
        if self.state != SelectionState::Dragging {
            return self.state;
        }

        let span = (self.current_tick - self.anchor_tick).abs();
        if span >= MIN_SELECTION_TICKS {
            if self.anchor_tick > self.current_tick {
                std::mem::swap(&mut self.anchor_tick, &mut self.current_tick);
            }
            self.state = SelectionState::Committed;
            log::debug!(
                "Selection: committed [{}, {}]",
                self.anchor_tick,
                self.current_tick
            );
        } else {
            self.state = SelectionState::Idle;
            log::debug!("Selection: discarded ({} ticks < {})", span, MIN_SELECTION_TICKS);
        }
        self.state
    }

    /// Force back to `Idle` from any state
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Whether `tick` lies inside a committed selection (inclusive)
    pub fn contains(&self, tick: Tick) -> bool {
        self.is_committed() && self.anchor_tick <= tick && tick <= self.current_tick
    }
}
