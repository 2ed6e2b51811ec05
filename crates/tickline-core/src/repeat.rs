//! Held-key repeat timing
//!
//! One [`RepeatTrigger`] per repeatable key replaces ad-hoc "just pressed /
//! held for 500ms" checks. The first held frame fires immediately; after the
//! initial delay the trigger fires during the first `active_window` of every
//! `period`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Repeat timing in milliseconds (config form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatTiming {
    /// Hold time before repeating starts
    pub initial_delay_ms: u64,
    /// Repeat period once repeating
    pub period_ms: u64,
    /// Portion of each period during which frames fire
    pub active_window_ms: u64,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            period_ms: 50,
            // Roughly one 60 Hz frame per period
            active_window_ms: 16,
        }
    }
}

/// Per-key repeat state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTrigger {
    initial_delay: Duration,
    period: Duration,
    active_window: Duration,
    first_press: Option<Instant>,
}

impl RepeatTrigger {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            initial_delay: Duration::from_millis(timing.initial_delay_ms),
            period: Duration::from_millis(timing.period_ms),
            active_window: Duration::from_millis(timing.active_window_ms),
            first_press: None,
        }
    }

    /// Whether the key is currently being held
    pub fn is_held(&self) -> bool {
        self.first_press.is_some()
    }

    /// Feed this frame's held state; returns whether the action fires
    pub fn update(&mut self, held: bool, now: Instant) -> bool {
        if !held {
            self.first_press = None;
            return false;
        }

        let Some(first_press) = self.first_press else {
            self.first_press = Some(now);
            return true;
        };

        let elapsed = now.saturating_duration_since(first_press);
        if elapsed <= self.initial_delay {
            return false;
        }
        if self.period.is_zero() {
            return true;
        }
        let phase = elapsed.as_nanos() % self.period.as_nanos();
        phase < self.active_window.as_nanos()
    }

    pub fn reset(&mut self) {
        self.first_press = None;
    }
}

impl Default for RepeatTrigger {
    fn default() -> Self {
        Self::new(RepeatTiming::default())
    }
}
