//! Engine tuning sections

use serde::{Deserialize, Serialize};

use crate::repeat::RepeatTiming;
use crate::tick_space::{Tick, DEFAULT_EXTEND_STEP};
use crate::zoom::{DEFAULT_WHEEL_PAN_TICKS, DEFAULT_ZOOM_STEP};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Size of the tick space
    pub space: SpaceConfig,
    /// Keyboard navigation steps and repeat timing
    pub keyboard: KeyboardConfig,
    /// Mouse wheel zoom/pan steps
    pub wheel: WheelConfig,
}

impl TimelineConfig {
    /// Replace step values the engine cannot use
    ///
    /// Keyboard steps are magnitudes (direction comes from the key), so
    /// anything below one tick is raised to one.
    pub fn sanitized(mut self) -> Self {
        let keyboard = &mut self.keyboard;
        if keyboard.nudge_ticks < 1 {
            log::warn!(
                "TimelineConfig: keyboard.nudge_ticks {} < 1, using 1",
                keyboard.nudge_ticks
            );
            keyboard.nudge_ticks = 1;
        }
        if keyboard.page_scroll_ticks < 1 {
            log::warn!(
                "TimelineConfig: keyboard.page_scroll_ticks {} < 1, using 1",
                keyboard.page_scroll_ticks
            );
            keyboard.page_scroll_ticks = 1;
        }
        self
    }
}

/// Tick space section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    /// `max_ticks` of a fresh session
    pub initial_max_ticks: Tick,
    /// Ticks added by a plain extend
    pub extend_step: Tick,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            initial_max_ticks: 600,
            extend_step: DEFAULT_EXTEND_STEP,
        }
    }
}

/// Keyboard section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Playhead step for the left/right nudge keys
    pub nudge_ticks: Tick,
    /// Page Up/Down scroll at scale 1.0 (divided by the current scale)
    pub page_scroll_ticks: Tick,
    /// Held nudge key repeat
    pub repeat: RepeatTiming,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            nudge_ticks: 5,
            page_scroll_ticks: 50,
            repeat: RepeatTiming::default(),
        }
    }
}

/// Wheel section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Scale change per notch with the modifier held
    pub zoom_step: f64,
    /// Pan per notch at scale 1.0 (divided by the current scale)
    pub pan_ticks: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_ticks: DEFAULT_WHEEL_PAN_TICKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimelineConfig::default();
        assert_eq!(config.space.initial_max_ticks, 600);
        assert_eq!(config.space.extend_step, 600);
        assert_eq!(config.keyboard.nudge_ticks, 5);
        assert_eq!(config.keyboard.repeat.initial_delay_ms, 500);
        assert_eq!(config.wheel.zoom_step, 0.1);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
space:
  extend_step: 1200
keyboard:
  repeat:
    period_ms: 80
"#;
        let config: TimelineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.space.extend_step, 1200);
        assert_eq!(config.space.initial_max_ticks, 600);
        assert_eq!(config.keyboard.repeat.period_ms, 80);
        assert_eq!(config.keyboard.repeat.initial_delay_ms, 500);
        assert_eq!(config.wheel, WheelConfig::default());
    }

    #[test]
    fn test_sanitized_raises_keyboard_steps() {
        let yaml = r#"
keyboard:
  nudge_ticks: -9223372036854775808
  page_scroll_ticks: 0
"#;
        let config: TimelineConfig = serde_yaml::from_str(yaml).unwrap();
        let config = config.sanitized();
        assert_eq!(config.keyboard.nudge_ticks, 1);
        assert_eq!(config.keyboard.page_scroll_ticks, 1);
        assert_eq!(TimelineConfig::default().sanitized(), TimelineConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = TimelineConfig {
            space: SpaceConfig {
                initial_max_ticks: 3000,
                extend_step: 300,
            },
            keyboard: KeyboardConfig {
                nudge_ticks: 10,
                page_scroll_ticks: 100,
                repeat: RepeatTiming {
                    initial_delay_ms: 400,
                    period_ms: 40,
                    active_window_ms: 16,
                },
            },
            wheel: WheelConfig {
                zoom_step: 0.25,
                pan_ticks: 30.0,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: TimelineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
