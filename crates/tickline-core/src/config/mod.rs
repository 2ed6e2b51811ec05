//! Tuning configuration for the timeline engine
//!
//! Only interaction constants live here (steps, speeds, repeat timing).
//! Viewport, playhead and selection state are per-session and never written
//! to disk.
//!
//! # Usage
//!
//! ```ignore
//! use tickline_core::config::{default_config_path, load_config, TimelineConfig};
//!
//! let config: TimelineConfig = load_config(&default_config_path());
//! let engine = TimelineEngine::new(config);
//! ```

mod io;
mod paths;
mod timeline;

pub use io::{load_config, save_config, try_load_config};
pub use paths::{default_config_dir, default_config_path, CONFIG_FILE_NAME};
pub use timeline::{KeyboardConfig, SpaceConfig, TimelineConfig, WheelConfig};
