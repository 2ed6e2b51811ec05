//! Tickline Core - Zoomable tick timeline: viewport, playhead, selection

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod playhead;
pub mod repeat;
pub mod selection;
pub mod tick_space;
pub mod viewport;
pub mod zoom;

pub use engine::{FrameReport, Gesture, TimelineEngine, TimelineView};
pub use error::TimelineError;
pub use geometry::TrackGeometry;
pub use input::{ButtonState, HeldKeys, InputSnapshot, TimelineCommand};
pub use tick_space::{Tick, TickSpace};
pub use viewport::Viewport;
