//! Playback engine for the sorting visualizer.
//!
//! Provides the [`Player`] state machine that replays an action log one
//! action per event, the [`Controller`] that owns a visualizer session and
//! presents it through a [`RenderSink`], and the [`realtime`] driver that
//! paces a controller against the wall clock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod metrics;
pub mod player;
pub mod realtime;
pub mod sink;
pub mod visual;

pub use config::{
    ConfigError, Speed, VisualizerConfig, MAX_ARRAY_SIZE, MAX_DELAY_MS, MAX_SPEED_LEVEL,
    MIN_ARRAY_SIZE,
};
pub use controller::{ControlEvent, Controller};
pub use metrics::RunMetrics;
pub use player::{Outcome, Player, PlayerEvent};
pub use realtime::{run, run_headless, DriverHandle};
pub use sink::{NullSink, RenderSink, Status};
pub use visual::VisualState;
