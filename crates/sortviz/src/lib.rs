//! Sortviz: a step-by-step sorting algorithm visualizer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sortviz sub-crates. For most users, adding `sortviz` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! // Record a sort, then check the recording.
//! let values = [5, 3, 8, 1];
//! let log = generate(AlgorithmKind::Bubble, &values);
//! assert_eq!(log.totals().comparisons, 6);
//! assert!(verify_log(&values, &log).is_ok());
//!
//! // Drive a session by hand: one step, then play to the end.
//! let config = VisualizerConfig { size: 20, algorithm: AlgorithmKind::Merge, ..Default::default() };
//! let mut ctl = Controller::new(config, NullSink).unwrap();
//! ctl.step();
//! assert_eq!(ctl.state(), PlaybackState::Paused);
//! ctl.toggle_pause();
//! while ctl.state() == PlaybackState::Running {
//!     ctl.tick(ctl.delay());
//! }
//! assert!(ctl.frame().bars.iter().all(|bar| bar.sorted));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortviz-core` | Actions, logs, metrics, identifiers, the algorithm trait |
//! | [`algos`] | `sortviz-algos` | The five generators, catalog, array shapes |
//! | [`render`] | `sortviz-render` | Frames, bars, highlights, text canvas |
//! | [`engine`] | `sortviz-engine` | Player, controller, realtime driver, config |
//! | [`replay`] | `sortviz-replay` | Log replay, verification and fingerprints |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`sortviz-core`).
///
/// Contains [`types::Action`], [`types::ActionLog`], [`types::Metrics`]
/// and the [`types::SortAlgorithm`] trait.
pub use sortviz_core as types;

/// Action-log generators (`sortviz-algos`).
///
/// One generator per [`types::AlgorithmKind`], plus the
/// [`algos::Catalog`] and seeded array shapes.
pub use sortviz_algos as algos;

/// Rendering instructions (`sortviz-render`).
pub use sortviz_render as render;

/// Playback (`sortviz-engine`).
///
/// [`engine::Player`] for event-driven playback,
/// [`engine::Controller`] for a full session, and
/// [`engine::realtime`] for wall-clock pacing.
pub use sortviz_engine as engine;

/// Log replay and verification (`sortviz-replay`).
pub use sortviz_replay as replay;

/// Common imports for typical sortviz usage.
///
/// ```rust
/// use sortviz::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sortviz_core::{
        Action, ActionKind, ActionLog, AlgorithmKind, ArrayShape, Metrics, PlaybackState,
        SortAlgorithm, Value,
    };

    // Generators
    pub use sortviz_algos::{algorithm, generate, pseudocode, seeded_array, Catalog};

    // Rendering
    pub use sortviz_render::{render, Bar, Frame, Highlight, TextCanvas};

    // Engine
    pub use sortviz_engine::{
        ControlEvent, Controller, NullSink, Player, PlayerEvent, RenderSink, RunMetrics, Speed,
        Status, VisualizerConfig,
    };

    // Verification
    pub use sortviz_replay::{compare_logs, log_hash, verify_log};
}
