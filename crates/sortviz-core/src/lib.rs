//! Core types and traits for the sortviz sorting visualizer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the sortviz workspace:
//! recorded actions and their logs, metric counters, algorithm and
//! array-shape identifiers, playback states, error types, and the
//! [`SortAlgorithm`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod kind;
pub mod metrics;
pub mod state;
pub mod traits;

pub use action::{Action, ActionKind, ActionLog, Indices, LogEntry, Snapshot, Value};
pub use error::ParseError;
pub use kind::{AlgorithmKind, ArrayShape};
pub use metrics::Metrics;
pub use state::PlaybackState;
pub use traits::SortAlgorithm;
