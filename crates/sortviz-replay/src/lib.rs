//! Replay and verification of recorded action logs.
//!
//! An [`ActionLog`](sortviz_core::ActionLog) carries a full array snapshot
//! on every mutation, so any intermediate state can be reconstructed and
//! checked without re-running the sort.
//!
//! # Architecture
//!
//! - [`replay()`] walks the states a log passes through
//! - [`verify_log()`] checks a log against the input it was recorded from
//! - [`log_hash()`] fingerprints a log with FNV-1a
//! - [`compare_logs()`] finds the first divergence between two logs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod replay;
pub mod verify;

pub use compare::{compare_logs, Divergence, DivergenceKind};
pub use error::ReplayError;
pub use hash::{log_hash, values_hash};
pub use replay::{final_state, replay, Replay, ReplayStep};
pub use verify::{verify_log, LogReport};
