//! Test utilities and mock types for sortviz development.
//!
//! Provides [`RecordingSink`], a [`RenderSink`] that keeps every call for
//! later assertions, and the fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use sortviz_core::AlgorithmKind;
use sortviz_engine::{RenderSink, RunMetrics, Status};
use sortviz_render::Frame;

/// Records every callback in order.
///
/// Each field holds the calls of one callback, oldest first.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
    pub metrics: Vec<RunMetrics>,
    pub statuses: Vec<Status>,
    pub code: Vec<(AlgorithmKind, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The most recent metrics.
    pub fn last_metrics(&self) -> Option<&RunMetrics> {
        self.metrics.last()
    }

    /// The most recent status.
    pub fn last_status(&self) -> Option<Status> {
        self.statuses.last().copied()
    }

    /// Status texts in order, as a host would have shown them.
    pub fn status_texts(&self) -> Vec<String> {
        self.statuses.iter().map(Status::to_string).collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.metrics.clear();
        self.statuses.clear();
        self.code.clear();
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn metrics(&mut self, metrics: &RunMetrics) {
        self.metrics.push(*metrics);
    }

    fn status(&mut self, status: Status) {
        self.statuses.push(status);
    }

    fn code(&mut self, algorithm: AlgorithmKind, pseudocode: &str) {
        self.code.push((algorithm, pseudocode.to_string()));
    }
}
