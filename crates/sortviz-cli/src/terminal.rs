//! A [`RenderSink`] that draws the visualizer as text.

use std::io::{self, Write};

use sortviz_core::AlgorithmKind;
use sortviz_engine::{RenderSink, RunMetrics, Status};
use sortviz_render::{Frame, TextCanvas};
use tracing::warn;

/// ANSI clear-screen and cursor-home.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Draws each published state to `out`.
///
/// The controller publishes frame, metrics and status in that order, so
/// the sink buffers the first two and redraws when the status arrives.
/// In clearing mode a pseudocode change also redraws, with the last status.
pub struct TerminalSink<W: Write> {
    out: W,
    canvas: TextCanvas,
    clear: bool,
    bars: Vec<String>,
    metrics: RunMetrics,
    status: Option<Status>,
    code: String,
}

impl<W: Write> TerminalSink<W> {
    /// A sink drawing bars `canvas.rows()` cells tall.
    pub fn new(out: W, canvas: TextCanvas) -> Self {
        Self {
            out,
            canvas,
            clear: false,
            bars: Vec::new(),
            metrics: RunMetrics::default(),
            status: None,
            code: String::new(),
        }
    }

    /// Clear the screen before every redraw.
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Take the output stream back.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self, status: Status) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR.as_bytes())?;
        }
        for line in &self.bars {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{}", self.metrics)?;
        writeln!(self.out, "status: {status}")?;
        if self.clear && !self.code.is_empty() {
            writeln!(self.out)?;
            self.out.write_all(self.code.as_bytes())?;
        }
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, frame: &Frame) {
        self.bars = self.canvas.draw(frame);
    }

    fn metrics(&mut self, metrics: &RunMetrics) {
        self.metrics = *metrics;
    }

    fn status(&mut self, status: Status) {
        self.status = Some(status);
        if let Err(e) = self.redraw(status) {
            warn!(error = %e, "terminal write failed");
        }
    }

    fn code(&mut self, algorithm: AlgorithmKind, pseudocode: &str) {
        self.code = format!("── {algorithm} ──\n{pseudocode}\n");
        let written = match (self.clear, self.status) {
            (false, _) => self.out.write_all(self.code.as_bytes()),
            (true, Some(status)) => self.redraw(status),
            // Nothing drawn yet; the first status draws the panel.
            (true, None) => Ok(()),
        };
        if let Err(e) = written {
            warn!(error = %e, "terminal write failed");
        }
    }
}
