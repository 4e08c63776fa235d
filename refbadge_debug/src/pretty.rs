// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Size;
use refbadge_core::row::MeasureCause;
use refbadge_core::trace::{MeasurePassEvent, PaintEvent, RowMeasuredEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn cause_name(cause: MeasureCause) -> &'static str {
    match (cause.decorations, cause.style) {
        (true, true) => "decorations+style",
        (true, false) => "decorations",
        (false, true) => "style",
        (false, false) => "-",
    }
}

fn size(s: Size) -> String {
    format!("{:.1}x{:.1}", s.width, s.height)
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_row_measured(&mut self, e: &RowMeasuredEvent) {
        let resized = if e.old_size == e.new_size { "" } else { " RESIZED" };
        let _ = writeln!(
            self.writer,
            "[measure] row={} cause={} badges={} size={} -> {}{resized}",
            e.row,
            cause_name(e.cause),
            e.badges,
            size(e.old_size),
            size(e.new_size),
        );
    }

    fn on_measure_pass(&mut self, e: &MeasurePassEvent) {
        let _ = writeln!(
            self.writer,
            "[pass] remeasured={} resized={}",
            e.remeasured, e.resized,
        );
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        let _ = writeln!(
            self.writer,
            "[paint] badges={} width={:.1}",
            e.badges, e.width,
        );
    }
}
