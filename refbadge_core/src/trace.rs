// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the measure/paint pipeline.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! pipeline calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use kurbo::Size;

use crate::row::MeasureCause;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a single row has been re-measured.
#[derive(Clone, Copy, Debug)]
pub struct RowMeasuredEvent {
    /// Slot index of the row.
    pub row: u32,
    /// Which channels caused the re-measurement.
    pub cause: MeasureCause,
    /// Number of badges in the new measurement.
    pub badges: usize,
    /// Size before re-measurement.
    pub old_size: Size,
    /// Size after re-measurement.
    pub new_size: Size,
}

/// Emitted at the end of a [`RowStore::measure_dirty`] pass.
///
/// [`RowStore::measure_dirty`]: crate::row::RowStore::measure_dirty
#[derive(Clone, Copy, Debug)]
pub struct MeasurePassEvent {
    /// Rows re-measured during the pass.
    pub remeasured: usize,
    /// Rows whose size changed.
    pub resized: usize,
}

/// Emitted after a row has been painted.
#[derive(Clone, Copy, Debug)]
pub struct PaintEvent {
    /// Number of badges painted.
    pub badges: usize,
    /// Horizontal extent covered by the painted badges.
    pub width: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after each row is re-measured.
    fn on_row_measured(&mut self, e: &RowMeasuredEvent) {
        _ = e;
    }

    /// Called at the end of each measurement pass.
    fn on_measure_pass(&mut self, e: &MeasurePassEvent) {
        _ = e;
    }

    /// Called after each row is painted.
    fn on_paint(&mut self, e: &PaintEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RowMeasuredEvent`].
    #[inline]
    pub fn row_measured(&mut self, e: &RowMeasuredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_row_measured(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MeasurePassEvent`].
    #[inline]
    pub fn measure_pass(&mut self, e: &MeasurePassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_measure_pass(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PaintEvent`].
    #[inline]
    pub fn paint(&mut self, e: &PaintEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_paint(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_measured() -> RowMeasuredEvent {
        RowMeasuredEvent {
            row: 3,
            cause: MeasureCause {
                decorations: true,
                style: false,
            },
            badges: 2,
            old_size: Size::ZERO,
            new_size: Size::new(109.0, 16.0),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_row_measured(&sample_measured());
        sink.on_measure_pass(&MeasurePassEvent {
            remeasured: 1,
            resized: 1,
        });
        sink.on_paint(&PaintEvent {
            badges: 2,
            width: 107.0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.row_measured(&sample_measured());
        tracer.paint(&PaintEvent {
            badges: 0,
            width: 0.0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            rows: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_row_measured(&mut self, e: &RowMeasuredEvent) {
                self.rows.push(e.row);
            }
        }

        let mut sink = RecordingSink { rows: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.row_measured(&sample_measured());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.rows, &[3]);
    }
}
