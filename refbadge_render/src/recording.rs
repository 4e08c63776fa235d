// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording surface: an ordered list of owned draw operations.
//!
//! [`DrawList`] implements [`Surface`] by storing every operation it receives.
//! Hosts can record a row once and [`replay`](DrawList::replay) it onto their
//! real surface later, and tests can inspect exactly what a paint pass
//! issued.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Line, Point, RoundedRect};
use peniko::Color;
use refbadge_core::text::LabelRun;

use crate::ops::{DrawOp, StateOp, Surface};

/// An owned copy of a [`StateOp`] or [`DrawOp`].
#[derive(Clone, Debug)]
pub enum RecordedOp {
    /// A state change.
    State(StateOp),
    /// See [`DrawOp::FillRoundedRect`].
    FillRoundedRect {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// See [`DrawOp::StrokeRoundedRect`].
    StrokeRoundedRect {
        /// Shape to outline.
        shape: RoundedRect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// See [`DrawOp::Line`].
    Line {
        /// Line to stroke.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// See [`DrawOp::Text`].
    Text {
        /// The label.
        run: LabelRun,
        /// Top-left corner of the label's line box.
        origin: Point,
    },
    /// See [`DrawOp::FillPath`].
    FillPath {
        /// Path to fill.
        path: BezPath,
        /// The path's own transform.
        transform: Affine,
        /// Fill color.
        color: Color,
    },
}

impl RecordedOp {
    fn record(op: DrawOp<'_>) -> Self {
        match op {
            DrawOp::FillRoundedRect { shape, color } => Self::FillRoundedRect { shape, color },
            DrawOp::StrokeRoundedRect {
                shape,
                color,
                width,
            } => Self::StrokeRoundedRect {
                shape,
                color,
                width,
            },
            DrawOp::Line { line, color, width } => Self::Line { line, color, width },
            DrawOp::Text { run, origin } => Self::Text {
                run: run.clone(),
                origin,
            },
            DrawOp::FillPath {
                path,
                transform,
                color,
            } => Self::FillPath {
                path: path.clone(),
                transform,
                color,
            },
        }
    }

    fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::State(op) => surface.state(*op),
            Self::FillRoundedRect { shape, color } => surface.draw(DrawOp::FillRoundedRect {
                shape: *shape,
                color: *color,
            }),
            Self::StrokeRoundedRect {
                shape,
                color,
                width,
            } => surface.draw(DrawOp::StrokeRoundedRect {
                shape: *shape,
                color: *color,
                width: *width,
            }),
            Self::Line { line, color, width } => surface.draw(DrawOp::Line {
                line: *line,
                color: *color,
                width: *width,
            }),
            Self::Text { run, origin } => surface.draw(DrawOp::Text {
                run,
                origin: *origin,
            }),
            Self::FillPath {
                path,
                transform,
                color,
            } => surface.draw(DrawOp::FillPath {
                path,
                transform: *transform,
                color: *color,
            }),
        }
    }
}

/// A [`Surface`] that records operations in the order they are issued.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<RecordedOp>,
    depth: usize,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, in issue order.
    #[must_use]
    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    /// Number of recorded operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns `true` if every push has been matched by a pop.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    /// Clears the list for reuse.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.depth = 0;
    }

    /// Issues every recorded operation onto `surface`, in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for op in &self.ops {
            op.replay(surface);
        }
    }
}

impl Surface for DrawList {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::PushOpacity(_) | StateOp::PushTransform(_) => self.depth += 1,
            StateOp::Pop => {
                assert!(self.depth > 0, "StateOp::Pop without a matching push");
                self.depth -= 1;
            }
        }
        self.ops.push(RecordedOp::State(op));
    }

    fn draw(&mut self, op: DrawOp<'_>) {
        self.ops.push(RecordedOp::record(op));
    }
}
