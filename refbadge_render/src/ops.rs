// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operations issued against a drawing surface.
//!
//! The paint pass speaks a small vocabulary: scoped state changes
//! ([`StateOp`]) and draw calls ([`DrawOp`]). Hosts implement [`Surface`] to
//! translate them into their toolkit's drawing context.

use kurbo::{Affine, BezPath, Line, Point, RoundedRect};
use peniko::Color;
use refbadge_core::text::LabelRun;

/// A scoped change to the surface state.
///
/// Every push is matched by exactly one [`Pop`](Self::Pop), and scopes nest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateOp {
    /// Multiplies the opacity of subsequent draws by the given factor.
    PushOpacity(f32),
    /// Prepends a transform to subsequent draws.
    PushTransform(Affine),
    /// Restores the state saved by the matching push.
    Pop,
}

/// A single draw call.
///
/// Geometry is in row-local coordinates, with the row's top-left at the
/// origin, before any pushed transform.
#[derive(Clone, Copy, Debug)]
pub enum DrawOp<'a> {
    /// Fills a rounded rectangle.
    FillRoundedRect {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// Strokes the outline of a rounded rectangle.
    StrokeRoundedRect {
        /// Shape to outline.
        shape: RoundedRect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// Strokes a straight line.
    Line {
        /// Line to stroke.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// Draws a shaped label with its top-left corner at `origin`.
    Text {
        /// The label, including its font and color.
        run: &'a LabelRun,
        /// Top-left corner of the label's line box.
        origin: Point,
    },
    /// Fills a path after applying `transform`.
    FillPath {
        /// Path to fill.
        path: &'a BezPath,
        /// The path's own transform, applied before any pushed transform.
        transform: Affine,
        /// Fill color.
        color: Color,
    },
}

/// A drawing surface provided by the host.
///
/// The paint pass calls [`state`](Self::state) and [`draw`](Self::draw) in
/// z-order; later draws cover earlier ones.
pub trait Surface {
    /// Applies a state change.
    fn state(&mut self, op: StateOp);

    /// Issues a draw call under the current state.
    fn draw(&mut self, op: DrawOp<'_>);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn state(&mut self, op: StateOp) {
        (**self).state(op);
    }

    fn draw(&mut self, op: DrawOp<'_>) {
        (**self).draw(op);
    }
}
