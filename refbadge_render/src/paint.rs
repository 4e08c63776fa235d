// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint pass.
//!
//! [`paint`] walks a [`MeasuredRow`] and issues surface operations for each
//! badge. It never measures: every width, label extent and icon transform
//! comes from the row.
//!
//! Per badge, in z-order:
//!
//! ```text
//!   head badge                      ordinary badge
//!   ──────────                      ──────────────
//!   1. fill outline   (60%)         1. fill label box (20%, right corners)
//!   2. label at x+16                2. divider at x+16
//!                                   3. label at x+20
//!   3. stroke outline               4. stroke outline
//!   4. icon at (x+3, 3)             5. icon at (x+3, 3)
//! ```

use kurbo::{Affine, Line, Point, Rect, RoundedRect, RoundedRectRadii};
use refbadge_core::layout::{
    BADGE_GAP, BadgeItem, DIVIDER_GAP, ICON_BOX_WIDTH, LABEL_PAD, MeasuredRow, ROW_HEIGHT,
};
use refbadge_core::trace::{PaintEvent, Tracer};

use crate::ops::{DrawOp, StateOp, Surface};

/// Opacity of the full-badge fill behind a head badge.
pub const HEAD_FILL_OPACITY: f32 = 0.6;

/// Opacity of the label-box fill of an ordinary badge.
pub const LABEL_FILL_OPACITY: f32 = 0.2;

/// Width of badge outlines and dividers.
pub const STROKE_WIDTH: f64 = 1.0;

/// Corner radius of badge outlines.
const CORNER_RADIUS: f64 = 2.0;

/// Offset of the icon inside the icon box, on both axes.
const ICON_OFFSET: f64 = 3.0;

/// X coordinate of the first badge.
const FIRST_BADGE_X: f64 = 1.0;

/// Paints a measured row onto `surface`.
///
/// An empty row issues no operations.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, row: &MeasuredRow) {
    paint_traced(surface, row, &mut Tracer::none());
}

/// Like [`paint`], reporting a [`PaintEvent`] to `tracer` once the row is
/// done.
pub fn paint_traced<S: Surface + ?Sized>(
    surface: &mut S,
    row: &MeasuredRow,
    tracer: &mut Tracer<'_>,
) {
    if row.is_empty() {
        return;
    }

    let mut x = FIRST_BADGE_X;
    for item in &row.items {
        paint_badge(surface, item, x, row);
        x += item.width + BADGE_GAP;
    }

    tracer.paint(&PaintEvent {
        badges: row.items.len(),
        width: x - FIRST_BADGE_X,
    });
}

fn paint_badge<S: Surface + ?Sized>(
    surface: &mut S,
    item: &BadgeItem,
    x: f64,
    row: &MeasuredRow,
) {
    let outline = RoundedRect::from_rect(
        Rect::new(x, 0.0, x + item.width, ROW_HEIGHT),
        CORNER_RADIUS,
    );
    let label_y = ROW_HEIGHT * 0.5 - item.label.height() * 0.5;
    let label_box_x = x + ICON_BOX_WIDTH;

    if item.is_head {
        surface.state(StateOp::PushOpacity(HEAD_FILL_OPACITY));
        surface.draw(DrawOp::FillRoundedRect {
            shape: outline,
            color: item.fill,
        });
        surface.state(StateOp::Pop);

        surface.draw(DrawOp::Text {
            run: &item.label,
            origin: Point::new(label_box_x, label_y),
        });
    } else {
        let label_box = RoundedRect::from_rect(
            Rect::new(
                label_box_x,
                0.0,
                label_box_x + DIVIDER_GAP + item.label.width() + LABEL_PAD,
                ROW_HEIGHT,
            ),
            RoundedRectRadii::new(0.0, CORNER_RADIUS, CORNER_RADIUS, 0.0),
        );
        surface.state(StateOp::PushOpacity(LABEL_FILL_OPACITY));
        surface.draw(DrawOp::FillRoundedRect {
            shape: label_box,
            color: item.fill,
        });
        surface.state(StateOp::Pop);

        surface.draw(DrawOp::Line {
            line: Line::new((label_box_x, 0.0), (label_box_x, ROW_HEIGHT)),
            color: item.fill,
            width: STROKE_WIDTH,
        });

        surface.draw(DrawOp::Text {
            run: &item.label,
            origin: Point::new(label_box_x + DIVIDER_GAP, label_y),
        });
    }

    surface.draw(DrawOp::StrokeRoundedRect {
        shape: outline,
        color: item.fill,
        width: STROKE_WIDTH,
    });

    surface.state(StateOp::PushTransform(Affine::translate((
        x + ICON_OFFSET,
        ICON_OFFSET,
    ))));
    surface.draw(DrawOp::FillPath {
        path: &item.icon.path,
        transform: item.icon.transform,
        color: row.foreground,
    });
    surface.state(StateOp::Pop);
}
