// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement pass.
//!
//! [`measure`] turns an ordered decoration list into a [`MeasuredRow`]: one
//! fully resolved [`BadgeItem`] per decoration, in input order, plus the size
//! the row occupies. Everything the painter needs (label extent, icon
//! transform, fill color, badge width) is computed here, so painting never
//! measures.
//!
//! Badges are packed left to right:
//!
//! ```text
//!  ┌ inset (1)
//!  │┌──────┬───┬─────────────┬───┐    ┌──────┬────────────┬───┐
//!  ││ icon │gap│    label    │pad│ 4  │ icon │   label    │pad│ 4 ┐
//!  ││  16  │ 4 │ label_width │ 4 │    │  16  │label_width │ 4 │   │ inset (1)
//!  │└──────┴───┴─────────────┴───┘    └──────┴────────────┴───┘   │
//!      ordinary badge                    head badge (no gap)
//! ```
//!
//! The trailing 4px gap after the last badge and the 2px row inset are part of
//! the measured width.

use alloc::vec::Vec;

use kurbo::Size;
use peniko::Color;

use crate::decoration::{Decoration, DecorationKind};
use crate::icon::{Icon, IconSet};
use crate::style::BadgeStyle;
use crate::text::{LabelRun, TextMeasurer};

/// Height of a badge row.
pub const ROW_HEIGHT: f64 = 16.0;

/// Width of the icon box at the start of every badge.
pub const ICON_BOX_WIDTH: f64 = 16.0;

/// Gap between the icon box and the label box of an ordinary badge.
pub const DIVIDER_GAP: f64 = 4.0;

/// Padding after the label.
pub const LABEL_PAD: f64 = 4.0;

/// Gap after every badge, including the last one.
pub const BADGE_GAP: f64 = 4.0;

/// Horizontal inset added once per row.
pub const ROW_INSET: f64 = 2.0;

/// A badge with all geometry resolved.
#[derive(Clone, Debug)]
pub struct BadgeItem {
    /// Whether this badge marks the current checkout position.
    pub is_head: bool,
    /// The shaped label.
    pub label: LabelRun,
    /// Normalized icon (fits a 10×10 box at the origin).
    pub icon: Icon,
    /// Badge fill and stroke color.
    pub fill: Color,
    /// Total badge width, excluding the gap that follows it.
    pub width: f64,
}

impl BadgeItem {
    /// Computes the width of a badge from its label width.
    #[inline]
    #[must_use]
    pub fn width_for(is_head: bool, label_width: f64) -> f64 {
        let gap = if is_head { 0.0 } else { DIVIDER_GAP };
        ICON_BOX_WIDTH + gap + label_width + LABEL_PAD
    }
}

/// The cached output of one measurement: badge items in decoration order and
/// the size of the whole row.
///
/// Rows are never patched; each measurement produces a new one.
#[derive(Clone, Debug)]
pub struct MeasuredRow {
    /// Badge items, one per decoration, in input order.
    pub items: Vec<BadgeItem>,
    /// Size required by the row.
    pub size: Size,
    /// Color the icons are filled with.
    pub foreground: Color,
}

impl MeasuredRow {
    /// Returns an empty row of zero size.
    #[must_use]
    pub fn empty(foreground: Color) -> Self {
        Self {
            items: Vec::new(),
            size: Size::ZERO,
            foreground,
        }
    }

    /// Returns `true` if the row has no badges.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Measures a row of badges.
///
/// An empty decoration list yields an empty row of size `(0, 0)`. Otherwise
/// the row is `2 + Σ(width + 4)` wide and [`ROW_HEIGHT`] tall.
#[must_use]
pub fn measure<M: TextMeasurer + ?Sized>(
    decorations: &[Decoration],
    style: &BadgeStyle,
    icons: &IconSet,
    text: &M,
) -> MeasuredRow {
    if decorations.is_empty() {
        return MeasuredRow::empty(style.foreground);
    }

    let mut items = Vec::with_capacity(decorations.len());
    let mut required_width = 0.0;
    for decoration in decorations {
        let is_head = decoration.is_head();
        let label = LabelRun::shape(
            text,
            &decoration.name,
            style.label_font(is_head),
            style.foreground,
        );
        let icon = icons.get(decoration.kind.icon_kind()).normalized();
        let fill = match decoration.kind {
            DecorationKind::Tag => style.tag_background,
            _ => decoration.color,
        };
        let width = BadgeItem::width_for(is_head, label.width());

        required_width += width + BADGE_GAP;
        items.push(BadgeItem {
            is_head,
            label,
            icon,
            fill,
            width,
        });
    }

    MeasuredRow {
        items,
        size: Size::new(required_width + ROW_INSET, ROW_HEIGHT),
        foreground: style.foreground,
    }
}
