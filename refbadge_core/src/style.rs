// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style parameters shared by every badge row.

use alloc::string::String;

use peniko::Color;

/// Font weight used for badge labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight, used by ordinary badges.
    #[default]
    Regular,
    /// Bold weight, used by head badges.
    Bold,
}

/// A resolved font: family, weight, and size in points.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font family name, passed through to the text measurer untouched.
    pub family: String,
    /// Font weight.
    pub weight: FontWeight,
    /// Font size in points.
    pub size: f64,
}

/// Externally owned style parameters.
///
/// Changing any field invalidates every measured row (see
/// [`RowStore::set_style`](crate::row::RowStore::set_style)).
#[derive(Clone, Debug)]
pub struct BadgeStyle {
    /// Font family for labels.
    pub font_family: String,
    /// Base label font size in points. Head badges use one point more.
    pub font_size: f64,
    /// Label text and icon color.
    pub foreground: Color,
    /// Fill color for tag badges.
    pub tag_background: Color,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 12.0,
            foreground: Color::WHITE,
            tag_background: Color::WHITE,
        }
    }
}

impl BadgeStyle {
    /// Returns the label font for a badge.
    ///
    /// Head badges are bold at `font_size + 1`; all others are regular at
    /// `font_size`.
    #[must_use]
    pub fn label_font(&self, is_head: bool) -> FontSpec {
        if is_head {
            FontSpec {
                family: self.font_family.clone(),
                weight: FontWeight::Bold,
                size: self.font_size + 1.0,
            }
        } else {
            FontSpec {
                family: self.font_family.clone(),
                weight: FontWeight::Regular,
                size: self.font_size,
            }
        }
    }

    /// Returns `true` if switching from `self` to `other` requires
    /// re-measurement.
    #[must_use]
    pub fn differs_from(&self, other: &Self) -> bool {
        self.font_family != other.font_family
            || self.font_size != other.font_size
            || self.foreground.components != other.foreground.components
            || self.tag_background.components != other.tag_background.components
    }
}
