// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for badge labels.
//!
//! Shaping stays with the host: the layout pass only needs the advance width
//! and line height of a label, which it gets through [`TextMeasurer`]. Hosts
//! plug in their real text stack; [`HeuristicTextMeasurer`] is a stand-in for
//! demos and headless use.

use alloc::string::String;

use kurbo::Size;
use peniko::Color;

use crate::style::{FontSpec, FontWeight};

/// Measures a run of text in a given font.
pub trait TextMeasurer {
    /// Returns the `(width, height)` of `text` laid out on a single line.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        (**self).measure(text, font)
    }
}

/// A heuristic measurer suitable for demos and early layout.
///
/// Assumes an average glyph advance of 0.6em (0.65em when bold) and a line
/// height of 1.2em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let advance = match font.weight {
            FontWeight::Regular => 0.6,
            FontWeight::Bold => 0.65,
        };
        let glyphs = text.chars().count() as f64;
        Size::new(advance * font.size * glyphs, 1.2 * font.size)
    }
}

/// A measured label: the text, the font it was measured in, its color, and
/// its single-line extent.
#[derive(Clone, Debug)]
pub struct LabelRun {
    /// The label text.
    pub text: String,
    /// Font used for measurement and drawing.
    pub font: FontSpec,
    /// Text color.
    pub color: Color,
    /// Measured extent.
    pub size: Size,
}

impl LabelRun {
    /// Measures `text` in `font` and returns the resulting run.
    #[must_use]
    pub fn shape<M: TextMeasurer + ?Sized>(
        measurer: &M,
        text: &str,
        font: FontSpec,
        color: Color,
    ) -> Self {
        let size = measurer.measure(text, &font);
        Self {
            text: String::from(text),
            font,
            color,
            size,
        }
    }

    /// Measured advance width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Measured line height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }
}
