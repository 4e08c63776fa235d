// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge icons and their normalization.
//!
//! Icons arrive as vector paths in arbitrary source units, optionally carrying
//! a transform of their own. Before drawing, each badge takes a copy of its
//! icon and appends a normalization that moves the transformed bounds to the
//! origin and scales them uniformly to fit an [`ICON_EXTENT`]-sized box.
//!
//! The table itself ([`IconSet`]) always holds all four icons, so a lookup
//! can never miss. Tables built from external path data are validated when
//! they are built.

#[cfg(feature = "std")]
use core::fmt;

use kurbo::{Affine, BezPath, Circle, Rect, RoundedRect, Shape};

/// Side length of the box an icon is scaled to fit.
pub const ICON_EXTENT: f64 = 10.0;

/// Tolerance used when flattening built-in shapes into paths.
const BUILTIN_TOLERANCE: f64 = 0.1;

/// Which icon a badge shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// The current HEAD marker.
    Head,
    /// A remote-tracking branch.
    Remote,
    /// A tag.
    Tag,
    /// A local branch, and the fallback for everything else.
    Branch,
}

impl IconKind {
    /// All icon kinds, in table order.
    pub const ALL: [Self; 4] = [Self::Head, Self::Remote, Self::Tag, Self::Branch];

    /// Returns a short lowercase name, used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Remote => "remote",
            Self::Tag => "tag",
            Self::Branch => "branch",
        }
    }
}

/// A vector icon: path data plus the transform applied when drawing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Path in source units.
    pub path: BezPath,
    /// Transform applied to `path` at draw time.
    pub transform: Affine,
}

impl Icon {
    /// Creates an icon with an identity transform.
    #[must_use]
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            transform: Affine::IDENTITY,
        }
    }

    /// Creates an icon carrying a pre-existing transform.
    #[must_use]
    pub fn with_transform(path: BezPath, transform: Affine) -> Self {
        Self { path, transform }
    }

    /// Returns the bounding box of the path after its transform.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        if self.transform == Affine::IDENTITY {
            return self.path.bounding_box();
        }
        let mut path = self.path.clone();
        path.apply_affine(self.transform);
        path.bounding_box()
    }

    /// Returns a copy of this icon fitted to an [`ICON_EXTENT`] box at the
    /// origin.
    ///
    /// The existing transform is applied first and the normalization after,
    /// so the result draws the same shape the source did, only moved and
    /// scaled. `self` is left untouched.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let normalization = normalization(self.bounds());
        Self {
            path: self.path.clone(),
            transform: normalization * self.transform,
        }
    }
}

/// Returns the transform that moves `bounds` to the origin and scales it
/// uniformly by `min(10 / width, 10 / height)`.
///
/// Degenerate bounds (zero width and height) keep a scale of 1.
#[must_use]
pub fn normalization(bounds: Rect) -> Affine {
    let scale = (ICON_EXTENT / bounds.width()).min(ICON_EXTENT / bounds.height());
    let scale = if scale.is_finite() { scale } else { 1.0 };
    Affine::scale(scale) * Affine::translate(-bounds.origin().to_vec2())
}

/// The fixed icon table: one icon per [`IconKind`].
#[derive(Clone, Debug)]
pub struct IconSet {
    head: Icon,
    remote: Icon,
    tag: Icon,
    branch: Icon,
}

impl IconSet {
    /// Creates a table from four icons.
    ///
    /// # Panics
    ///
    /// Panics if any icon has an empty path. A missing asset is an
    /// integration fault and must surface before any row is measured.
    #[must_use]
    pub fn new(head: Icon, remote: Icon, tag: Icon, branch: Icon) -> Self {
        for (kind, icon) in IconKind::ALL.into_iter().zip([&head, &remote, &tag, &branch]) {
            assert!(
                !icon.path.elements().is_empty(),
                "icon asset `{}` has an empty path",
                kind.as_str()
            );
        }
        Self {
            head,
            remote,
            tag,
            branch,
        }
    }

    /// Returns the source icon for `kind`.
    #[inline]
    #[must_use]
    pub fn get(&self, kind: IconKind) -> &Icon {
        match kind {
            IconKind::Head => &self.head,
            IconKind::Remote => &self.remote,
            IconKind::Tag => &self.tag,
            IconKind::Branch => &self.branch,
        }
    }

    /// Builds a table from SVG path data, one string per icon.
    ///
    /// Every entry is parsed and checked before the table is returned.
    #[cfg(feature = "std")]
    pub fn from_svg(
        head: &str,
        remote: &str,
        tag: &str,
        branch: &str,
    ) -> Result<Self, IconSetError> {
        fn parse(kind: IconKind, data: &str) -> Result<Icon, IconSetError> {
            let path = BezPath::from_svg(data).map_err(|err| IconSetError {
                kind,
                reason: IconSetErrorReason::Parse(err),
            })?;
            if path.elements().is_empty() {
                return Err(IconSetError {
                    kind,
                    reason: IconSetErrorReason::EmptyPath,
                });
            }
            Ok(Icon::new(path))
        }

        Ok(Self {
            head: parse(IconKind::Head, head)?,
            remote: parse(IconKind::Remote, remote)?,
            tag: parse(IconKind::Tag, tag)?,
            branch: parse(IconKind::Branch, branch)?,
        })
    }

    /// Returns the built-in icon table.
    ///
    /// Shapes are drawn on a 16-unit grid; normalization rescales them, so
    /// the grid size has no effect on the drawn badge.
    #[must_use]
    pub fn builtin() -> Self {
        let head = Circle::new((8.0, 8.0), 7.0).to_path(BUILTIN_TOLERANCE);

        let mut remote = RoundedRect::new(0.0, 6.0, 16.0, 13.0, 3.5).to_path(BUILTIN_TOLERANCE);
        remote.extend(Circle::new((8.0, 6.0), 4.5).path_elements(BUILTIN_TOLERANCE));

        let mut tag = BezPath::new();
        tag.move_to((0.0, 2.0));
        tag.line_to((9.0, 2.0));
        tag.line_to((15.0, 8.0));
        tag.line_to((9.0, 14.0));
        tag.line_to((0.0, 14.0));
        tag.close_path();

        let mut branch = BezPath::new();
        branch.move_to((3.0, 1.0));
        branch.line_to((5.0, 1.0));
        branch.line_to((5.0, 8.0));
        branch.line_to((11.0, 4.0));
        branch.line_to((12.0, 5.5));
        branch.line_to((5.0, 10.5));
        branch.line_to((5.0, 15.0));
        branch.line_to((3.0, 15.0));
        branch.close_path();

        Self::new(
            Icon::new(head),
            Icon::new(remote),
            Icon::new(tag),
            Icon::new(branch),
        )
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Why an icon table could not be built by [`IconSet::from_svg`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IconSetError {
    /// The icon that failed.
    pub kind: IconKind,
    /// What went wrong.
    pub reason: IconSetErrorReason,
}

/// The cause of an [`IconSetError`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum IconSetErrorReason {
    /// The path data did not parse.
    Parse(kurbo::SvgParseError),
    /// The path data parsed but contains no elements.
    EmptyPath,
}

#[cfg(feature = "std")]
impl fmt::Display for IconSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            IconSetErrorReason::Parse(err) => {
                write!(f, "icon `{}`: invalid path data: {err}", self.kind.as_str())
            }
            IconSetErrorReason::EmptyPath => {
                write!(f, "icon `{}`: path is empty", self.kind.as_str())
            }
        }
    }
}

#[cfg(feature = "std")]
impl core::error::Error for IconSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_icon(x0: f64, y0: f64, x1: f64, y1: f64) -> Icon {
        Icon::new(Rect::new(x0, y0, x1, y1).to_path(BUILTIN_TOLERANCE))
    }

    fn assert_affine_eq(actual: Affine, expected: [f64; 6]) {
        let coeffs = actual.as_coeffs();
        for (a, e) in coeffs.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "got {coeffs:?}, expected {expected:?}");
        }
    }

    #[test]
    fn unit_box_normalizes_to_identity() {
        let icon = rect_icon(0.0, 0.0, 10.0, 10.0).normalized();
        assert_affine_eq(icon.transform, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn tall_box_scales_by_limiting_axis() {
        // 10x20 at (2, 2): scale 0.5, translate (-2, -2) before scaling.
        let icon = rect_icon(2.0, 2.0, 12.0, 22.0).normalized();
        assert_affine_eq(icon.transform, [0.5, 0.0, 0.0, 0.5, -1.0, -1.0]);

        let fitted = icon.bounds();
        assert!((fitted.x0 - 0.0).abs() < 1e-9);
        assert!((fitted.y0 - 0.0).abs() < 1e-9);
        assert!((fitted.width() - 5.0).abs() < 1e-9);
        assert!((fitted.height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn existing_transform_is_applied_first() {
        let source = Icon::with_transform(
            Rect::new(0.0, 0.0, 5.0, 5.0).to_path(BUILTIN_TOLERANCE),
            Affine::scale(2.0),
        );
        // Transformed bounds are already 0..10, so normalization is identity.
        let icon = source.normalized();
        assert_affine_eq(icon.transform, [2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

        let shifted = Icon::with_transform(
            Rect::new(0.0, 0.0, 10.0, 10.0).to_path(BUILTIN_TOLERANCE),
            Affine::translate((3.0, 4.0)),
        );
        assert_affine_eq(
            shifted.normalized().transform,
            [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        );
    }

    #[test]
    fn normalizing_copies_the_source() {
        let source = rect_icon(2.0, 2.0, 12.0, 22.0);
        let before = source.clone();
        let _ = source.normalized();
        assert_eq!(source, before);
    }

    #[test]
    fn degenerate_bounds_keep_unit_scale() {
        let t = normalization(Rect::new(4.0, 4.0, 4.0, 4.0));
        assert_affine_eq(t, [1.0, 0.0, 0.0, 1.0, -4.0, -4.0]);
    }

    #[test]
    fn builtin_icons_all_fit_after_normalization() {
        let set = IconSet::builtin();
        for kind in IconKind::ALL {
            let bounds = set.get(kind).normalized().bounds();
            assert!(bounds.x0.abs() < 1e-6, "{kind:?}: {bounds:?}");
            assert!(bounds.y0.abs() < 1e-6, "{kind:?}: {bounds:?}");
            assert!(bounds.width() <= ICON_EXTENT + 1e-6, "{kind:?}: {bounds:?}");
            assert!(bounds.height() <= ICON_EXTENT + 1e-6, "{kind:?}: {bounds:?}");
            assert!(
                (bounds.width().max(bounds.height()) - ICON_EXTENT).abs() < 1e-6,
                "{kind:?} should touch the box on its longer axis: {bounds:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "icon asset `tag` has an empty path")]
    fn empty_asset_is_rejected_at_construction() {
        let full = rect_icon(0.0, 0.0, 1.0, 1.0);
        let _ = IconSet::new(
            full.clone(),
            full.clone(),
            Icon::new(BezPath::new()),
            full,
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn from_svg_reports_the_failing_icon() {
        let ok = "M0 0 L10 0 L10 10 Z";
        let set = IconSet::from_svg(ok, ok, ok, ok).unwrap();
        assert_eq!(set.get(IconKind::Tag).bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));

        let err = IconSet::from_svg(ok, "M0 0 X 5", ok, ok).unwrap_err();
        assert_eq!(err.kind, IconKind::Remote);

        let err = IconSet::from_svg(ok, ok, ok, "").unwrap_err();
        assert_eq!(err.kind, IconKind::Branch);
        assert!(matches!(err.reason, IconSetErrorReason::EmptyPath));
        assert_eq!(std::format!("{err}"), "icon `branch`: path is empty");
    }
}
