// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference decorations attached to a commit.
//!
//! A [`Decoration`] is one named reference (branch, remote branch, tag, or the
//! HEAD marker) as reported by the decoration source. Decorations are
//! immutable once produced; the layout pass only reads them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::Color;

use crate::icon::IconKind;

/// The category of a reference decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// `HEAD` pointing at a checked-out branch.
    CurrentBranchHead,
    /// Detached `HEAD` pointing directly at the commit.
    CurrentCommitHead,
    /// A remote-tracking branch.
    RemoteBranchHead,
    /// A tag.
    Tag,
    /// A local branch, or any reference that fits no other category.
    OtherBranch,
}

impl DecorationKind {
    /// Returns `true` for the kinds that mark the current checkout position.
    #[inline]
    #[must_use]
    pub const fn is_head(self) -> bool {
        matches!(self, Self::CurrentBranchHead | Self::CurrentCommitHead)
    }

    /// Returns the icon drawn for this kind.
    #[inline]
    #[must_use]
    pub const fn icon_kind(self) -> IconKind {
        match self {
            Self::CurrentBranchHead | Self::CurrentCommitHead => IconKind::Head,
            Self::RemoteBranchHead => IconKind::Remote,
            Self::Tag => IconKind::Tag,
            _ => IconKind::Branch,
        }
    }
}

/// A single reference decoration: kind, display name, and badge color.
#[derive(Clone, Debug)]
pub struct Decoration {
    /// What kind of reference this is.
    pub kind: DecorationKind,
    /// Display name (never empty).
    pub name: String,
    /// Badge color associated with the commit. Tags ignore it in favor of
    /// the style's tag background.
    pub color: Color,
}

impl Decoration {
    /// Creates a decoration.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(kind: DecorationKind, name: impl Into<String>, color: Color) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "decoration name must not be empty");
        Self { kind, name, color }
    }

    /// Returns `true` if this decoration marks the current checkout position.
    #[inline]
    #[must_use]
    pub fn is_head(&self) -> bool {
        self.kind.is_head()
    }
}

/// Parses a git decoration list into [`Decoration`]s.
///
/// Accepts the comma-separated output of `git log --format=%D
/// --decorate=full` (for example `HEAD -> refs/heads/main, tag: refs/tags/v1,
/// refs/remotes/origin/main`). Short decorations (`HEAD -> main`, `tag: v1`)
/// are accepted as well. Symbolic remote heads (`refs/remotes/origin/HEAD`,
/// or `origin/HEAD` in short form) are skipped, and references outside the
/// known namespaces become [`DecorationKind::OtherBranch`] carrying their full
/// name.
///
/// Input order is preserved; every decoration gets `color`.
#[must_use]
pub fn parse_decorations(refs: &str, color: Color) -> Vec<Decoration> {
    let mut out = Vec::new();
    for entry in refs.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (kind, name) = if let Some(rest) = entry.strip_prefix("tag: ") {
            let name = rest.strip_prefix("refs/tags/").unwrap_or(rest);
            (DecorationKind::Tag, name)
        } else if let Some(rest) = entry.strip_prefix("HEAD -> ") {
            let name = rest.strip_prefix("refs/heads/").unwrap_or(rest);
            (DecorationKind::CurrentBranchHead, name)
        } else if entry == "HEAD" {
            (DecorationKind::CurrentCommitHead, entry)
        } else if let Some(name) = entry.strip_prefix("refs/heads/") {
            (DecorationKind::OtherBranch, name)
        } else if let Some(name) = entry.strip_prefix("refs/remotes/") {
            if is_remote_head(name) {
                continue;
            }
            (DecorationKind::RemoteBranchHead, name)
        } else if is_remote_head(entry) {
            continue;
        } else {
            (DecorationKind::OtherBranch, entry)
        };

        if name.is_empty() {
            continue;
        }
        out.push(Decoration {
            kind,
            name: name.to_string(),
            color,
        });
    }
    out
}

/// Matches `<remote>/HEAD`, the symbolic default branch of a remote.
fn is_remote_head(name: &str) -> bool {
    name.strip_suffix("/HEAD")
        .is_some_and(|remote| !remote.is_empty() && !remote.contains('/'))
}
