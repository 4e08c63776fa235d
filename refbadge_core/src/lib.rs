// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration model, badge measurement, and row invalidation for commit
//! reference badges.
//!
//! `refbadge_core` turns the ordered reference decorations of a commit
//! (branch heads, remote branch heads, tags, and the HEAD marker) into a row of
//! fully resolved badge items that a renderer can draw without any further
//! measurement. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! Rows move through a two-phase pipeline driven by the host's layout/paint
//! cycle:
//!
//! ```text
//!   Decoration source          Style change
//!       │ RowStore::bind()         │ RowStore::set_style()
//!       ▼                          ▼
//!   DECORATIONS channel       STYLE channel
//!       └────────────┬─────────────┘
//!                    ▼
//!   RowStore::measure_dirty() ──► layout::measure() ──► MeasuredRow
//!                    │                                      │
//!                    ▼                                      ▼
//!               RowChanges                     refbadge_render::paint()
//! ```
//!
//! **[`decoration`]**: Decoration descriptors and the git ref-list parser.
//!
//! **[`style`]**: Font and color parameters shared by every row.
//!
//! **[`text`]**: The [`TextMeasurer`](text::TextMeasurer) primitive and
//! shaped label runs.
//!
//! **[`icon`]**: Icon table and the 10×10 icon normalization.
//!
//! **[`layout`]**: The measurement pass producing cached badge items.
//!
//! **[`row`]**: Multi-row store with generational handles and dirty
//! tracking via `understory_dirty`.
//!
//! **[`dirty`]**: Dirty-tracking channel constants.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pipeline instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   [`IconSet::from_svg`](icon::IconSet::from_svg).
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod decoration;
pub mod dirty;
pub mod icon;
pub mod layout;
pub mod row;
pub mod style;
pub mod text;
pub mod trace;
