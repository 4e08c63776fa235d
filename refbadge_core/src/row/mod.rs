// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge rows for a history view.
//!
//! A history view shows one badge row per visible commit. [`RowStore`] keeps
//! every row's bound decoration list and its cached [`MeasuredRow`], all
//! measured with one shared [`BadgeStyle`] and [`IconSet`].
//!
//! Each row has:
//!
//! - An identity ([`RowId`]): a generational handle that becomes stale when
//!   the row is destroyed.
//! - A **binding** set by the caller with [`bind`](RowStore::bind) or
//!   [`unbind`](RowStore::unbind): the decorations of the commit the row
//!   currently shows.
//! - A **measurement** produced by
//!   [`measure_dirty`](RowStore::measure_dirty) and read by the painter.
//!
//! # Dirty tracking
//!
//! Mutations mark the corresponding channel (see [`dirty`](crate::dirty)).
//! Rebinding a row marks only that row; changing the style marks all of them.
//! Measurement replaces a row's cached [`MeasuredRow`] wholesale.
//!
//! [`MeasuredRow`]: crate::layout::MeasuredRow
//! [`BadgeStyle`]: crate::style::BadgeStyle
//! [`IconSet`]: crate::icon::IconSet

mod changes;
mod id;
mod store;

pub use changes::{MeasureCause, RowChanges};
pub use id::RowId;
pub use store::RowStore;
