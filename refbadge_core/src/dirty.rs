// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! [`RowStore`](crate::row::RowStore) uses multi-channel dirty tracking (via
//! [`understory_dirty`]) to find the rows whose cached measurement is stale.
//! Both channels are local-only: rows do not depend on each other, so marking
//! one row never marks another.
//!
//! - [`DECORATIONS`] is marked when a row is bound to a different decoration
//!   list (or unbound, or created).
//! - [`STYLE`] is marked on every live row when the shared style changes.
//!
//! # Consumption
//!
//! Callers never query dirty state directly.
//! [`RowStore::measure_dirty`](crate::row::RowStore::measure_dirty) drains
//! both channels, re-measures the affected rows, and reports them as
//! [`RowChanges`](crate::row::RowChanges).

use understory_dirty::Channel;

/// Bound decoration list changed.
pub const DECORATIONS: Channel = Channel::new(0);

/// Shared style changed.
pub const STYLE: Channel = Channel::new(1);
