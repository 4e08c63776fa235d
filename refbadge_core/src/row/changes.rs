// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement results reported to the host.
//!
//! [`RowChanges`] uses raw slot indices (`u32`) rather than [`RowId`]
//! handles so hosts can read rows back through
//! [`measured_at`](super::RowStore::measured_at) without generation checks.
//!
//! [`RowId`]: super::RowId

use alloc::vec::Vec;

/// Why a row was re-measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeasureCause {
    /// The row was bound to a different decoration list.
    pub decorations: bool,
    /// The shared style changed.
    pub style: bool,
}

/// The set of rows touched by a single
/// [`RowStore::measure_dirty`](super::RowStore::measure_dirty) call.
#[derive(Clone, Debug, Default)]
pub struct RowChanges {
    /// Every row that was re-measured, in ascending slot order.
    pub remeasured: Vec<u32>,
    /// The subset of `remeasured` whose size changed; the host must lay these
    /// out again. The rest only need a repaint.
    pub resized: Vec<u32>,
}

impl RowChanges {
    /// Clears both lists.
    pub fn clear(&mut self) {
        self.remeasured.clear();
        self.resized.clear();
    }

    /// Returns `true` if nothing was re-measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remeasured.is_empty()
    }
}
