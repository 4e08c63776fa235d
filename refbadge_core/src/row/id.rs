// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row identity.

use core::fmt;

/// A handle to a row in a [`RowStore`](super::RowStore).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a row is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    /// Slot index into the store's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the store's generation for this slot.
    pub(crate) generation: u32,
}

impl RowId {
    /// Returns the raw slot index, as reported in
    /// [`RowChanges`](super::RowChanges).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({}@gen{})", self.idx, self.generation)
    }
}
