// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row storage with allocation, binding, and measurement.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use crate::decoration::Decoration;
use crate::dirty;
use crate::icon::IconSet;
use crate::layout::{self, MeasuredRow};
use crate::style::BadgeStyle;
use crate::text::TextMeasurer;
use crate::trace::{MeasurePassEvent, RowMeasuredEvent, Tracer};

use super::changes::{MeasureCause, RowChanges};
use super::id::RowId;

/// Storage for all badge rows of a view.
///
/// Rows are addressed by [`RowId`] handles. Internally, each row occupies a
/// slot in parallel arrays. Destroyed rows are recycled via a free list, and
/// generation counters prevent stale handle access.
///
/// The store owns the cache: [`measure_dirty`](Self::measure_dirty) replaces
/// stale rows wholesale, and painters only ever borrow a
/// [`MeasuredRow`] for the duration of one paint call.
#[derive(Debug)]
pub struct RowStore {
    // -- Bindings (set by callers) --
    pub(crate) decorations: Vec<Option<Vec<Decoration>>>,

    // -- Cached measurements (written by measure_dirty) --
    pub(crate) measured: Vec<MeasuredRow>,

    // -- Shared inputs --
    pub(crate) style: BadgeStyle,
    pub(crate) icons: IconSet,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) needs_measure: bool,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new(BadgeStyle::default(), IconSet::builtin())
    }
}

impl RowStore {
    /// Creates an empty store measuring with `style` and `icons`.
    #[must_use]
    pub fn new(style: BadgeStyle, icons: IconSet) -> Self {
        Self {
            decorations: Vec::new(),
            measured: Vec::new(),
            style,
            icons,
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            needs_measure: false,
        }
    }

    // -- Allocation API --

    /// Creates a new, unbound row and returns its handle.
    ///
    /// The row measures to zero size until it is bound.
    pub fn create_row(&mut self) -> RowId {
        let empty = MeasuredRow::empty(self.style.foreground);
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.decorations[idx as usize] = None;
            self.measured[idx as usize] = empty;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.decorations.push(None);
            self.measured.push(empty);
            self.generation.push(0);
            idx
        };

        self.mark(idx, dirty::DECORATIONS);

        RowId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a row, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_row(&mut self, id: RowId) {
        self.validate(id);
        let idx = id.idx as usize;

        self.dirty.remove_key(id.idx);
        self.decorations[idx] = None;
        self.measured[idx] = MeasuredRow::empty(self.style.foreground);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx] += 1;
        self.free_list.push(id.idx);
    }

    /// Returns whether the given handle refers to a live row.
    #[must_use]
    pub fn is_alive(&self, id: RowId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns the number of live rows.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Binding API (auto-marks dirty) --

    /// Binds a row to the decorations of the commit it now shows.
    ///
    /// Marks the DECORATIONS channel for this row.
    pub fn bind(&mut self, id: RowId, decorations: Vec<Decoration>) {
        self.validate(id);
        self.decorations[id.idx as usize] = Some(decorations);
        self.mark(id.idx, dirty::DECORATIONS);
    }

    /// Unbinds a row; it measures to zero size afterwards.
    ///
    /// Marks the DECORATIONS channel for this row.
    pub fn unbind(&mut self, id: RowId) {
        self.validate(id);
        self.decorations[id.idx as usize] = None;
        self.mark(id.idx, dirty::DECORATIONS);
    }

    /// Returns the decorations a row is bound to, if any.
    #[must_use]
    pub fn decorations(&self, id: RowId) -> Option<&[Decoration]> {
        self.validate(id);
        self.decorations[id.idx as usize].as_deref()
    }

    // -- Style API --

    /// Returns the shared style.
    #[must_use]
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Replaces the shared style.
    ///
    /// If any parameter differs, marks the STYLE channel for every live row.
    /// Setting an identical style is a no-op.
    pub fn set_style(&mut self, style: BadgeStyle) {
        if !self.style.differs_from(&style) {
            return;
        }
        self.style = style;
        self.invalidate_all();
    }

    /// Marks every live row for re-measurement on the STYLE channel.
    ///
    /// For changes the store cannot observe itself, such as the host's text
    /// measurer starting to report different metrics.
    pub fn invalidate_all(&mut self) {
        for idx in 0..self.len {
            if !self.free_list.contains(&idx) {
                self.mark(idx, dirty::STYLE);
            }
        }
    }

    /// Returns the icon table.
    #[must_use]
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    // -- Measurement API --

    /// Returns `true` if any row has been invalidated since the last
    /// [`measure_dirty`](Self::measure_dirty).
    ///
    /// Hosts must not paint while this is `true`.
    #[must_use]
    pub fn needs_measure(&self) -> bool {
        self.needs_measure
    }

    /// Re-measures every invalidated row and returns the set of changes.
    pub fn measure_dirty<M: TextMeasurer + ?Sized>(&mut self, text: &M) -> RowChanges {
        self.measure_dirty_traced(text, &mut Tracer::none())
    }

    /// Like [`measure_dirty`](Self::measure_dirty), but reports each
    /// re-measured row and the pass summary to `tracer`.
    pub fn measure_dirty_traced<M: TextMeasurer + ?Sized>(
        &mut self,
        text: &M,
        tracer: &mut Tracer<'_>,
    ) -> RowChanges {
        let mut changes = RowChanges::default();

        let rebound: Vec<u32> = self
            .dirty
            .drain(dirty::DECORATIONS)
            .deterministic()
            .run()
            .collect();
        let restyled: Vec<u32> = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .collect();

        let mut rows: Vec<u32> = rebound.iter().chain(&restyled).copied().collect();
        rows.sort_unstable();
        rows.dedup();

        for idx in rows {
            if idx >= self.len || self.free_list.contains(&idx) {
                continue;
            }
            let slot = idx as usize;
            let cause = MeasureCause {
                decorations: rebound.contains(&idx),
                style: restyled.contains(&idx),
            };
            let row = layout::measure(
                self.decorations[slot].as_deref().unwrap_or(&[]),
                &self.style,
                &self.icons,
                text,
            );

            let old_size = self.measured[slot].size;
            tracer.row_measured(&RowMeasuredEvent {
                row: idx,
                cause,
                badges: row.items.len(),
                old_size,
                new_size: row.size,
            });
            if row.size != old_size {
                changes.resized.push(idx);
            }
            changes.remeasured.push(idx);
            self.measured[slot] = row;
        }

        self.needs_measure = false;
        tracer.measure_pass(&MeasurePassEvent {
            remeasured: changes.remeasured.len(),
            resized: changes.resized.len(),
        });
        changes
    }

    /// Returns the cached measurement of a row.
    ///
    /// Only current after [`measure_dirty`](Self::measure_dirty) has run
    /// since the last invalidation.
    #[must_use]
    pub fn measured(&self, id: RowId) -> &MeasuredRow {
        self.validate(id);
        &self.measured[id.idx as usize]
    }

    /// Returns the cached measurement at raw slot `idx`, as found in
    /// [`RowChanges`].
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn measured_at(&self, idx: u32) -> &MeasuredRow {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        &self.measured[idx as usize]
    }

    // -- Internal helpers --

    fn mark(&mut self, idx: u32, channel: understory_dirty::Channel) {
        self.dirty.mark(idx, channel);
        self.needs_measure = true;
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: RowId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale RowId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::Size;
    use peniko::Color;

    use super::*;
    use crate::decoration::DecorationKind;
    use crate::style::FontSpec;
    use crate::text::HeuristicTextMeasurer;

    /// Every glyph is 5px wide at any size.
    struct MonoMeasurer;

    impl TextMeasurer for MonoMeasurer {
        fn measure(&self, text: &str, font: &FontSpec) -> Size {
            Size::new(5.0 * text.len() as f64, font.size)
        }
    }

    fn decorations() -> Vec<Decoration> {
        let color = Color::from_rgb8(0x30, 0x60, 0xc0);
        vec![
            Decoration::new(DecorationKind::CurrentBranchHead, "main", color),
            Decoration::new(DecorationKind::Tag, "v1.0", color),
        ]
    }

    #[test]
    fn create_and_destroy() {
        let mut store = RowStore::default();
        let id = store.create_row();
        assert!(store.is_alive(id));
        assert_eq!(store.live_count(), 1);
        store.destroy_row(id);
        assert!(!store.is_alive(id));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = RowStore::default();
        let id1 = store.create_row();
        store.destroy_row(id1);
        let id2 = store.create_row();
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    #[should_panic(expected = "stale RowId")]
    fn destroyed_handle_panics_on_bind() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.destroy_row(id);
        store.bind(id, decorations());
    }

    #[test]
    #[should_panic(expected = "stale RowId")]
    fn destroyed_handle_panics_on_measured() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.destroy_row(id);
        let _ = store.measured(id);
    }

    #[test]
    fn unbound_row_measures_zero() {
        let mut store = RowStore::default();
        let id = store.create_row();
        assert!(store.needs_measure());

        let changes = store.measure_dirty(&MonoMeasurer);
        assert_eq!(changes.remeasured, vec![id.idx]);
        assert!(changes.resized.is_empty(), "zero to zero is not a resize");
        assert!(store.measured(id).is_empty());
        assert_eq!(store.measured(id).size, Size::ZERO);
        assert!(!store.needs_measure());
    }

    #[test]
    fn bind_remeasures_only_that_row() {
        let mut store = RowStore::default();
        let a = store.create_row();
        let b = store.create_row();
        let _ = store.measure_dirty(&MonoMeasurer);

        store.bind(b, decorations());
        assert!(store.needs_measure());
        let changes = store.measure_dirty(&MonoMeasurer);
        assert_eq!(changes.remeasured, vec![b.idx]);
        assert_eq!(changes.resized, vec![b.idx]);

        // Both labels are 4 glyphs -> 20px.
        let row = store.measured(b);
        assert_eq!(row.items.len(), 2);
        let head = 16.0 + 20.0 + 4.0;
        let tag = 16.0 + 4.0 + 20.0 + 4.0;
        assert_eq!(row.size, Size::new(2.0 + (head + 4.0) + (tag + 4.0), 16.0));
        assert!(store.measured(a).is_empty());
    }

    #[test]
    fn clean_store_measures_nothing() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        let _ = store.measure_dirty(&MonoMeasurer);

        let changes = store.measure_dirty(&MonoMeasurer);
        assert!(changes.is_empty());
    }

    #[test]
    fn style_change_remeasures_every_live_row() {
        let mut store = RowStore::default();
        let a = store.create_row();
        let b = store.create_row();
        let gone = store.create_row();
        store.bind(a, decorations());
        store.bind(b, decorations());
        store.destroy_row(gone);
        let _ = store.measure_dirty(&MonoMeasurer);

        let mut style = store.style().clone();
        style.tag_background = Color::from_rgb8(0x80, 0x80, 0x20);
        store.set_style(style);
        let changes = store.measure_dirty(&MonoMeasurer);
        assert_eq!(changes.remeasured, vec![a.idx, b.idx]);
        assert!(changes.resized.is_empty(), "color change keeps sizes");
        assert_eq!(
            store.measured(a).items[1].fill.components,
            store.style().tag_background.components
        );
    }

    #[test]
    fn identical_style_is_not_an_invalidation() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        let _ = store.measure_dirty(&MonoMeasurer);

        store.set_style(store.style().clone());
        assert!(!store.needs_measure());
        assert!(store.measure_dirty(&MonoMeasurer).is_empty());
    }

    #[test]
    fn font_change_resizes_rows() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        let _ = store.measure_dirty(&MonoMeasurer);
        let before = store.measured(id).size;

        struct SizeAwareMeasurer;
        impl TextMeasurer for SizeAwareMeasurer {
            fn measure(&self, text: &str, font: &FontSpec) -> Size {
                Size::new(text.len() as f64 * font.size * 0.5, font.size)
            }
        }
        store.set_style(BadgeStyle {
            font_family: String::from("monospace"),
            font_size: 20.0,
            ..store.style().clone()
        });
        let changes = store.measure_dirty(&SizeAwareMeasurer);
        assert_eq!(changes.resized, vec![id.idx]);
        assert!(store.measured(id).size.width > before.width);
    }

    #[test]
    fn invalidate_all_picks_up_new_metrics() {
        let mut store = RowStore::default();
        let a = store.create_row();
        let b = store.create_row();
        store.bind(a, decorations());
        let _ = store.measure_dirty(&MonoMeasurer);
        assert!(!store.needs_measure());

        store.invalidate_all();
        assert!(store.needs_measure());
        let changes = store.measure_dirty(&HeuristicTextMeasurer);
        assert_eq!(changes.remeasured, vec![a.idx, b.idx]);
        assert_eq!(changes.resized, vec![a.idx]);
    }

    #[test]
    fn rebinding_replaces_the_cache_wholesale() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        let _ = store.measure_dirty(&MonoMeasurer);
        assert_eq!(store.measured(id).items.len(), 2);

        let color = Color::from_rgb8(0x10, 0x10, 0x10);
        store.bind(
            id,
            vec![Decoration::new(DecorationKind::RemoteBranchHead, "origin/dev", color)],
        );
        let _ = store.measure_dirty(&MonoMeasurer);
        let row = store.measured(id);
        assert_eq!(row.items.len(), 1);
        assert_eq!(row.items[0].label.text, "origin/dev");

        store.unbind(id);
        let changes = store.measure_dirty(&MonoMeasurer);
        assert_eq!(changes.resized, vec![id.idx]);
        assert!(store.measured(id).is_empty());
        assert!(store.decorations(id).is_none());
    }

    #[test]
    fn destroyed_rows_are_skipped() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        store.destroy_row(id);
        let changes = store.measure_dirty(&MonoMeasurer);
        assert!(changes.is_empty());
    }

    #[test]
    fn measured_at_matches_handle_access() {
        let mut store = RowStore::default();
        let id = store.create_row();
        store.bind(id, decorations());
        let changes = store.measure_dirty(&MonoMeasurer);
        let idx = changes.remeasured[0];
        assert_eq!(store.measured_at(idx).size, store.measured(id).size);
    }
}
