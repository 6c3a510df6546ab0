//! Footprint resolution across the item store, slot metadata, and size tables

use crate::slot::Slot;

use super::{Footprint, ItemDefinitions, SizeHint, SizeTable};

/// Resolves item footprints with tiered fallback
///
/// Width and height of the explicit tiers (item store, then slot metadata)
/// are resolved independently; a dimension neither declares comes from the
/// size table, or 1 when the table has no entry.
pub struct SizeResolver<'a, D: ?Sized> {
    definitions: &'a D,
    table: &'a SizeTable,
}

impl<D: ?Sized> Clone for SizeResolver<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for SizeResolver<'_, D> {}

impl<'a, D: ItemDefinitions + ?Sized> SizeResolver<'a, D> {
    pub fn new(definitions: &'a D, table: &'a SizeTable) -> Self {
        Self { definitions, table }
    }

    /// The fallback table in use
    pub fn table(&self) -> &SizeTable {
        self.table
    }

    /// Footprint of an item by name, without slot metadata
    pub fn resolve(&self, name: &str) -> Footprint {
        self.resolve_with(name, SizeHint::default())
    }

    /// Footprint of a slot's content; empty slots are always 1×1
    pub fn resolve_slot(&self, slot: &Slot) -> Footprint {
        match slot.item_name() {
            Some(name) => self.resolve_with(name, slot.size_hint()),
            None => Footprint::UNIT,
        }
    }

    fn resolve_with(&self, name: &str, slot_hint: SizeHint) -> Footprint {
        let explicit = self
            .definitions
            .size_hint(name)
            .unwrap_or_default()
            .or(slot_hint);

        if explicit.width.is_some() && explicit.height.is_some() {
            return explicit.complete(Footprint::UNIT);
        }

        let fallback = self.table.lookup(name).unwrap_or(Footprint::UNIT);
        explicit.complete(fallback)
    }
}
