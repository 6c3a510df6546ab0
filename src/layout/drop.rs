//! Drop validation against the rendered grid
//!
//! Answers "may this item be dropped with its top-left corner here?" while a
//! drag is in progress. The check is read-only and runs on every hover event.

use tracing::trace;

use crate::sizes::{Footprint, ItemDefinitions, SizeResolver};
use crate::slot::Slot;

use super::sequential::GridView;

/// Whether an item of `footprint` may be dropped anchored at `target_index`.
///
/// The target rectangle must stay inside the grid, every covered cell must
/// exist in the slot list, and no covered cell may hold an item other than
/// the target slot's own.
pub fn can_drop(view: &GridView, target_index: usize, footprint: Footprint) -> bool {
    let Some(target) = view.cell(target_index) else {
        return false;
    };

    let remaining_cols = view.columns() - target.col;
    let remaining_rows = view.rows() - target.row;
    if footprint.width > remaining_cols || footprint.height > remaining_rows {
        trace!(target_index, %footprint, "drop runs off the grid edge");
        return false;
    }

    for row in target.row..target.row + footprint.height {
        for col in target.col..target.col + footprint.width {
            let Some(cell) = view.cell_at(col, row) else {
                trace!(target_index, col, row, "drop covers a cell past the last slot");
                return false;
            };
            if !cell.empty && cell.slot != target.slot {
                trace!(target_index, blocker = cell.slot, "drop collides with another item");
                return false;
            }
        }
    }

    true
}

impl GridView {
    /// See [`can_drop`]
    pub fn can_drop(&self, target_index: usize, footprint: Footprint) -> bool {
        can_drop(self, target_index, footprint)
    }

    /// Check a drop of an item known only by name
    pub fn can_drop_item<D: ItemDefinitions + ?Sized>(
        &self,
        target_index: usize,
        name: &str,
        resolver: &SizeResolver<'_, D>,
    ) -> bool {
        can_drop(self, target_index, resolver.resolve(name))
    }

    /// Check a drop of the content of a dragged slot, honouring its metadata
    pub fn can_drop_slot<D: ItemDefinitions + ?Sized>(
        &self,
        target_index: usize,
        dragged: &Slot,
        resolver: &SizeResolver<'_, D>,
    ) -> bool {
        can_drop(self, target_index, resolver.resolve_slot(dragged))
    }

    /// Every sequence index that accepts an item of `footprint`
    pub fn drop_targets(&self, footprint: Footprint) -> Vec<usize> {
        (0..self.len())
            .filter(|index| can_drop(self, *index, footprint))
            .collect()
    }
}
