//! Sequential rendered view of a container
//!
//! This is the grid as it is drawn: the slot at sequence index `i` sits at
//! column `i % cols`, row `i / cols`, one slot per cell, and is drawn with its
//! resolved footprint. Drop validation runs against this view, not against
//! the packer output.

use crate::sizes::{Footprint, ItemDefinitions, SizeResolver};
use crate::slot::{Slot, SlotId};

use super::config::GridConfig;
use super::packer::rows_for;
use super::types::PixelRect;

/// One slot as drawn in the sequential view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCell {
    /// Position in the input sequence
    pub index: usize,
    pub slot: SlotId,
    pub col: u32,
    pub row: u32,
    pub footprint: Footprint,
    pub empty: bool,
    /// Pixel bounds of the drawn element
    pub rect: PixelRect,
}

/// Snapshot of the rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    config: GridConfig,
    rows: u32,
    cells: Vec<ViewCell>,
}

impl GridView {
    /// Lay out `slots` one per cell in row-major order
    pub fn build<D: ItemDefinitions + ?Sized>(
        slots: &[Slot],
        config: &GridConfig,
        resolver: &SizeResolver<'_, D>,
    ) -> Self {
        let cols = config.columns;
        let cells = if cols == 0 {
            Vec::new()
        } else {
            slots
                .iter()
                .enumerate()
                .map(|(index, slot)| {
                    let col = (index % cols as usize) as u32;
                    let row = (index / cols as usize) as u32;
                    let footprint = resolver.resolve_slot(slot);
                    ViewCell {
                        index,
                        slot: slot.slot,
                        col,
                        row,
                        footprint,
                        empty: slot.is_empty(),
                        rect: config.cell_rect(col, row, footprint),
                    }
                })
                .collect()
        };

        Self {
            config: *config,
            rows: rows_for(slots.len(), cols),
            cells,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> u32 {
        self.config.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cells(&self) -> &[ViewCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a sequence index
    pub fn cell(&self, index: usize) -> Option<&ViewCell> {
        self.cells.get(index)
    }

    /// Cell at a grid coordinate; `None` past the end of the slot list
    pub fn cell_at(&self, col: u32, row: u32) -> Option<&ViewCell> {
        if col >= self.columns() {
            return None;
        }
        let index = row as usize * self.columns() as usize + col as usize;
        self.cells.get(index)
    }

    /// Pixel size of the whole grid
    pub fn pixel_size(&self) -> (u32, u32) {
        self.config.grid_size(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::{NoDefinitions, SizeTable};

    fn view(slots: &[Slot], cols: u32) -> GridView {
        let table = SizeTable::default();
        let resolver = SizeResolver::new(&NoDefinitions, &table);
        GridView::build(slots, &GridConfig::default().with_columns(cols), &resolver)
    }

    #[test]
    fn test_cells_follow_sequence_order() {
        let slots: Vec<Slot> = (1..=7).map(Slot::empty).collect();
        let view = view(&slots, 3);

        assert_eq!(view.rows(), 3);
        let cell = view.cell(4).expect("cell exists");
        assert_eq!((cell.col, cell.row, cell.slot), (1, 1, 5));
        assert_eq!(view.cell_at(0, 2).map(|c| c.slot), Some(7));
        assert_eq!(view.cell_at(1, 2), None);
        assert_eq!(view.cell_at(3, 0), None);
    }

    #[test]
    fn test_cells_use_resolved_footprint() {
        let slots = vec![Slot::empty(1), Slot::item(2, "laptop")];
        let view = view(&slots, 10);

        let laptop = view.cell(1).expect("cell exists");
        assert_eq!(laptop.footprint, Footprint::new(3, 2));
        assert_eq!(laptop.rect, PixelRect::new(59, 0, 3 * 56 + 2 * 3, 2 * 56 + 3));
        assert!(view.cell(0).is_some_and(|c| c.empty));
    }

    #[test]
    fn test_pixel_size() {
        let slots: Vec<Slot> = (1..=12).map(Slot::empty).collect();
        let view = view(&slots, 10);
        assert_eq!(view.pixel_size(), (587, 2 * 56 + 3));
    }

    #[test]
    fn test_zero_columns_yields_empty_view() {
        let slots = vec![Slot::empty(1)];
        let view = view(&slots, 0);
        assert!(view.is_empty());
        assert_eq!(view.rows(), 0);
    }
}
