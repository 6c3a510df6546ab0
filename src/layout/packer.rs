//! Fixed-size first-fit packer
//!
//! Places every slot into a grid whose row count never grows. Slots are
//! handled in input order and each one takes the first free position in a
//! row-major scan, so earlier slots win contested cells. A slot that fits
//! nowhere is left out of the placements and reported in
//! [`PackResult::unplaced`].

use tracing::debug;

use crate::sizes::{ItemDefinitions, SizeResolver};
use crate::slot::Slot;

use super::types::{CellRect, PackResult, Placement};

/// Rows needed to hold `slot_count` slots as 1×1 cells in `cols` columns
pub fn rows_for(slot_count: usize, cols: u32) -> u32 {
    if cols == 0 {
        return 0;
    }
    slot_count.div_ceil(cols as usize) as u32
}

/// Scratch occupancy matrix for one pack call
struct Occupancy {
    cols: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl Occupancy {
    fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols as usize * rows as usize],
        }
    }

    fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn is_free(&self, rect: &CellRect) -> bool {
        rect.fits_within(self.cols, self.rows)
            && rect.cells().all(|(col, row)| !self.cells[self.index(col, row)])
    }

    fn claim(&mut self, rect: &CellRect) {
        for (col, row) in rect.cells() {
            let index = self.index(col, row);
            self.cells[index] = true;
        }
    }

    /// First free anchor for `rect`'s size in row-major order
    fn first_fit(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if width > self.cols || height > self.rows {
            return None;
        }
        for row in 0..=(self.rows - height) {
            for col in 0..=(self.cols - width) {
                let candidate = CellRect {
                    col,
                    row,
                    width,
                    height,
                };
                if self.is_free(&candidate) {
                    return Some((col, row));
                }
            }
        }
        None
    }
}

/// Pack `slots` into a fixed `cols × rows` grid
pub fn pack<D: ItemDefinitions + ?Sized>(
    slots: &[Slot],
    cols: u32,
    rows: u32,
    resolver: &SizeResolver<'_, D>,
) -> PackResult {
    let mut occupancy = Occupancy::new(cols, rows);
    let mut result = PackResult {
        placements: Vec::with_capacity(slots.len()),
        rows,
        unplaced: Vec::new(),
    };

    for slot in slots {
        let footprint = resolver.resolve_slot(slot);
        let empty = slot.is_empty();

        match occupancy.first_fit(footprint.width, footprint.height) {
            Some((col, row)) => {
                let placement = Placement {
                    slot: slot.slot,
                    col,
                    row,
                    footprint,
                    empty,
                };
                if !empty {
                    occupancy.claim(&placement.rect());
                }
                result.placements.push(placement);
            }
            None => {
                debug!(
                    slot = slot.slot,
                    item = slot.item_name().unwrap_or_default(),
                    %footprint,
                    cols,
                    rows,
                    "slot does not fit the grid, leaving it out"
                );
                result.unplaced.push(slot.slot);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::{Footprint, ItemCatalog, NoDefinitions, SizeTable};

    fn pack_default(slots: &[Slot], cols: u32) -> PackResult {
        let table = SizeTable::default();
        let resolver = SizeResolver::new(&NoDefinitions, &table);
        pack(slots, cols, rows_for(slots.len(), cols), &resolver)
    }

    #[test]
    fn test_rows_for() {
        assert_eq!(rows_for(0, 10), 0);
        assert_eq!(rows_for(10, 10), 1);
        assert_eq!(rows_for(11, 10), 2);
        assert_eq!(rows_for(101, 10), 11);
        assert_eq!(rows_for(5, 0), 0);
    }

    #[test]
    fn test_unit_slots_fill_row_major() {
        let slots: Vec<Slot> = (1..=5).map(|i| Slot::item(i, "water")).collect();
        let result = pack_default(&slots, 3);

        assert_eq!(result.rows, 2);
        let coords: Vec<_> = result.placements.iter().map(|p| (p.col, p.row)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_large_item_pushes_later_items() {
        let slots = vec![
            Slot::item(1, "medkit"),
            Slot::item(2, "water"),
            Slot::item(3, "cola"),
            Slot::item(4, "beer"),
        ];
        let result = pack_default(&slots, 3);

        let medkit = result.placement_for(1).expect("medkit placed");
        assert_eq!((medkit.col, medkit.row), (0, 0));
        assert_eq!(medkit.footprint, Footprint::new(2, 2));

        assert_eq!(result.placement_for(2).map(|p| (p.col, p.row)), Some((2, 0)));
        assert_eq!(result.placement_for(3).map(|p| (p.col, p.row)), Some((2, 1)));
        // Grid is 3x2 and full, so the fourth item is dropped
        assert_eq!(result.placement_for(4), None);
        assert_eq!(result.unplaced, vec![4]);
    }

    #[test]
    fn test_empty_slots_do_not_block() {
        let mut slots = vec![Slot::empty(1), Slot::empty(2), Slot::empty(3)];
        slots.push(Slot::item(4, "medkit"));
        slots.extend((5..=9).map(Slot::empty));
        let result = pack_default(&slots, 3);

        let medkit = result.placement_for(4).expect("medkit placed");
        assert_eq!((medkit.col, medkit.row), (0, 0));
        assert!(result.is_complete());
        assert!(result.placement_for(1).is_some_and(|p| p.empty));
    }

    #[test]
    fn test_empty_slot_is_unit_even_with_metadata() {
        let slots = vec![Slot::empty(1).with_grid_size(3, 3)];
        let result = pack_default(&slots, 3);
        assert_eq!(result.placements[0].footprint, Footprint::UNIT);
    }

    #[test]
    fn test_zero_columns_places_nothing() {
        let slots = vec![Slot::item(1, "water"), Slot::empty(2)];
        let table = SizeTable::default();
        let resolver = SizeResolver::new(&NoDefinitions, &table);
        let result = pack(&slots, 0, 3, &resolver);

        assert!(result.placements.is_empty());
        assert_eq!(result.unplaced, vec![1, 2]);
    }

    #[test]
    fn test_store_footprint_used_for_packing() {
        let table = SizeTable::default();
        let catalog = ItemCatalog::new().with_item("water", 3, 1);
        let resolver = SizeResolver::new(&catalog, &table);
        let slots = vec![Slot::item(1, "cola"), Slot::item(2, "water")];
        let result = pack(&slots, 3, 2, &resolver);

        assert_eq!(result.placement_for(2).map(|p| (p.col, p.row)), Some((0, 1)));
    }
}
