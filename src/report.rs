//! Plain-text reports of a packed layout

use std::collections::HashMap;
use std::fmt::Write;

use crate::layout::PackResult;
use crate::slot::{Slot, SlotId};

const MAP_SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// One line per placement: slot id, item, anchor cell, and footprint
pub fn placement_table(result: &PackResult, slots: &[Slot]) -> String {
    let names: HashMap<SlotId, &str> = slots
        .iter()
        .map(|slot| (slot.slot, slot.item_name().unwrap_or("-")))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{:<6}{:<24}{:>4}{:>5}  size", "slot", "item", "col", "row");
    for placement in &result.placements {
        let name = names.get(&placement.slot).copied().unwrap_or("?");
        let _ = writeln!(
            out,
            "{:<6}{:<24}{:>4}{:>5}  {}",
            placement.slot, name, placement.col, placement.row, placement.footprint
        );
    }
    for slot in &result.unplaced {
        let name = names.get(slot).copied().unwrap_or("?");
        let _ = writeln!(out, "{:<6}{:<24}  (unplaced)", slot, name);
    }
    out
}

/// Grid of characters: one symbol per item, `.` for free cells
///
/// Items are lettered in placement order; the alphabet wraps after 62 items.
pub fn occupancy_map(result: &PackResult, cols: u32) -> String {
    let mut grid = vec![vec!['.'; cols as usize]; result.rows as usize];

    for (n, placement) in result.occupied().enumerate() {
        let symbol = MAP_SYMBOLS[n % MAP_SYMBOLS.len()] as char;
        for (col, row) in placement.rect().cells() {
            if let Some(cell) = grid
                .get_mut(row as usize)
                .and_then(|line| line.get_mut(col as usize))
            {
                *cell = symbol;
            }
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
