//! Core types for grid placement

use crate::sizes::Footprint;
use crate::slot::SlotId;

/// A rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub col: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(col: u32, row: u32, footprint: Footprint) -> Self {
        Self {
            col,
            row,
            width: footprint.width,
            height: footprint.height,
        }
    }

    /// Column one past the right edge
    pub fn right(&self) -> u32 {
        self.col.saturating_add(self.width)
    }

    /// Row one past the bottom edge
    pub fn bottom(&self) -> u32 {
        self.row.saturating_add(self.height)
    }

    /// Check if this rectangle covers a cell
    pub fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.col && col < self.right() && row >= self.row && row < self.bottom()
    }

    /// Check if this rectangle shares a cell with another
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.col < other.right()
            && self.right() > other.col
            && self.row < other.bottom()
            && self.bottom() > other.row
    }

    /// Check if this rectangle lies inside a `cols × rows` grid
    pub fn fits_within(&self, cols: u32, rows: u32) -> bool {
        self.right() <= cols && self.bottom() <= rows
    }

    /// Every covered cell as `(col, row)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.row..self.bottom())
            .flat_map(move |row| (self.col..self.right()).map(move |col| (col, row)))
    }
}

/// A rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The resolved position of a slot after packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub slot: SlotId,
    pub col: u32,
    pub row: u32,
    pub footprint: Footprint,
    /// Empty slots are placed but never claim their cell
    pub empty: bool,
}

impl Placement {
    /// The covered cells
    pub fn rect(&self) -> CellRect {
        CellRect::new(self.col, self.row, self.footprint)
    }
}

/// Output of the fixed-grid packer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackResult {
    /// Placements in input order
    pub placements: Vec<Placement>,
    /// Row count of the grid, unchanged from the input
    pub rows: u32,
    /// Slots that fit nowhere, in input order
    pub unplaced: Vec<SlotId>,
}

impl PackResult {
    /// Find the placement of a slot
    pub fn placement_for(&self, slot: SlotId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot == slot)
    }

    /// Placements of slots holding an item
    pub fn occupied(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| !p.empty)
    }

    /// Whether every slot received a placement
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}
