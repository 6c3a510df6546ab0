//! Grid geometry shared by the packer, the sequential view, and rendering

use serde::Deserialize;

use crate::sizes::Footprint;

use super::types::PixelRect;

/// Configuration of the slot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Fixed number of columns
    pub columns: u32,

    /// Edge length of one cell in pixels
    pub cell_size: u32,

    /// Space between adjacent cells in pixels
    pub cell_gap: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            cell_size: 56,
            cell_gap: 3,
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column count
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the cell edge length
    pub fn with_cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
        self
    }

    /// Set the gap between cells
    pub fn with_cell_gap(mut self, gap: u32) -> Self {
        self.cell_gap = gap;
        self
    }

    /// Rows needed to hold `slot_count` slots as 1×1 cells
    pub fn rows_for(&self, slot_count: usize) -> u32 {
        super::packer::rows_for(slot_count, self.columns)
    }

    /// Distance between the origins of two adjacent cells
    pub fn cell_step(&self) -> u32 {
        self.cell_size.saturating_add(self.cell_gap)
    }

    /// Pixel length covered by `cells` adjacent cells, including inner gaps.
    ///
    /// Saturates at `u32::MAX` for footprints too large to draw.
    pub fn span(&self, cells: u32) -> u32 {
        match cells {
            0 => 0,
            n => n
                .saturating_mul(self.cell_size)
                .saturating_add((n - 1).saturating_mul(self.cell_gap)),
        }
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, col: u32, row: u32) -> (u32, u32) {
        let step = self.cell_step();
        (col.saturating_mul(step), row.saturating_mul(step))
    }

    /// Pixel rectangle of an item anchored at a cell
    pub fn cell_rect(&self, col: u32, row: u32, footprint: Footprint) -> PixelRect {
        let (x, y) = self.cell_origin(col, row);
        PixelRect::new(x, y, self.span(footprint.width), self.span(footprint.height))
    }

    /// Pixel size of a grid with `rows` rows
    pub fn grid_size(&self, rows: u32) -> (u32, u32) {
        (self.span(self.columns), self.span(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.columns, 10);
        assert_eq!(config.cell_size, 56);
        assert_eq!(config.cell_gap, 3);
        assert_eq!(config.cell_step(), 59);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GridConfig::new()
            .with_columns(6)
            .with_cell_size(40)
            .with_cell_gap(2);

        assert_eq!(config.columns, 6);
        assert_eq!(config.cell_size, 40);
        assert_eq!(config.cell_gap, 2);
    }

    #[test]
    fn test_pixel_transform() {
        let config = GridConfig::default();
        assert_eq!(config.cell_origin(2, 1), (118, 59));

        let rect = config.cell_rect(2, 1, Footprint::new(3, 2));
        assert_eq!(rect, PixelRect::new(118, 59, 3 * 56 + 2 * 3, 2 * 56 + 3));

        let unit = config.cell_rect(0, 0, Footprint::UNIT);
        assert_eq!(unit, PixelRect::new(0, 0, 56, 56));
    }

    #[test]
    fn test_grid_size() {
        let config = GridConfig::default();
        assert_eq!(config.grid_size(3), (10 * 56 + 9 * 3, 3 * 56 + 2 * 3));
        assert_eq!(config.grid_size(0), (587, 0));
        assert_eq!(config.rows_for(101), 11);
    }

    #[test]
    fn test_oversized_footprint_saturates() {
        let config = GridConfig::default();
        let rect = config.cell_rect(9, 0, Footprint::new(100_000_000, 1));
        assert_eq!(rect, PixelRect::new(9 * 59, 0, u32::MAX, 56));
        assert_eq!(config.span(u32::MAX), u32::MAX);
        assert_eq!(config.cell_origin(u32::MAX, 1), (u32::MAX, 59));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: GridConfig = toml::from_str("columns = 8").expect("Should parse");
        assert_eq!(config, GridConfig::default().with_columns(8));
    }
}
