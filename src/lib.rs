//! Slot Grid - placement and drop validation for grid inventories
//!
//! This library resolves how many cells each item occupies, packs a
//! container's slots into a fixed-size grid, and answers whether a dragged
//! item may be dropped at a given cell.
//!
//! # Example
//!
//! ```rust
//! use slot_grid::{arrange, Slot};
//!
//! let mut slots = vec![Slot::item(1, "medkit")];
//! slots.extend((2..=20).map(Slot::empty));
//! let arrangement = arrange(&slots);
//!
//! let medkit = arrangement.packed.placement_for(1).unwrap();
//! assert_eq!((medkit.col, medkit.row), (0, 0));
//! assert!(arrangement.view.can_drop(1, slot_grid::Footprint::new(1, 1)));
//! ```

pub mod error;
pub mod inventory;
pub mod layout;
pub mod report;
pub mod sizes;
pub mod slot;

pub use error::InventoryError;
pub use inventory::Inventory;
pub use layout::{
    can_drop, pack, rows_for, GridConfig, GridView, LintWarning, PackCache, PackResult, Placement,
};
pub use sizes::{
    Footprint, ItemCatalog, ItemDefinitions, NoDefinitions, SizeHint, SizeResolver, SizeTable,
};
pub use slot::{Slot, SlotId};

use tracing::debug;

/// Configuration for the complete arrange pipeline
#[derive(Debug, Clone, Default)]
pub struct ArrangeConfig {
    /// Grid geometry
    pub grid: GridConfig,
    /// Fallback footprint tables
    pub sizes: SizeTable,
}

impl ArrangeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the size tables
    pub fn with_sizes(mut self, sizes: SizeTable) -> Self {
        self.sizes = sizes;
        self
    }
}

/// Both layouts of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    /// First-fit placement in the fixed grid
    pub packed: PackResult,
    /// The grid as drawn, used for drop validation
    pub view: GridView,
}

impl Arrangement {
    /// Lint warnings for the packed layout
    pub fn lint(&self) -> Vec<LintWarning> {
        layout::lint::check(&self.packed, self.view.columns())
    }
}

/// Arrange slots with the default grid, built-in sizes, and no item store
pub fn arrange(slots: &[Slot]) -> Arrangement {
    arrange_with_config(slots, &NoDefinitions, &ArrangeConfig::default())
}

/// Arrange slots with custom configuration and item definitions
///
/// # Example
///
/// ```rust
/// use slot_grid::{arrange_with_config, ArrangeConfig, GridConfig, ItemCatalog, Slot};
///
/// let catalog = ItemCatalog::new().with_item("water", 2, 1);
/// let config = ArrangeConfig::new().with_grid(GridConfig::default().with_columns(2));
/// let slots = vec![Slot::item(1, "water"), Slot::empty(2)];
///
/// let arrangement = arrange_with_config(&slots, &catalog, &config);
/// assert_eq!(arrangement.packed.rows, 1);
/// assert_eq!(arrangement.packed.placements[0].footprint.width, 2);
/// ```
pub fn arrange_with_config<D: ItemDefinitions + ?Sized>(
    slots: &[Slot],
    definitions: &D,
    config: &ArrangeConfig,
) -> Arrangement {
    let resolver = SizeResolver::new(definitions, &config.sizes);
    let rows = config.grid.rows_for(slots.len());

    let packed = pack(slots, config.grid.columns, rows, &resolver);
    let view = GridView::build(slots, &config.grid, &resolver);

    debug!(
        slots = slots.len(),
        cols = config.grid.columns,
        rows,
        placed = packed.placements.len(),
        unplaced = packed.unplaced.len(),
        "arranged container"
    );

    Arrangement { packed, view }
}

impl Inventory {
    /// Arrange this document's slots with its own grid, items, and sizes
    pub fn arrange(&self) -> Arrangement {
        let resolver = self.resolver();
        Arrangement {
            packed: pack(&self.slots, self.grid.columns, self.rows(), &resolver),
            view: GridView::build(&self.slots, &self.grid, &resolver),
        }
    }
}
