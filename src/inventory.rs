//! Inventory documents
//!
//! A TOML document bundling everything one container needs: grid geometry,
//! the slot list, item definitions, and optional extra size rules.
//!
//! ```toml
//! [grid]
//! columns = 10
//!
//! [[slots]]
//! slot = 1
//! name = "weapon_pistol"
//!
//! [[slots]]
//! slot = 2
//!
//! [items.medkit]
//! width = 2
//! height = 2
//!
//! [sizes]
//! prefixes = [["tool_", 2, 1]]
//! exact = { lantern = [1, 2] }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::InventoryError;
use crate::layout::GridConfig;
use crate::sizes::table::TomlSizeTable;
use crate::sizes::{ItemCatalog, SizeHint, SizeResolver, SizeTable};
use crate::slot::Slot;

/// A loaded inventory document
#[derive(Debug, Clone)]
pub struct Inventory {
    pub grid: GridConfig,
    pub slots: Vec<Slot>,
    /// Item definition store declared in the document
    pub items: ItemCatalog,
    /// Built-in sizes with the document's own rules layered in front
    pub sizes: SizeTable,
}

/// TOML structure for deserializing inventories
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlInventory {
    #[serde(default)]
    grid: GridConfig,
    #[serde(default)]
    slots: Vec<Slot>,
    #[serde(default)]
    items: HashMap<String, SizeHint>,
    sizes: Option<TomlSizeTable>,
}

impl Inventory {
    /// Load inventory from TOML file
    pub fn from_file(path: &Path) -> Result<Self, InventoryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load inventory from TOML string
    pub fn from_str(content: &str) -> Result<Self, InventoryError> {
        let parsed: TomlInventory = toml::from_str(content)?;

        validate_grid(&parsed.grid)?;

        let mut seen = HashSet::new();
        for slot in &parsed.slots {
            if !seen.insert(slot.slot) {
                return Err(InventoryError::DuplicateSlot { slot: slot.slot });
            }
        }

        let sizes = match parsed.sizes {
            Some(custom) => SizeTable::default().extend_with(custom.into_table()?),
            None => SizeTable::default(),
        };

        Ok(Inventory {
            grid: parsed.grid,
            slots: parsed.slots,
            items: parsed.items.into_iter().collect(),
            sizes,
        })
    }

    /// Override the column count, e.g. from the command line
    pub fn with_columns(mut self, columns: u32) -> Result<Self, InventoryError> {
        self.grid = self.grid.with_columns(columns);
        validate_grid(&self.grid)?;
        Ok(self)
    }

    /// Layer another size table in front of the current one
    pub fn with_sizes(mut self, custom: SizeTable) -> Self {
        self.sizes = self.sizes.extend_with(custom);
        self
    }

    /// Resolver over this document's item store and size tables
    pub fn resolver(&self) -> SizeResolver<'_, ItemCatalog> {
        SizeResolver::new(&self.items, &self.sizes)
    }

    /// Rows of the fixed grid for this slot list
    pub fn rows(&self) -> u32 {
        self.grid.rows_for(self.slots.len())
    }
}

fn validate_grid(grid: &GridConfig) -> Result<(), InventoryError> {
    if grid.columns == 0 {
        return Err(InventoryError::invalid_grid("columns must be at least 1"));
    }
    if grid.cell_size == 0 {
        return Err(InventoryError::invalid_grid("cell_size must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::Footprint;

    #[test]
    fn test_parse_minimal_inventory() {
        let inventory = Inventory::from_str(
            r#"
[[slots]]
slot = 1
name = "water"

[[slots]]
slot = 2
"#,
        )
        .expect("Should parse");

        assert_eq!(inventory.grid, GridConfig::default());
        assert_eq!(inventory.slots.len(), 2);
        assert!(inventory.slots[1].is_empty());
        assert_eq!(inventory.rows(), 1);
    }

    #[test]
    fn test_items_and_sizes_feed_resolver() {
        let inventory = Inventory::from_str(
            r#"
[grid]
columns = 4

[items.Water]
width = 2
height = 1

[sizes]
prefixes = [["tool_", 3, 1]]
exact = { lantern = [1, 2] }
"#,
        )
        .expect("Should parse");

        let resolver = inventory.resolver();
        assert_eq!(inventory.grid.columns, 4);
        assert_eq!(resolver.resolve("water"), Footprint::new(2, 1));
        assert_eq!(resolver.resolve("tool_saw"), Footprint::new(3, 1));
        assert_eq!(resolver.resolve("lantern"), Footprint::new(1, 2));
        assert_eq!(resolver.resolve("medkit"), Footprint::new(2, 2));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = Inventory::from_str("[grid]\ncolumns = 0\n");
        assert!(matches!(result, Err(InventoryError::InvalidGrid { .. })));

        let inventory = Inventory::from_str("").expect("Should parse");
        assert!(inventory.with_columns(0).is_err());
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let result = Inventory::from_str(
            r#"
[[slots]]
slot = 3

[[slots]]
slot = 3
name = "water"
"#,
        );
        assert!(matches!(result, Err(InventoryError::DuplicateSlot { slot: 3 })));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result = Inventory::from_str("weight = 12\n");
        assert!(matches!(result, Err(InventoryError::ParseError(_))));
    }
}
