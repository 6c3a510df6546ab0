//! Slot data model
//!
//! A slot is a fixed position in a container. It is either empty or holds a
//! single item stack identified by name. Slots are supplied wholesale on every
//! call; nothing in this crate keeps them between calls.

use serde::Deserialize;

use crate::sizes::SizeHint;

/// Stable identifier of a slot within its container
pub type SlotId = u32;

/// A container slot, empty or holding one item
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Slot {
    /// Position identifier, unique within the container
    pub slot: SlotId,

    /// Item name; `None` or an empty string marks an empty slot
    #[serde(default)]
    pub name: Option<String>,

    /// Per-slot width override delivered with the slot metadata
    #[serde(default, alias = "gridWidth")]
    pub grid_width: Option<u32>,

    /// Per-slot height override delivered with the slot metadata
    #[serde(default, alias = "gridHeight")]
    pub grid_height: Option<u32>,

    /// Any other item attributes (count, metadata, durability, ...)
    #[serde(flatten)]
    pub attributes: toml::Table,
}

impl Slot {
    /// Create an empty slot
    pub fn empty(slot: SlotId) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    /// Create a slot holding the named item
    pub fn item(slot: SlotId, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach an explicit footprint from slot metadata
    pub fn with_grid_size(mut self, width: u32, height: u32) -> Self {
        self.grid_width = Some(width);
        self.grid_height = Some(height);
        self
    }

    /// Attach an arbitrary item attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The item name, if the slot holds an item
    pub fn item_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether the slot holds no item
    pub fn is_empty(&self) -> bool {
        self.item_name().is_none()
    }

    /// Footprint override carried by the slot itself
    pub fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot = Slot::empty(3);
        assert_eq!(slot.slot, 3);
        assert!(slot.is_empty());
        assert_eq!(slot.item_name(), None);
    }

    #[test]
    fn test_empty_name_counts_as_empty() {
        let slot = Slot::item(1, "");
        assert!(slot.is_empty());
    }

    #[test]
    fn test_item_slot() {
        let slot = Slot::item(1, "medkit").with_attribute("count", 3);
        assert!(!slot.is_empty());
        assert_eq!(slot.item_name(), Some("medkit"));
        assert_eq!(slot.attributes.get("count"), Some(&toml::Value::Integer(3)));
    }

    #[test]
    fn test_deserialize_with_camel_case_size() {
        let slot: Slot = toml::from_str(
            r#"
slot = 4
name = "crate"
gridWidth = 2
gridHeight = 1
count = 5
"#,
        )
        .expect("Should parse");

        assert_eq!(slot.slot, 4);
        assert_eq!(slot.grid_width, Some(2));
        assert_eq!(slot.grid_height, Some(1));
        assert_eq!(slot.attributes.get("count"), Some(&toml::Value::Integer(5)));
        assert!(!slot.attributes.contains_key("name"));
    }
}
