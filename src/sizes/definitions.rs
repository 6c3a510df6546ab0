//! Item definition store interface
//!
//! The store is owned by the surrounding system (it is usually populated from
//! server-side item definitions). The resolver only asks it for an optional
//! footprint by item name.

use std::collections::HashMap;

use super::SizeHint;

/// Source of authoritative per-item footprints
pub trait ItemDefinitions {
    /// Footprint declared for `name`, if any
    fn size_hint(&self, name: &str) -> Option<SizeHint>;
}

/// A store that knows no items
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl ItemDefinitions for NoDefinitions {
    fn size_hint(&self, _name: &str) -> Option<SizeHint> {
        None
    }
}

/// Case-insensitive lookup; keys that differ only in case are not merged
impl ItemDefinitions for HashMap<String, SizeHint> {
    fn size_hint(&self, name: &str) -> Option<SizeHint> {
        let lower = name.to_lowercase();
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.to_lowercase() == lower)
                    .map(|(_, hint)| hint)
            })
            .map(|hint| SizeHint::new(hint.width, hint.height))
            .filter(|hint| !hint.is_empty())
    }
}

impl<T: ItemDefinitions + ?Sized> ItemDefinitions for &T {
    fn size_hint(&self, name: &str) -> Option<SizeHint> {
        (**self).size_hint(name)
    }
}

/// In-memory item definition store with case-insensitive names
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, SizeHint>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a footprint for an item, replacing any earlier entry
    pub fn insert(&mut self, name: &str, hint: SizeHint) {
        let hint = SizeHint::new(hint.width, hint.height);
        if hint.is_empty() {
            self.items.remove(&name.to_lowercase());
        } else {
            self.items.insert(name.to_lowercase(), hint);
        }
    }

    /// Builder form of [`ItemCatalog::insert`]
    pub fn with_item(mut self, name: &str, width: u32, height: u32) -> Self {
        self.insert(name, SizeHint::exact(width, height));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, SizeHint)> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = (String, SizeHint)>>(iter: I) -> Self {
        let mut catalog = ItemCatalog::new();
        for (name, hint) in iter {
            catalog.insert(&name, hint);
        }
        catalog
    }
}

impl ItemDefinitions for ItemCatalog {
    fn size_hint(&self, name: &str) -> Option<SizeHint> {
        self.items.get(&name.to_lowercase()).copied()
    }
}
