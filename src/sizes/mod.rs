//! Item footprint resolution
//!
//! Items occupy a rectangle of grid cells. The footprint of an item comes from
//! the first source that knows it:
//!
//! 1. the item definition store ([`ItemDefinitions`])
//! 2. the slot's own metadata ([`crate::Slot::size_hint`])
//! 3. the ordered prefix rules of a [`SizeTable`]
//! 4. the exact-name entries of a [`SizeTable`]
//! 5. a 1×1 default
//!
//! Resolution never fails: unknown items are 1×1.

pub mod definitions;
pub mod resolver;
pub mod table;

pub use definitions::{ItemCatalog, ItemDefinitions, NoDefinitions};
pub use resolver::SizeResolver;
pub use table::{PrefixRule, SizeTable, SizeTableError};

use serde::Deserialize;

/// Width and height of an item in grid cells, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "[u32; 2]")]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    /// A single cell
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    /// Create a footprint, clamping zero dimensions to 1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Create a footprint, rejecting zero dimensions
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Number of cells covered
    pub fn area(&self) -> u32 {
        self.width * self.height
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<[u32; 2]> for Footprint {
    type Error = String;

    fn try_from([width, height]: [u32; 2]) -> Result<Self, Self::Error> {
        Footprint::try_new(width, height)
            .ok_or_else(|| format!("footprint must be at least 1x1, got {}x{}", width, height))
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A partial footprint override; each dimension may be declared on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SizeHint {
    #[serde(default, alias = "gridWidth")]
    pub width: Option<u32>,
    #[serde(default, alias = "gridHeight")]
    pub height: Option<u32>,
}

impl SizeHint {
    /// Create a hint; zero dimensions are treated as undeclared
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width: width.filter(|w| *w > 0),
            height: height.filter(|h| *h > 0),
        }
    }

    /// A hint declaring both dimensions
    pub fn exact(width: u32, height: u32) -> Self {
        Self::new(Some(width), Some(height))
    }

    /// Fill undeclared dimensions from `other`
    pub fn or(self, other: SizeHint) -> SizeHint {
        SizeHint {
            width: self.width.or(other.width),
            height: self.height.or(other.height),
        }
    }

    /// Whether neither dimension is declared
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Complete the hint with `fallback` for undeclared dimensions
    pub fn complete(self, fallback: Footprint) -> Footprint {
        Footprint::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}
