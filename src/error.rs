//! Error types for loading inventories and size tables
//!
//! The placement engine itself never fails; only the file and TOML surfaces
//! around it do.

use thiserror::Error;

use crate::sizes::SizeTableError;
use crate::slot::SlotId;

/// Errors that can occur when loading an inventory document
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read inventory file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse inventory TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid size table: {0}")]
    Sizes(#[from] SizeTableError),

    /// Grid geometry that cannot hold any cell
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// Two slots share an identifier
    #[error("duplicate slot id {slot}")]
    DuplicateSlot { slot: SlotId },
}

impl InventoryError {
    /// Create an invalid grid error
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}
