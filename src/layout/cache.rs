//! Memoized packing
//!
//! Keeps the inputs and output of the last pack call and returns the stored
//! result while the slot list and grid size stay the same.

use tracing::debug;

use crate::sizes::{ItemDefinitions, SizeResolver};
use crate::slot::Slot;

use super::packer::pack;
use super::types::PackResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    slots: Vec<Slot>,
    cols: u32,
    rows: u32,
    result: PackResult,
}

/// Last-input memo for [`pack`]
///
/// The cache does not see the size tables or item store; call
/// [`PackCache::clear`] after either changes.
#[derive(Debug, Clone, Default)]
pub struct PackCache {
    entry: Option<CacheEntry>,
}

impl PackCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pack `slots`, reusing the previous result for identical inputs
    pub fn pack<D: ItemDefinitions + ?Sized>(
        &mut self,
        slots: &[Slot],
        cols: u32,
        rows: u32,
        resolver: &SizeResolver<'_, D>,
    ) -> &PackResult {
        let entry = match self.entry.take() {
            Some(entry) if entry.cols == cols && entry.rows == rows && entry.slots == slots => {
                debug!(slots = slots.len(), cols, rows, "reusing cached placement");
                entry
            }
            _ => CacheEntry {
                slots: slots.to_vec(),
                cols,
                rows,
                result: pack(slots, cols, rows, resolver),
            },
        };

        &self.entry.insert(entry).result
    }

    /// Drop the stored result
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Whether a result is stored
    pub fn is_warm(&self) -> bool {
        self.entry.is_some()
    }
}
