//! Grid placement engine
//!
//! Two independent models share one geometry ([`GridConfig`]):
//!
//! - the fixed-grid packer ([`pack`]) computes collision-free first-fit
//!   positions for every slot inside a grid that never grows;
//! - the sequential view ([`GridView`]) is the grid as drawn, one slot per
//!   cell in input order, and is what drop validation ([`can_drop`]) reads.

pub mod cache;
pub mod config;
pub mod drop;
pub mod lint;
pub mod packer;
pub mod sequential;
pub mod types;

pub use cache::PackCache;
pub use config::GridConfig;
pub use drop::can_drop;
pub use lint::{LintCategory, LintWarning};
pub use packer::{pack, rows_for};
pub use sequential::{GridView, ViewCell};
pub use types::*;
