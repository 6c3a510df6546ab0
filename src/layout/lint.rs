//! Lint checks for packed layouts.
//!
//! Runs after packing to report mechanical problems a caller may want to
//! surface: overlapping items, placements outside the grid, and slots the
//! packer left out because they fit nowhere.

use std::fmt;

use super::types::{PackResult, Placement};

/// A lint warning about a packed layout
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Bounds,
    Unplaced,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Unplaced => write!(f, "unplaced"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a pack result for a grid of `cols` columns.
pub fn check(result: &PackResult, cols: u32) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_overlaps(result, &mut warnings);
    check_bounds(result, cols, &mut warnings);
    check_unplaced(result, &mut warnings);
    warnings
}

fn describe(placement: &Placement) -> String {
    format!(
        "slot {} ({} at col {}, row {})",
        placement.slot, placement.footprint, placement.col, placement.row
    )
}

// ── Overlap ───────────────────────────────────────────────────────

fn check_overlaps(result: &PackResult, warnings: &mut Vec<LintWarning>) {
    let occupied: Vec<&Placement> = result.occupied().collect();
    for (i, a) in occupied.iter().enumerate() {
        for b in &occupied[i + 1..] {
            if a.rect().intersects(&b.rect()) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!("{} overlaps {}", describe(a), describe(b)),
                });
            }
        }
    }
}

// ── Bounds ────────────────────────────────────────────────────────

fn check_bounds(result: &PackResult, cols: u32, warnings: &mut Vec<LintWarning>) {
    for placement in &result.placements {
        if !placement.rect().fits_within(cols, result.rows) {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "{} extends past the {}x{} grid",
                    describe(placement),
                    cols,
                    result.rows
                ),
            });
        }
    }
}

// ── Unplaced ──────────────────────────────────────────────────────

fn check_unplaced(result: &PackResult, warnings: &mut Vec<LintWarning>) {
    for slot in &result.unplaced {
        warnings.push(LintWarning {
            category: LintCategory::Unplaced,
            message: format!("slot {} does not fit in the grid and is hidden", slot),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::Footprint;

    fn placement(slot: u32, col: u32, row: u32, w: u32, h: u32, empty: bool) -> Placement {
        Placement {
            slot,
            col,
            row,
            footprint: Footprint::new(w, h),
            empty,
        }
    }

    #[test]
    fn test_clean_result() {
        let result = PackResult {
            placements: vec![placement(1, 0, 0, 2, 2, false), placement(2, 2, 0, 1, 1, false)],
            rows: 2,
            unplaced: vec![],
        };
        assert!(check(&result, 3).is_empty());
    }

    #[test]
    fn test_overlap_detected_but_empty_ignored() {
        let result = PackResult {
            placements: vec![
                placement(1, 0, 0, 2, 2, false),
                placement(2, 1, 1, 1, 1, false),
                placement(3, 0, 0, 1, 1, true),
            ],
            rows: 2,
            unplaced: vec![],
        };
        let warnings = check(&result, 3);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::Overlap);
        assert!(warnings[0].message.contains("slot 1"));
        assert!(warnings[0].message.contains("slot 2"));
    }

    #[test]
    fn test_bounds_and_unplaced() {
        let result = PackResult {
            placements: vec![placement(1, 2, 0, 2, 1, false)],
            rows: 1,
            unplaced: vec![9],
        };
        let categories: Vec<String> = check(&result, 3)
            .iter()
            .map(|w| w.category.to_string())
            .collect();
        assert_eq!(categories, vec!["bounds", "unplaced"]);
    }
}
