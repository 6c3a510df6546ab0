//! Integration tests for drop validation on the rendered grid

use slot_grid::{
    arrange, arrange_with_config, can_drop, ArrangeConfig, Footprint, GridConfig, NoDefinitions,
    Slot,
};

fn empty_container(count: u32) -> Vec<Slot> {
    (0..count).map(Slot::empty).collect()
}

#[test]
fn test_rejects_item_running_off_right_edge() {
    // 10 columns, 3 rows
    let arrangement = arrange(&empty_container(30));
    assert_eq!(arrangement.view.rows(), 3);
    assert!(!can_drop(&arrangement.view, 8, Footprint::new(3, 2)));
}

#[test]
fn test_accepts_item_that_exactly_fits_corner() {
    let arrangement = arrange(&empty_container(30));
    assert!(can_drop(&arrangement.view, 17, Footprint::new(3, 2)));
    assert!(!can_drop(&arrangement.view, 18, Footprint::new(3, 2)));
}

#[test]
fn test_partial_last_row() {
    let arrangement = arrange(&empty_container(23));
    // index 12 covers indices 12, 13, 22, 23; 23 does not exist
    assert!(!arrangement.view.can_drop(12, Footprint::new(2, 2)));
    assert!(arrangement.view.can_drop(11, Footprint::new(2, 2)));
}

#[test]
fn test_drop_back_onto_own_item() {
    let mut slots = empty_container(30);
    slots[5] = Slot::item(5, "weapon_carbinerifle");
    let arrangement = arrange(&slots);

    assert!(arrangement.view.can_drop(5, Footprint::new(3, 2)));
    assert!(!arrangement.view.can_drop(4, Footprint::new(3, 2)));
    // cells drawn under the rifle still belong to their own empty slots
    assert!(arrangement.view.can_drop(15, Footprint::new(2, 1)));
}

#[test]
fn test_validator_uses_sequential_view_not_packer() {
    // The packer moves the medkit's neighbour, but drop checks still see
    // one slot per cell in input order
    let mut slots = empty_container(20);
    slots[0] = Slot::item(0, "medkit");
    slots[1] = Slot::item(1, "water");
    let arrangement = arrange(&slots);

    let water = arrangement.packed.placement_for(1).expect("water placed");
    assert_eq!((water.col, water.row), (2, 0));

    assert!(!arrangement.view.can_drop(0, Footprint::new(2, 1)));
    assert!(arrangement.view.can_drop(2, Footprint::new(2, 2)));
}

#[test]
fn test_narrow_grid_geometry() {
    let config = ArrangeConfig::new().with_grid(GridConfig::default().with_columns(4));
    let arrangement = arrange_with_config(&empty_container(8), &NoDefinitions, &config);

    assert_eq!(arrangement.view.rows(), 2);
    assert_eq!(arrangement.view.drop_targets(Footprint::new(3, 2)), vec![0, 1]);
}

#[test]
fn test_huge_slot_metadata_does_not_panic() {
    let slots = vec![
        Slot::item(1, "water").with_grid_size(100_000_000, 1),
        Slot::empty(2),
    ];
    let arrangement = arrange(&slots);

    assert_eq!(arrangement.packed.unplaced, vec![1]);
    let cell = arrangement.view.cell(0).expect("cell exists");
    assert_eq!(cell.rect.width, u32::MAX);
    assert!(arrangement.view.can_drop(1, Footprint::UNIT));
    assert!(!arrangement.view.can_drop(0, Footprint::new(100_000_000, 1)));
}
