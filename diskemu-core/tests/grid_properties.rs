//! Property tests for the sector grid and its transformations.

use diskemu_core::mutator::{decrease_one_cell, defragment, increase_one_cell, sum_all};
use diskemu_core::{Cursor, SectorGrid};
use proptest::prelude::*;

/// Rectangular grids of 0..6 lines, 1..12 sectors wide.
fn grid_strategy() -> impl Strategy<Value = SectorGrid> {
    (0usize..6, 1usize..12).prop_flat_map(|(lines, width)| {
        prop::collection::vec(prop::collection::vec(0u8..=9, width), lines)
            .prop_map(|rows| SectorGrid::from_lines(rows).unwrap())
    })
}

fn sorted(mut v: Vec<u8>) -> Vec<u8> {
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn new_grid_has_floor_lines(n in 0usize..1000) {
        let grid = SectorGrid::new(n);
        prop_assert_eq!(grid.line_count(), n / 10);
        prop_assert!(grid.lines().iter().all(|l| l.len() == 10 && l.iter().all(|v| *v == 0)));
    }

    #[test]
    fn parse_serialize_roundtrip(grid in grid_strategy()) {
        let text = grid.serialize();
        prop_assert_eq!(SectorGrid::parse(&text).unwrap(), grid);
    }

    #[test]
    fn defragment_is_idempotent_and_preserves_lines(grid in grid_strategy()) {
        let mut once = grid.clone();
        defragment(&mut once);
        let mut twice = once.clone();
        defragment(&mut twice);
        prop_assert_eq!(&twice, &once);

        prop_assert_eq!(once.line_count(), grid.line_count());
        for (before, after) in grid.lines().iter().zip(once.lines()) {
            prop_assert_eq!(sorted(before.clone()), after.clone());
        }
    }

    #[test]
    fn increment_then_decrement_restores(start in 0u8..=9, amount in -1000i64..1000) {
        let mut grid = SectorGrid::from_lines(vec![vec![start]]).unwrap();
        let cursor = Cursor::new(0, 0);
        let up = increase_one_cell(&mut grid, cursor, amount).unwrap();
        prop_assert!(up <= 9);
        prop_assert_eq!(decrease_one_cell(&mut grid, cursor, amount).unwrap(), start);
    }

    #[test]
    fn sum_matches_serialized_digits(grid in grid_strategy()) {
        let digits: u64 = grid
            .serialize()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(u64::from)
            .sum();
        prop_assert_eq!(sum_all(&grid), digits);
    }
}
