//! Grid transformations.
//!
//! Stateless operations on a [`SectorGrid`]. Sector arithmetic is modulo 10
//! with a non-negative result, so `0 - 1` is `9`.

use std::fmt;

use crate::cancel::CancelFlag;
use crate::cursor::Cursor;
use crate::error::{DiskError, DiskResult};
use crate::grid::{parse_sector, SectorGrid, MAX_SECTOR_VALUE};

/// `(value + amount) mod 10`, never negative.
fn wrap_add(value: u8, amount: i64) -> u8 {
    (i64::from(value) + amount.rem_euclid(10)).rem_euclid(10) as u8
}

/// Add `amount` to the sector under the cursor. Returns the new value.
pub fn increase_one_cell(grid: &mut SectorGrid, cursor: Cursor, amount: i64) -> DiskResult<u8> {
    cursor.check(grid)?;
    let cell = grid
        .get_mut(cursor.line, cursor.sector)
        .ok_or(DiskError::CursorOutOfBounds {
            line: cursor.line,
            sector: cursor.sector,
        })?;
    *cell = wrap_add(*cell, amount);
    Ok(*cell)
}

/// Subtract `amount` from the sector under the cursor. Returns the new value.
pub fn decrease_one_cell(grid: &mut SectorGrid, cursor: Cursor, amount: i64) -> DiskResult<u8> {
    increase_one_cell(grid, cursor, -amount.rem_euclid(10))
}

/// Add `amount` to every sector.
pub fn increase_all_cells(grid: &mut SectorGrid, amount: i64) {
    for line in grid.lines_mut() {
        for cell in line.iter_mut() {
            *cell = wrap_add(*cell, amount);
        }
    }
}

/// Repeatedly increase every sector, alternating the amount 1, 9, 1, 9...
///
/// Each finished pass is handed to `persist` before the next one starts.
/// `cancel` is checked before a pass is computed and again before it is
/// persisted, so `grid` and the persisted copy always hold a whole number of
/// passes. Returns the number of passes persisted.
pub fn increase_cycle<P>(grid: &mut SectorGrid, cancel: &CancelFlag, mut persist: P) -> DiskResult<u64>
where
    P: FnMut(&SectorGrid) -> DiskResult<()>,
{
    let mut amount = 1;
    let mut passes = 0;
    while !cancel.is_cancelled() {
        let mut next = grid.clone();
        increase_all_cells(&mut next, amount);
        if cancel.is_cancelled() {
            break;
        }
        persist(&next)?;
        *grid = next;
        passes += 1;
        amount = if amount == 1 { 9 } else { 1 };
    }
    Ok(passes)
}

/// Overwrite the sector under the cursor with `value`.
pub fn set_cell(grid: &mut SectorGrid, cursor: Cursor, value: &str) -> DiskResult<()> {
    let digit = parse_sector(value.trim())
        .ok_or_else(|| DiskError::ModificationOutOfBounds(value.to_string()))?;
    cursor.check(grid)?;
    if let Some(cell) = grid.get_mut(cursor.line, cursor.sector) {
        *cell = digit;
    }
    Ok(())
}

/// Locate the first sector equal to `value`, scanning lines top to bottom
/// and sectors left to right.
pub fn find_value(grid: &SectorGrid, value: &str) -> DiskResult<Cursor> {
    let not_found = || DiskError::ValueNotFound(value.to_string());
    let wanted = parse_sector(value).ok_or_else(not_found)?;
    grid.lines()
        .iter()
        .enumerate()
        .find_map(|(i, line)| {
            line.iter()
                .position(|v| *v == wanted)
                .map(|s| Cursor::new(i, s))
        })
        .ok_or_else(not_found)
}

/// Replace every sector equal to `old` with `new`.
///
/// A `new` value just outside 0..=9 is wrapped back into range once
/// (`12` becomes `2`, `-3` becomes `7`). Returns the number of sectors
/// replaced; zero matches is a `ReplaceFailed`.
pub fn replace_value(grid: &mut SectorGrid, old: &str, new: &str) -> DiskResult<usize> {
    let new_num: i64 = new
        .trim()
        .parse()
        .map_err(|_| DiskError::ReplaceFailed(format!("{:?} is not a number", new)))?;
    let max = i64::from(MAX_SECTOR_VALUE);
    let wrapped = if new_num > max {
        new_num - 10
    } else if new_num < 0 {
        new_num + 10
    } else {
        new_num
    };
    if !(0..=max).contains(&wrapped) {
        return Err(DiskError::ReplaceFailed(format!(
            "{} cannot be wrapped into 0..=9",
            new_num
        )));
    }
    let wrapped = wrapped as u8;

    let old_digit = parse_sector(old.trim())
        .ok_or_else(|| DiskError::ReplaceFailed(format!("no sector holds {}", old)))?;

    let mut replaced = 0;
    for line in grid.lines_mut() {
        for cell in line.iter_mut().filter(|c| **c == old_digit) {
            *cell = wrapped;
            replaced += 1;
        }
    }
    if replaced == 0 {
        return Err(DiskError::ReplaceFailed(format!("no sector holds {}", old)));
    }
    Ok(replaced)
}

/// Sort each line's sectors ascending. Line count and widths are unchanged.
pub fn defragment(grid: &mut SectorGrid) {
    for line in grid.lines_mut() {
        line.sort_unstable();
    }
}

/// Total of every sector value.
pub fn sum_all(grid: &SectorGrid) -> u64 {
    grid.sum()
}

/// Memory usage report for `dm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStats {
    pub format: String,
    /// Separators (spaces and newlines) in the serialized disk.
    pub used_space: usize,
    pub max_capacity: usize,
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Format: {}, Max. Capacity: {}, Space Used: {}/{}",
            self.format, self.max_capacity, self.used_space, self.max_capacity
        )
    }
}

/// Compute the `dm` report. `max_capacity` is a reported constant, not
/// derived from the grid.
pub fn memory_stats(grid: &SectorGrid, format: &str, max_capacity: usize) -> MemoryStats {
    let used_space = grid
        .serialize()
        .bytes()
        .filter(|b| *b == b' ' || *b == b'\n')
        .count();
    MemoryStats {
        format: format.to_string(),
        used_space,
        max_capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> SectorGrid {
        SectorGrid::parse(text).unwrap()
    }

    #[test]
    fn test_increase_wraps() {
        let mut g = grid("7 0\n");
        let c = Cursor::new(0, 0);
        assert_eq!(increase_one_cell(&mut g, c, 1).unwrap(), 8);
        assert_eq!(increase_one_cell(&mut g, c, 1).unwrap(), 9);
        assert_eq!(increase_one_cell(&mut g, c, 1).unwrap(), 0);
        assert_eq!(increase_one_cell(&mut g, c, 23).unwrap(), 3);
    }

    #[test]
    fn test_decrease_is_true_modulo() {
        let mut g = grid("0 0\n");
        let c = Cursor::new(0, 1);
        assert_eq!(decrease_one_cell(&mut g, c, 1).unwrap(), 9);
        assert_eq!(decrease_one_cell(&mut g, c, 12).unwrap(), 7);
        assert_eq!(increase_one_cell(&mut g, c, -8).unwrap(), 9);
        assert_eq!(decrease_one_cell(&mut g, c, i64::MIN).unwrap(), 7);
    }

    #[test]
    fn test_increase_stale_cursor() {
        let mut g = grid("0 0\n");
        assert!(matches!(
            increase_one_cell(&mut g, Cursor::new(0, 2), 1),
            Err(DiskError::CursorOutOfBounds { line: 0, sector: 2 })
        ));
        assert!(increase_one_cell(&mut g, Cursor::new(1, 0), 1).is_err());
        assert_eq!(g, grid("0 0\n"));
    }

    #[test]
    fn test_increase_all_cells() {
        let mut g = grid("0 5\n9 3\n");
        increase_all_cells(&mut g, 3);
        assert_eq!(g, grid("3 8\n2 6\n"));
    }

    #[test]
    fn test_increase_cycle_stops_on_cancel() {
        let mut g = grid("0 0\n0 0\n");
        let cancel = CancelFlag::new();
        let mut persisted = Vec::new();

        let passes = increase_cycle(&mut g, &cancel, |pass| {
            persisted.push(pass.clone());
            if persisted.len() == 3 {
                cancel.cancel();
            }
            Ok(())
        })
        .unwrap();

        assert_eq!(passes, 3);
        // +1, +9, +1
        assert_eq!(persisted[0], grid("1 1\n1 1\n"));
        assert_eq!(persisted[1], grid("0 0\n0 0\n"));
        assert_eq!(persisted[2], grid("1 1\n1 1\n"));
        assert_eq!(g, persisted[2]);
    }

    #[test]
    fn test_increase_cycle_precancelled() {
        let mut g = grid("4\n");
        let cancel = CancelFlag::new();
        cancel.cancel();
        let passes = increase_cycle(&mut g, &cancel, |_| panic!("must not persist")).unwrap();
        assert_eq!(passes, 0);
        assert_eq!(g, grid("4\n"));
    }

    #[test]
    fn test_increase_cycle_persist_error() {
        let mut g = grid("4\n");
        let cancel = CancelFlag::new();
        let result = increase_cycle(&mut g, &cancel, |_| {
            Err(DiskError::InternalFault("disk gone".into()))
        });
        assert!(result.is_err());
        assert_eq!(g, grid("4\n"));
    }

    #[test]
    fn test_set_cell() {
        let mut g = grid("0 0\n");
        set_cell(&mut g, Cursor::new(0, 1), "5").unwrap();
        assert_eq!(g.get(0, 1), Some(5));

        assert!(matches!(
            set_cell(&mut g, Cursor::new(0, 0), "12"),
            Err(DiskError::ModificationOutOfBounds(_))
        ));
        assert!(matches!(
            set_cell(&mut g, Cursor::new(3, 0), "1"),
            Err(DiskError::CursorOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_find_value() {
        let g = grid("0 0 0\n0 5 5\n5 0 0\n");
        assert_eq!(find_value(&g, "5").unwrap(), Cursor::new(1, 1));
        assert!(matches!(
            find_value(&g, "7"),
            Err(DiskError::ValueNotFound(_))
        ));
        assert!(find_value(&g, "55").is_err());
    }

    #[test]
    fn test_replace_value() {
        let mut g = grid("1 2 1\n3 1 0\n");
        assert_eq!(replace_value(&mut g, "1", "4").unwrap(), 3);
        assert_eq!(g, grid("4 2 4\n3 4 0\n"));
    }

    #[test]
    fn test_replace_wraps_once() {
        let mut g = grid("1 2\n");
        replace_value(&mut g, "1", "12").unwrap();
        replace_value(&mut g, "2", "-3").unwrap();
        assert_eq!(g, grid("2 7\n"));

        assert!(matches!(
            replace_value(&mut g, "2", "25"),
            Err(DiskError::ReplaceFailed(_))
        ));
        assert!(replace_value(&mut g, "2", "-11").is_err());
        assert!(replace_value(&mut g, "2", "abc").is_err());
    }

    #[test]
    fn test_replace_no_match() {
        let mut g = grid("1 2\n");
        assert!(matches!(
            replace_value(&mut g, "9", "0"),
            Err(DiskError::ReplaceFailed(_))
        ));
    }

    #[test]
    fn test_defragment() {
        let mut g = grid("3 1 2\n9 0 9\n");
        defragment(&mut g);
        assert_eq!(g, grid("1 2 3\n0 9 9\n"));
    }

    #[test]
    fn test_memory_stats() {
        let g = SectorGrid::new(40);
        let stats = memory_stats(&g, "custom", 80);
        assert_eq!(stats.used_space, 40);
        assert_eq!(
            stats.to_string(),
            "Format: custom, Max. Capacity: 80, Space Used: 40/80"
        );
        assert_eq!(memory_stats(&SectorGrid::new(0), "x", 80).used_space, 0);
    }

    #[test]
    fn test_sum_all() {
        assert_eq!(sum_all(&grid("1 2\n3 4\n")), 10);
    }
}
