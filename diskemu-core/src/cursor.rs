//! Cursor addressing into the selected grid.

use std::fmt;

use crate::error::{DiskError, DiskResult};
use crate::grid::SectorGrid;

/// Zero-based (line, sector) address.
///
/// A cursor is not tied to a grid; after a format or a shrink it may point
/// past the end, which is only detected when something dereferences it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub sector: usize,
}

impl Cursor {
    pub fn new(line: usize, sector: usize) -> Self {
        Self { line, sector }
    }

    /// Parse an address written as `<line>x<sector>`, e.g. `3x7`.
    pub fn parse_address(text: &str) -> DiskResult<Self> {
        let (line, sector) = text
            .split_once(['x', 'X'])
            .ok_or_else(|| DiskError::InvalidArgument(format!("bad position {:?}", text)))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| DiskError::InvalidArgument(format!("bad position {:?}", text)))
        };
        Ok(Self::new(parse(line)?, parse(sector)?))
    }

    /// Check the cursor addresses an existing sector of `grid`.
    pub fn check(&self, grid: &SectorGrid) -> DiskResult<()> {
        match grid.lines().get(self.line) {
            Some(line) if self.sector < line.len() => Ok(()),
            _ => Err(DiskError::CursorOutOfBounds {
                line: self.line,
                sector: self.sector,
            }),
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.line, self.sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(Cursor::parse_address("3x7").unwrap(), Cursor::new(3, 7));
        assert_eq!(Cursor::parse_address("0X0").unwrap(), Cursor::new(0, 0));
        assert!(Cursor::parse_address("3").is_err());
        assert!(Cursor::parse_address("ax1").is_err());
        assert!(Cursor::parse_address("-1x1").is_err());
    }

    #[test]
    fn test_check_bounds() {
        let grid = SectorGrid::new(40);
        assert!(Cursor::new(0, 0).check(&grid).is_ok());
        assert!(Cursor::new(3, 9).check(&grid).is_ok());
        assert!(matches!(
            Cursor::new(4, 0).check(&grid),
            Err(DiskError::CursorOutOfBounds { line: 4, sector: 0 })
        ));
        assert!(Cursor::new(0, 10).check(&grid).is_err());
        assert!(Cursor::new(0, 0).check(&SectorGrid::new(0)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cursor::new(2, 5).to_string(), "2x5");
    }
}
