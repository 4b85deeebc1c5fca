//! Sector grid - the in-memory form of one disk.
//!
//! On disk a grid is plain text: one line per grid row, sectors written as
//! single ASCII digits separated by one space, every line (including the
//! last) terminated by `\n`. There is no header and no checksum.

use crate::error::{DiskError, DiskResult};

/// Sectors per line for freshly created disks.
pub const SECTORS_PER_LINE: usize = 10;

/// Largest value a sector can hold.
pub const MAX_SECTOR_VALUE: u8 = 9;

/// Default ceiling on the sector count of a new disk.
pub const MAX_SECTORS: usize = 1_000_000;

/// Two-dimensional grid of single-digit sectors.
///
/// All lines have the same width; ragged text is rejected by [`SectorGrid::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorGrid {
    lines: Vec<Vec<u8>>,
}

impl SectorGrid {
    /// Create a zeroed grid holding `sectors` sectors.
    ///
    /// The count is rounded down to a whole number of lines, so `new(47)`
    /// gives four lines and `new(7)` gives an empty grid. Callers bound
    /// `sectors`; see [`MAX_SECTORS`].
    pub fn new(sectors: usize) -> Self {
        let lines = sectors / SECTORS_PER_LINE;
        Self {
            lines: vec![vec![0; SECTORS_PER_LINE]; lines],
        }
    }

    /// Build a grid from rows. Fails if the rows differ in width or hold a
    /// value above 9.
    pub fn from_lines(lines: Vec<Vec<u8>>) -> DiskResult<Self> {
        let width = lines.first().map(Vec::len).unwrap_or(0);
        for (i, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(DiskError::CorruptDisk {
                    line: i,
                    msg: format!("expected {} sectors, found {}", width, line.len()),
                });
            }
            if let Some(v) = line.iter().find(|v| **v > MAX_SECTOR_VALUE) {
                return Err(DiskError::CorruptDisk {
                    line: i,
                    msg: format!("sector value {} out of range", v),
                });
            }
        }
        Ok(Self { lines })
    }

    /// Parse the text disk format.
    pub fn parse(text: &str) -> DiskResult<Self> {
        let mut lines = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let mut line = Vec::new();
            for token in raw.split_whitespace() {
                line.push(parse_sector(token).ok_or_else(|| DiskError::CorruptDisk {
                    line: i,
                    msg: format!("invalid sector {:?}", token),
                })?);
            }
            lines.push(line);
        }
        Self::from_lines(lines)
    }

    /// Serialize to the text disk format.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.lines.len() * self.width() * 2);
        for line in &self.lines {
            let row: Vec<String> = line.iter().map(u8::to_string).collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sectors per line (0 for an empty grid).
    pub fn width(&self) -> usize {
        self.lines.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.lines
    }

    /// Read a sector. Returns None if out of range.
    pub fn get(&self, line: usize, sector: usize) -> Option<u8> {
        self.lines.get(line)?.get(sector).copied()
    }

    /// Mutable access to a sector. Returns None if out of range.
    pub(crate) fn get_mut(&mut self, line: usize, sector: usize) -> Option<&mut u8> {
        self.lines.get_mut(line)?.get_mut(sector)
    }

    /// Total of all sector values.
    pub fn sum(&self) -> u64 {
        self.lines
            .iter()
            .flatten()
            .map(|v| u64::from(*v))
            .sum()
    }
}

/// Parse a single sector token. Only one ASCII digit is accepted.
pub fn parse_sector(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}
