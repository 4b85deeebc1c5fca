//! Disk store - named disks persisted as sector grids.
//!
//! Every mutation is a whole-disk read-modify-write: callers `load` a grid,
//! change it, and `save` it straight back. There is no write-back cache.

use tracing::{debug, info};

use crate::error::{DiskError, DiskResult};
use crate::fs::{validate_disk_name, DiskFS};
use crate::grid::{SectorGrid, MAX_SECTORS};

/// Maps disk names to sector grids held in a [`DiskFS`].
pub struct DiskStore<F: DiskFS> {
    fs: F,
    max_sectors: usize,
}

impl<F: DiskFS> DiskStore<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            max_sectors: MAX_SECTORS,
        }
    }

    /// Set the largest sector count `create` accepts.
    pub fn with_max_sectors(mut self, max_sectors: usize) -> Self {
        self.max_sectors = max_sectors;
        self
    }

    pub fn max_sectors(&self) -> usize {
        self.max_sectors
    }

    /// Get the underlying byte store.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get mutable reference to the byte store.
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    /// All disk names, sorted.
    pub fn list(&self) -> DiskResult<Vec<String>> {
        self.fs.list_disks()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fs.exists(name)
    }

    /// Create (or silently overwrite) a zeroed disk of `sectors` sectors.
    pub fn create(&mut self, name: &str, sectors: usize) -> DiskResult<SectorGrid> {
        validate_disk_name(name)?;
        if sectors > self.max_sectors {
            return Err(DiskError::InvalidArgument(format!(
                "{} sectors exceeds the limit of {}",
                sectors, self.max_sectors
            )));
        }
        let grid = SectorGrid::new(sectors);
        self.save(name, &grid)?;
        info!(
            "Created disk {} ({} lines, {} sectors requested)",
            name,
            grid.line_count(),
            sectors
        );
        Ok(grid)
    }

    /// Delete a disk. Missing disks are reported as `DiskNotFound`.
    pub fn delete(&mut self, name: &str) -> DiskResult<()> {
        if self.fs.delete_disk(name)? {
            info!("Deleted disk {}", name);
            Ok(())
        } else {
            Err(DiskError::DiskNotFound(name.to_string()))
        }
    }

    /// Load and parse a disk.
    pub fn load(&self, name: &str) -> DiskResult<SectorGrid> {
        let data = self
            .fs
            .read_disk(name)?
            .ok_or_else(|| DiskError::DiskNotFound(name.to_string()))?;
        let text = std::str::from_utf8(&data)
            .map_err(|e| DiskError::CorruptDisk { line: 0, msg: e.to_string() })?;
        SectorGrid::parse(text)
    }

    /// Serialize and write a grid back.
    pub fn save(&mut self, name: &str, grid: &SectorGrid) -> DiskResult<()> {
        debug!("Saving disk {} ({} lines)", name, grid.line_count());
        self.fs.write_disk(name, grid.serialize().as_bytes())
    }

    /// Duplicate `src`'s raw content into `dst`.
    pub fn copy(&mut self, src: &str, dst: &str) -> DiskResult<()> {
        validate_disk_name(dst).map_err(|e| DiskError::CopyFailed(e.to_string()))?;
        let data = self
            .fs
            .read_disk(src)
            .map_err(|e| DiskError::CopyFailed(e.to_string()))?
            .ok_or_else(|| DiskError::CopyFailed(format!("disk {} does not exist", src)))?;
        self.fs
            .write_disk(dst, &data)
            .map_err(|e| DiskError::CopyFailed(e.to_string()))?;
        info!("Copied disk {} to {}", src, dst);
        Ok(())
    }

    /// Rename `from` to `to`.
    pub fn rename(&mut self, from: &str, to: &str) -> DiskResult<()> {
        validate_disk_name(to).map_err(|e| DiskError::RenameFailed(e.to_string()))?;
        self.fs
            .rename_disk(from, to)
            .map_err(|e| DiskError::RenameFailed(e.to_string()))?;
        info!("Renamed disk {} to {}", from, to);
        Ok(())
    }
}
