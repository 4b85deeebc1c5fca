//! DiskFS trait - the byte store disks are persisted in.

use crate::error::{DiskError, DiskResult};

/// Opaque key-value store of disk contents, keyed by disk name.
///
/// Names passed in are bare disk names (no extension); implementations
/// decide how a name maps onto their own storage.
pub trait DiskFS: Send {
    /// Read disk content. Returns None if the disk does not exist; other
    /// read failures are errors.
    fn read_disk(&self, name: &str) -> DiskResult<Option<Vec<u8>>>;

    /// Write disk content, replacing anything already stored under `name`.
    fn write_disk(&mut self, name: &str, data: &[u8]) -> DiskResult<()>;

    /// Delete a disk. Returns true if it existed and was deleted.
    fn delete_disk(&mut self, name: &str) -> DiskResult<bool>;

    /// List all disk names, sorted.
    fn list_disks(&self) -> DiskResult<Vec<String>>;

    /// Check if a disk exists.
    fn exists(&self, name: &str) -> bool;

    /// Move a disk to a new name.
    ///
    /// The default reads, writes and deletes; stores with a native rename
    /// should override it.
    fn rename_disk(&mut self, from: &str, to: &str) -> DiskResult<()> {
        let data = self
            .read_disk(from)?
            .ok_or_else(|| DiskError::DiskNotFound(from.to_string()))?;
        self.write_disk(to, &data)?;
        self.delete_disk(from)?;
        Ok(())
    }
}

/// Validate a disk name.
///
/// Names become file names on the host, so anything that could escape the
/// disk directory is refused.
///
/// # Examples
/// ```
/// use diskemu_core::validate_disk_name;
/// assert!(validate_disk_name("backup-2").is_ok());
/// assert!(validate_disk_name("../etc").is_err());
/// assert!(validate_disk_name("").is_err());
/// ```
pub fn validate_disk_name(name: &str) -> DiskResult<&str> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
        || name.chars().any(char::is_whitespace);
    if bad {
        Err(DiskError::InvalidDiskName(name.to_string()))
    } else {
        Ok(name)
    }
}
