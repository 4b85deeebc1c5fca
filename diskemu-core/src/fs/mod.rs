//! Disk persistence backends.
//!
//! - `DiskFS`: byte store keyed by disk name
//! - `MemoryDiskFS`: in-memory implementation
//! - `HostDiskFS`: a directory of `<name>.<ext>` files

mod disk_fs;
mod host_fs;
mod memory_fs;

pub use disk_fs::{validate_disk_name, DiskFS};
pub use host_fs::HostDiskFS;
pub use memory_fs::MemoryDiskFS;
