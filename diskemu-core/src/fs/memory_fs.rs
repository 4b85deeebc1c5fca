//! In-memory disk store.

use std::collections::BTreeMap;

use super::disk_fs::DiskFS;
use crate::error::DiskResult;

/// Simple in-memory store, used headless and in tests.
#[derive(Default, Clone)]
pub struct MemoryDiskFS {
    disks: BTreeMap<String, Vec<u8>>,
}

impl MemoryDiskFS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial disks.
    pub fn with_disks<I, S>(disks: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        let disks = disks.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { disks }
    }

    /// Add a disk from string content.
    pub fn add_disk_str(&mut self, name: &str, content: &str) {
        self.disks.insert(name.to_string(), content.as_bytes().to_vec());
    }
}

impl DiskFS for MemoryDiskFS {
    fn read_disk(&self, name: &str) -> DiskResult<Option<Vec<u8>>> {
        Ok(self.disks.get(name).cloned())
    }

    fn write_disk(&mut self, name: &str, data: &[u8]) -> DiskResult<()> {
        self.disks.insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn delete_disk(&mut self, name: &str) -> DiskResult<bool> {
        Ok(self.disks.remove(name).is_some())
    }

    fn list_disks(&self) -> DiskResult<Vec<String>> {
        Ok(self.disks.keys().cloned().collect())
    }

    fn exists(&self, name: &str) -> bool {
        self.disks.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_disk() {
        let mut fs = MemoryDiskFS::new();
        fs.write_disk("a", b"0 0\n").unwrap();

        assert!(fs.exists("a"));
        assert!(!fs.exists("A"));
        assert_eq!(fs.read_disk("a").unwrap(), Some(b"0 0\n".to_vec()));
    }

    #[test]
    fn test_delete_disk() {
        let mut fs = MemoryDiskFS::new();
        fs.write_disk("a", b"").unwrap();

        assert!(fs.delete_disk("a").unwrap());
        assert!(!fs.exists("a"));
        assert!(!fs.delete_disk("missing").unwrap());
    }

    #[test]
    fn test_list_sorted() {
        let fs = MemoryDiskFS::with_disks([("b", vec![]), ("a", vec![]), ("c", vec![])]);
        assert_eq!(fs.list_disks().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_rename() {
        let mut fs = MemoryDiskFS::new();
        fs.add_disk_str("old", "1 2\n");
        fs.rename_disk("old", "new").unwrap();

        assert!(!fs.exists("old"));
        assert_eq!(fs.read_disk("new").unwrap(), Some(b"1 2\n".to_vec()));
        assert!(fs.rename_disk("missing", "x").is_err());
    }
}
