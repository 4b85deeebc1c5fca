//! Host directory disk store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::disk_fs::DiskFS;
use crate::error::{DiskError, DiskResult};

/// Disk store backed by a directory on the host.
///
/// Disk `name` lives in `<dir>/<name>.<extension>`. Files without the
/// extension are ignored.
pub struct HostDiskFS {
    dir: PathBuf,
    extension: String,
}

impl HostDiskFS {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }
}

impl DiskFS for HostDiskFS {
    fn read_disk(&self, name: &str) -> DiskResult<Option<Vec<u8>>> {
        match fs::read(self.path_of(name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_disk(&mut self, name: &str, data: &[u8]) -> DiskResult<()> {
        let path = self.path_of(name);
        debug!("Writing {} bytes to {}", data.len(), path.display());
        fs::write(path, data)?;
        Ok(())
    }

    fn delete_disk(&mut self, name: &str) -> DiskResult<bool> {
        match fs::remove_file(self.path_of(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list_disks(&self) -> DiskResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    fn rename_disk(&mut self, from: &str, to: &str) -> DiskResult<()> {
        if !self.exists(from) {
            return Err(DiskError::DiskNotFound(from.to_string()));
        }
        fs::rename(self.path_of(from), self.path_of(to))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut fs = HostDiskFS::new(dir.path(), "mx");

        fs.write_disk("a", b"0 0\n").unwrap();
        assert!(dir.path().join("a.mx").is_file());
        assert!(fs.exists("a"));
        assert_eq!(fs.read_disk("a").unwrap(), Some(b"0 0\n".to_vec()));
        assert_eq!(fs.read_disk("b").unwrap(), None);
    }

    #[test]
    fn test_read_error_is_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub.mx")).unwrap();
        let fs = HostDiskFS::new(dir.path(), "mx");

        assert!(matches!(fs.read_disk("sub"), Err(DiskError::Io(_))));
        assert_eq!(fs.dir(), dir.path());
    }

    #[test]
    fn test_list_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("sub.mx")).unwrap();

        let mut fs = HostDiskFS::new(dir.path(), ".mx");
        fs.write_disk("zeta", b"").unwrap();
        fs.write_disk("alpha", b"").unwrap();

        assert_eq!(fs.list_disks().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_delete_and_rename() {
        let dir = tempfile::tempdir().unwrap();
        let mut fs = HostDiskFS::new(dir.path(), "mx");
        fs.write_disk("a", b"1\n").unwrap();

        fs.rename_disk("a", "b").unwrap();
        assert!(!fs.exists("a"));
        assert_eq!(fs.read_disk("b").unwrap(), Some(b"1\n".to_vec()));
        assert!(matches!(
            fs.rename_disk("a", "c"),
            Err(DiskError::DiskNotFound(_))
        ));

        assert!(fs.delete_disk("b").unwrap());
        assert!(!fs.delete_disk("b").unwrap());
    }
}
