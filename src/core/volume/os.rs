//! Real-filesystem volume.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Entry, Volume};

/// A [`Volume`] over the host filesystem, rooted at a mount directory.
#[derive(Debug, Clone)]
pub struct OsVolume {
    root: PathBuf,
}

impl OsVolume {
    /// Create a volume rooted at `root`. The path is not validated here;
    /// a missing or unreadable directory surfaces when the walk lists it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Volume for OsVolume {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // DirEntry::file_type does not follow symlinks, so a symlinked
            // key entry classifies as a file
            let file_type = entry.file_type()?;
            entries.push(Entry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn read(&self, file: &Path) -> io::Result<Vec<u8>> {
        fs::read(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entries_classify_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("db")).unwrap();
        fs::write(tmp.path().join("stray"), b"x").unwrap();

        let volume = OsVolume::new(tmp.path());
        let mut entries = volume.entries(tmp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "db");
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].name, "stray");
        assert!(!entries[1].is_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_classifies_as_file_and_reads_target() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real"), b"bytes").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let volume = OsVolume::new(tmp.path());
        let entries = volume.entries(tmp.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();

        assert!(!link.is_dir);
        assert_eq!(volume.read(&link.path).unwrap(), b"bytes");
    }

    #[test]
    fn test_entries_of_missing_directory_error() {
        let tmp = TempDir::new().unwrap();
        let volume = OsVolume::new(tmp.path());
        assert!(volume.entries(&tmp.path().join("absent")).is_err());
    }
}
