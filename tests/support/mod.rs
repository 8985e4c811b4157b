//! Test support utilities for warren integration tests.
//!
//! Provides an on-disk mount fixture mirroring the layouts container
//! orchestrators project secrets with.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// An on-disk secrets mount built inside a temporary directory.
///
/// Each test gets its own temporary mount; nothing process-global is
/// mutated, so tests can safely run in parallel.
pub struct Mount {
    /// Temporary directory standing in for the volume mount point
    pub dir: TempDir,
}

impl Mount {
    /// Create a new empty mount.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path of the mount point.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a secret directory without any keys.
    pub fn secret(&self, name: &str) -> &Self {
        fs::create_dir_all(self.path().join(name)).expect("failed to create secret dir");
        self
    }

    /// Write a key file directly under a secret directory.
    pub fn key(&self, secret: &str, key: &str, value: &[u8]) -> &Self {
        let dir = self.path().join(secret);
        fs::create_dir_all(&dir).expect("failed to create secret dir");
        fs::write(dir.join(key), value).expect("failed to write key file");
        self
    }

    /// Project a secret the way Kubernetes does for atomic updates:
    /// a hidden generation directory holding the real files, a `..data`
    /// pointer to it, and stable key names symlinked through `..data`.
    ///
    /// Calling it again with a new generation retargets the links, as a
    /// rotation would.
    #[cfg(unix)]
    pub fn projected(&self, secret: &str, generation: &str, keys: &[(&str, &[u8])]) -> &Self {
        use std::os::unix::fs::symlink;
        use std::path::PathBuf;

        let secret_dir = self.path().join(secret);
        let generation_dir = secret_dir.join(generation);
        fs::create_dir_all(&generation_dir).expect("failed to create generation dir");
        for (key, value) in keys {
            fs::write(generation_dir.join(key), value).expect("failed to write key file");
        }

        let pointer = secret_dir.join("..data");
        if pointer.symlink_metadata().is_ok() {
            fs::remove_file(&pointer).expect("failed to replace ..data");
        }
        symlink(PathBuf::from(generation), &pointer).expect("failed to link ..data");

        for (key, _) in keys {
            let entry = secret_dir.join(key);
            if entry.symlink_metadata().is_ok() {
                fs::remove_file(&entry).expect("failed to replace key link");
            }
            symlink(PathBuf::from("..data").join(key), &entry).expect("failed to link key");
        }
        self
    }

    /// Remove a retired generation directory after a rotation.
    #[cfg(unix)]
    pub fn retire(&self, secret: &str, generation: &str) -> &Self {
        fs::remove_dir_all(self.path().join(secret).join(generation))
            .expect("failed to retire generation");
        self
    }
}
