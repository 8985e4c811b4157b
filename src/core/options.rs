//! Traversal source selection.
//!
//! [`WalkOptions`] is a plain configuration value passed to
//! [`SecretStore::walk`](crate::SecretStore::walk). Callers start from the
//! pure default, chain setters for the fields they care about, and can
//! overlay one options value onto another with [`WalkOptions::merge`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::volume::Volume;

/// Options controlling where a walk reads from.
///
/// At most one source is active per walk: an injected [`Volume`] takes
/// precedence over a directory path, and with neither set the walk targets
/// the current working directory.
#[derive(Clone, Default)]
pub struct WalkOptions {
    directory: Option<PathBuf>,
    filesystem: Option<Arc<dyn Volume>>,
}

impl WalkOptions {
    /// Create the default options: no filesystem, unset directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a concrete directory, typically the secret volume mount point.
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    /// Target an injected filesystem instead of the host filesystem.
    ///
    /// Takes precedence over [`directory`](Self::directory) when both are set.
    pub fn filesystem(mut self, volume: impl Volume + 'static) -> Self {
        self.filesystem = Some(Arc::new(volume));
        self
    }

    /// Overlay `overrides` onto these options; fields set there win.
    pub fn merge(mut self, overrides: WalkOptions) -> Self {
        if let Some(directory) = overrides.directory {
            self.directory = Some(directory);
        }
        if let Some(filesystem) = overrides.filesystem {
            self.filesystem = Some(filesystem);
        }
        self
    }

    /// The configured directory path, if any.
    pub fn directory_path(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// The injected filesystem, if any.
    pub fn volume(&self) -> Option<&Arc<dyn Volume>> {
        self.filesystem.as_ref()
    }
}

impl fmt::Debug for WalkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkOptions")
            .field("directory", &self.directory)
            .field(
                "filesystem",
                &self.filesystem.as_ref().map(|_| "<injected>"),
            )
            .finish()
    }
}
