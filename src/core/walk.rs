//! Depth-first traversal of a secrets volume.
//!
//! One recursive pass, written once against the [`Volume`] trait, visits
//! every entry reachable from the traversal root and populates the store:
//! visible directories become secret buckets, visible files become keys.
//! Hidden (dot-prefixed) names never produce buckets or keys; a hidden
//! directory is descended only to unwind the atomic-update indirection
//! layer, where its files belong to the visible secret one level up.

use std::path::Path;

use tracing::{debug, error, trace};

use crate::core::options::WalkOptions;
use crate::core::resolve::resolve;
use crate::core::store::SecretStore;
use crate::core::types::{Secret, Value};
use crate::core::volume::{OsVolume, Volume};
use crate::error::{Result, WalkError};

/// Walk the source selected by `options` and populate `store`.
///
/// An injected filesystem takes precedence over a directory path; an unset
/// directory resolves to the current working directory. Aborts on the first
/// resolution or I/O error.
pub(crate) fn run(store: &mut SecretStore, options: &WalkOptions) -> Result<()> {
    let host;
    let volume: &dyn Volume = match options.volume() {
        Some(injected) => {
            debug!("walking injected filesystem");
            injected.as_ref()
        }
        None => {
            let directory = resolve(options.directory_path())?;
            debug!(directory = %directory.display(), "walking mounted directory");
            host = OsVolume::new(directory);
            &host
        }
    };

    let root = volume.root();
    if let Err(walk_error) = visit(volume, store, &root, &root, false) {
        error!(options = ?options, error = %walk_error, "secrets walk failed");
        return Err(walk_error.into());
    }

    debug!(secrets = store.len(), "walk complete");
    Ok(())
}

/// Visit one directory: classify each child, register buckets, record keys,
/// and recurse. `under_hidden` marks a generation directory, which holds
/// only key files.
fn visit(
    volume: &dyn Volume,
    store: &mut SecretStore,
    dir: &Path,
    root: &Path,
    under_hidden: bool,
) -> std::result::Result<(), WalkError> {
    let mut entries = volume.entries(dir).map_err(|source| WalkError::Enumerate {
        path: dir.to_path_buf(),
        source,
    })?;
    // Entries are visited in name order regardless of volume backend
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        let hidden = is_hidden(&entry.name);
        trace!(
            path = %entry.path.display(),
            name = %entry.name,
            directory = entry.is_dir,
            "visiting entry"
        );

        if entry.is_dir {
            if under_hidden {
                // Generation directories hold only key files
                continue;
            }
            if hidden {
                // Atomic-update indirection: descend so the generation's
                // files resolve to the visible secret one level up
                visit(volume, store, &entry.path, root, true)?;
            } else {
                store.register(&entry.name);
                visit(volume, store, &entry.path, root, false)?;
            }
        } else {
            if hidden {
                // The ..data pointer and other hidden entries
                continue;
            }
            let secret = match owner(&entry.path, root) {
                Some(secret) => secret,
                None => {
                    trace!(path = %entry.path.display(), "no owning secret, skipping");
                    continue;
                }
            };
            let content = volume.read(&entry.path).map_err(|source| WalkError::Read {
                path: entry.path.clone(),
                source,
            })?;
            store.put(&secret, &entry.name, Value::from(content));
        }
    }

    Ok(())
}

/// The secret a file belongs to: its parent directory's name, or the
/// grandparent's when the parent is a hidden generation directory. Files
/// directly under the traversal root have no secret to belong to.
fn owner(path: &Path, root: &Path) -> Option<Secret> {
    let parent = path.parent()?;
    if is_root(parent, root) {
        return None;
    }
    let name = name_of(parent)?;
    if !is_hidden(&name) {
        return Some(name);
    }

    let grandparent = parent.parent()?;
    if is_root(grandparent, root) {
        return None;
    }
    name_of(grandparent)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn is_root(path: &Path, root: &Path) -> bool {
    path == root || path.as_os_str().is_empty()
}

fn name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
