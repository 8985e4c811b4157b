//! Directory-path resolution.
//!
//! Turns a possibly-empty directory reference into an absolute path without
//! the traversal core ever touching process-global state itself.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Resolve a directory reference to an absolute path.
///
/// `None` or an empty path resolves to the current working directory; a
/// relative path is joined onto it; an absolute path passes through.
///
/// # Errors
///
/// Returns [`ResolveError::CurrentDir`] if the working directory cannot be
/// determined while it is needed.
pub fn resolve(directory: Option<&Path>) -> Result<PathBuf, ResolveError> {
    match directory {
        Some(path) if !path.as_os_str().is_empty() => {
            if path.is_absolute() {
                Ok(path.to_path_buf())
            } else {
                Ok(current_dir()?.join(path))
            }
        }
        _ => current_dir(),
    }
}

fn current_dir() -> Result<PathBuf, ResolveError> {
    env::current_dir().map_err(ResolveError::CurrentDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_passes_through() {
        let resolved = resolve(Some(Path::new("/etc/secrets"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/secrets"));
    }

    #[test]
    fn test_unset_resolves_to_working_directory() {
        let resolved = resolve(None).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn test_empty_resolves_to_working_directory() {
        let resolved = resolve(Some(Path::new(""))).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn test_relative_path_joins_working_directory() {
        let resolved = resolve(Some(Path::new("mounts/db"))).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap().join("mounts/db"));
        assert!(resolved.is_absolute());
    }
}
