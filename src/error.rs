//! Error types for volume traversal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Walk(#[from] WalkError),
}

/// Failure to resolve the traversal root to an absolute directory path.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("unable to determine current working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Failure during the traversal itself. The walk aborts on the first error;
/// the store may already hold entries populated before the failing one.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("failed to list entries in {}: {}", .path.display(), .source)]
    Enumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read key file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
