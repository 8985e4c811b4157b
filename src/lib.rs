//! Warren - a reader for Kubernetes mounted-secrets volumes.
//!
//! Orchestrators project key/value secrets into pods as files: one directory
//! per secret, one file per key. Warren walks such a mount, including the
//! hidden generation directories and symlinks Kubernetes uses for atomic
//! secret rotation, and collects everything into an in-memory
//! secret/key/value store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/             # Core library components
//! │   ├── options       # WalkOptions (traversal source selection)
//! │   ├── resolve       # Directory-path resolution against the cwd
//! │   ├── store         # SecretStore accumulator
//! │   ├── types         # Secret, Key, Value domain types
//! │   ├── volume/       # Directory-reading capability
//! │   │   ├── mod       # Volume trait
//! │   │   ├── os        # Real-filesystem implementation
//! │   │   └── mem       # In-memory implementation for tests
//! │   └── walk          # Depth-first traversal
//! └── error             # Error types
//! ```
//!
//! # Features
//!
//! - Single traversal pass, depth-first, deterministic entry order
//! - Atomic-update layouts (`..data` pointer + generation directory) resolve
//!   to the visible secret name
//! - Hidden (dot-prefixed) entries stay out of the result
//! - Injectable filesystem so fixtures substitute for real mounts
//! - Values wiped from memory on drop
//!
//! # Example
//!
//! ```no_run
//! use warren::{SecretStore, WalkOptions};
//!
//! fn main() -> warren::Result<()> {
//!     let mut store = SecretStore::new();
//!     store.walk(&WalkOptions::new().directory("/etc/secrets"))?;
//!
//!     if let Some(password) = store.value("db", "password") {
//!         let _ = password.as_bytes();
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;

pub use crate::core::options::WalkOptions;
pub use crate::core::store::SecretStore;
pub use crate::core::types::{Key, Secret, Value};
pub use crate::core::volume::{Entry, MemVolume, OsVolume, Volume};
pub use crate::error::{Error, Result};
