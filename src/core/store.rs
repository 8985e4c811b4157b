//! The secret accumulator.
//!
//! [`SecretStore`] is the two-level mapping the walker populates:
//! secret name → key name → raw value. Construction yields an empty map
//! ready for direct population; mutation happens only inside a walk call.

use std::collections::BTreeMap;

use crate::core::options::WalkOptions;
use crate::core::types::{Key, Secret, Value};
use crate::core::walk;
use crate::error::Result;

/// Mapping of secret name to key/value entries collected from a mount.
///
/// Deterministically ordered. A non-error walk leaves one bucket per
/// directory visited and one key per file read; after a failed walk the
/// contents are partial and should be discarded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct SecretStore {
    secrets: BTreeMap<Secret, BTreeMap<Key, Value>>,
}

impl SecretStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk a mounted volume and populate the store.
    ///
    /// The traversal source comes from `options`: an injected filesystem
    /// takes precedence over a directory path, and an unset directory
    /// resolves to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or I/O error encountered. The store may
    /// already contain entries populated before the failure; treat a
    /// returned error as "traversal incomplete."
    pub fn walk(&mut self, options: &WalkOptions) -> Result<()> {
        walk::run(self, options)
    }

    /// All keys and values of one secret.
    pub fn get(&self, secret: &str) -> Option<&BTreeMap<Key, Value>> {
        self.secrets.get(secret)
    }

    /// A single value, looked up by secret then key.
    pub fn value(&self, secret: &str, key: &str) -> Option<&Value> {
        self.secrets.get(secret).and_then(|keys| keys.get(key))
    }

    /// Names of all secrets in the store.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.secrets.keys().map(String::as_str)
    }

    /// Iterate over every secret and its key/value entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Secret, &BTreeMap<Key, Value>)> {
        self.secrets.iter()
    }

    /// Number of secrets in the store.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether the store holds no secrets.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Register a bucket for a visited directory.
    ///
    /// Installs a fresh empty bucket, replacing any previous bucket of the
    /// same name. This reset is what lets a repeat walk over a rotated mount
    /// drop keys that belonged to a retired generation.
    pub(crate) fn register(&mut self, secret: &str) {
        self.secrets.insert(secret.to_string(), BTreeMap::new());
    }

    /// Record one key's value under a secret.
    pub(crate) fn put(&mut self, secret: &str, key: &str, value: Value) {
        self.secrets
            .entry(secret.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }
}
