//! Domain types for mounted secrets.
//!
//! On a pod's filesystem, a [`Secret`] is the directory a secret's volume
//! was mounted under, a [`Key`] is a file's name within it, and a [`Value`]
//! is that file's raw contents.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret name (e.g., `db`, `service-credentials`).
///
/// Corresponds to one top-level directory under the traversal root.
pub type Secret = String;

/// A key name within a secret (e.g., `password`, `hostname`).
///
/// Corresponds to one file inside the secret's directory.
pub type Key = String;

/// The raw byte content of a key's file.
///
/// No interpretation or encoding is applied. The backing memory is wiped
/// when the value is dropped, and `Debug` prints the length rather than
/// the content so values stay out of logs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Value(Vec<u8>);

impl Value {
    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Borrow the content as UTF-8, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Number of bytes in the value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(<{} bytes>)", self.0.len())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}
