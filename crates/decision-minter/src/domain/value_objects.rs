//! # Value Objects
//!
//! Immutable domain primitives for the minter.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Length in bytes of a content hash.
pub const CONTENT_HASH_LEN: usize = 32;

// =============================================================================
// PRINCIPAL
// =============================================================================

/// A principal address (e.g. `ST1ARCHIVER`).
///
/// Callers, recipients, the archiver role and collaborator contracts are all
/// principals. Equality is exact string equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Creates a principal from anything string-like.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Principal {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl PartialEq<str> for Principal {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Principal {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// CONTENT HASH (32 bytes)
// =============================================================================

/// A 32-byte content hash identifying the archived content of a submission.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; CONTENT_HASH_LEN]);

impl ContentHash {
    /// The zero hash.
    pub const ZERO: Self = Self([0u8; CONTENT_HASH_LEN]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; CONTENT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; CONTENT_HASH_LEN]>::try_from(slice).ok().map(Self)
    }

    /// Parses a 64-character hex string. Returns None on bad hex or length.
    #[must_use]
    pub fn from_hex(encoded: &str) -> Option<Self> {
        let bytes = hex::decode(encoded).ok()?;
        Self::from_slice(&bytes)
    }

    /// SHA-256 digest of arbitrary content.
    #[must_use]
    pub fn digest(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CONTENT_HASH_LEN] {
        &self.0
    }

    /// Lowercase hex encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}...{}",
            hex::encode(&self.0[..4]),
            hex::encode(&self.0[28..])
        )
    }
}

impl From<[u8; CONTENT_HASH_LEN]> for ContentHash {
    fn from(bytes: [u8; CONTENT_HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ContentHash> for [u8; CONTENT_HASH_LEN] {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
