//! Command tree digest

use crate::constants::DIGEST_LENGTH;
use std::fmt;

/// Fixed-size fingerprint of a declared command set
///
/// Two command sets with identical canonical payloads always produce the same
/// digest; the digest is persisted between runs to decide whether a sync is
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandDigest([u8; DIGEST_LENGTH]);

impl CommandDigest {
    /// Wrap raw digest bytes
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build a digest from a 64-bit hash, stored big-endian
    pub const fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }

    /// Parse a persisted record
    ///
    /// Returns `None` when the record does not hold exactly one digest, which
    /// covers the empty "never synced" sentinel.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; DIGEST_LENGTH]>::try_from(bytes).ok().map(Self)
    }

    /// Raw digest bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for CommandDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
