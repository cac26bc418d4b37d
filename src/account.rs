//! Account hash derivation.
//!
//! An account hash is the stable on-network identifier for a key pair,
//! decoupled from the raw public key bytes. It is the blake2b-256 digest of
//! the domain-separated input
//!
//! ```text
//! lowercase-algorithm-name || 0x00 || public-key-bytes
//! ```
//!
//! so keys of different signature algorithms can never collide on the same
//! identifier. The layout must stay bit-compatible with the network's
//! account addressing; see DESIGN.md before changing it.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::crypto::PublicKey;

type Blake2b256 = Blake2b<U32>;

/// Length in bytes of an account hash.
pub const ACCOUNT_HASH_LENGTH: usize = 32;

/// Domain separator naming the key algorithm, hashed ahead of the key bytes.
const ALGORITHM_NAME: &[u8] = b"ed25519";

/// A fixed-length digest identifying an account by its public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountHash([u8; ACCOUNT_HASH_LENGTH]);

impl AccountHash {
    /// Derive the account hash for a public key.
    ///
    /// Deterministic: the same public key always yields the same hash.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(ALGORITHM_NAME);
        hasher.update([0u8]);
        hasher.update(public_key.to_bytes());
        Self(hasher.finalize().into())
    }

    /// Construct from raw digest bytes.
    pub fn from_bytes(bytes: [u8; ACCOUNT_HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_HASH_LENGTH] {
        &self.0
    }

    /// Lowercase hexadecimal rendering of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for AccountHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
