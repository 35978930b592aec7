//! Digest engine for the hash calculator.
//!
//! This module provides the [`HashAlgorithm`] enum and the [`digest_hex`]
//! function that computes lowercase hex digests. It backs the hash
//! calculator page and the `devkit hash` subcommand.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// A digest algorithm supported by the hash calculator.
///
/// # Examples
///
/// ```
/// use dk_core::HashAlgorithm;
///
/// let algorithm = HashAlgorithm::Sha256;
/// assert_eq!(algorithm.label(), "SHA-256");
/// assert_eq!(algorithm.output_len(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum HashAlgorithm {
    /// SHA-256 (32-byte digest).
    #[default]
    Sha256,

    /// SHA-1 (20-byte digest).
    ///
    /// Kept for interoperability with tools that still expect it; not
    /// collision resistant.
    Sha1,

    /// SHA-512 (64-byte digest).
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms, in selector order.
    pub const ALL: &'static [Self] = &[Self::Sha256, Self::Sha1, Self::Sha512];

    /// Returns a human-readable label for this algorithm.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha1 => "SHA-1",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Returns the digest length in bytes.
    #[inline]
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha1 => 20,
            Self::Sha512 => 64,
        }
    }

    /// Returns the next algorithm in selector order, wrapping around.
    ///
    /// Used by the hash calculator page to cycle through algorithms.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sha256 => Self::Sha1,
            Self::Sha1 => Self::Sha512,
            Self::Sha512 => Self::Sha256,
        }
    }
}

/// Computes the digest of `input` and returns it as lowercase hex.
///
/// # Examples
///
/// ```
/// use dk_core::{digest_hex, HashAlgorithm};
///
/// let digest = digest_hex(HashAlgorithm::Sha256, b"abc");
/// assert_eq!(
///     digest,
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[must_use]
pub fn digest_hex(algorithm: HashAlgorithm, input: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input)),
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(input)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input)),
    }
}
