//! Hash algorithm set for duplicate detection.
//!
//! This module provides the interchangeable digest algorithms used to
//! fingerprint file contents:
//!
//! - [`string_hash`]: multiplicative string hash (prime/modulo accumulator)
//! - [`hash8`]: 8-bit Pearson hash over a permutation table
//! - [`hash64`]: 64-bit Pearson hash (8 parallel 8-bit lanes)
//! - [`fnv1a32`]: 32-bit FNV-1a
//! - MD5 via the `md5` crate (default algorithm)
//!
//! Every algorithm maps a byte message to a fixed-width lowercase hex
//! [`Digest`]. Digests from different algorithms are never compared to one
//! another. Selection happens through the [`HashAlgorithm`] enum rather than
//! by resolving function names at runtime, so an unknown algorithm is a
//! parse-time error instead of a silent fallback.
//!
//! # Example
//!
//! ```
//! use hashdupe::hash::{HashAlgorithm, PearsonTable, DEFAULT_TABLE_SEED};
//!
//! let table = PearsonTable::generate(DEFAULT_TABLE_SEED);
//! let digest = HashAlgorithm::Md5.digest(b"hello", &table).unwrap();
//! assert_eq!(digest.len(), 32);
//! ```

pub mod fnv;
pub mod pearson;

use clap::ValueEnum;

// Re-export main types
pub use fnv::fnv1a32;
pub use pearson::{hash64, hash8, PearsonTable, DEFAULT_TABLE_SEED};

/// A fixed-width lowercase hexadecimal digest.
///
/// Width depends on the algorithm: 2 chars for the 8-bit Pearson hash,
/// 8 for the 32-bit hashes, 16 for the 64-bit Pearson hash, 32 for MD5.
pub type Digest = String;

/// Default multiplier for [`string_hash`].
pub const STRING_HASH_PRIME: u64 = 31;

/// Default modulo divisor for [`string_hash`] (256 keeps the value 8-bit).
pub const STRING_HASH_MODULO: u64 = 256;

/// Errors that can occur while hashing a message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The 64-bit Pearson hash seeds its lanes from the first message byte,
    /// so an empty message has no defined digest.
    #[error("64-bit Pearson hash is undefined for an empty message")]
    EmptyMessage,
}

/// The available digest algorithms.
///
/// The variant names on the command line (`string_hash`, `hash8`, `hash64`,
/// `hashfnv32a`, `hashmd5`) follow the historical names users already know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    /// Multiplicative string hash, 8 hex digits (value bounded by the modulo).
    #[value(name = "string_hash")]
    StringHash,
    /// 8-bit Pearson hash, 2 hex digits.
    #[value(name = "hash8")]
    Hash8,
    /// 64-bit Pearson hash, 16 hex digits. Rejects empty input.
    #[value(name = "hash64")]
    Hash64,
    /// 32-bit FNV-1a, 8 hex digits.
    #[value(name = "hashfnv32a")]
    Fnv32a,
    /// MD5, 32 hex digits. Default; collision probability is negligible
    /// for duplicate detection.
    #[value(name = "hashmd5")]
    Md5,
}

impl HashAlgorithm {
    /// Compute the digest of `message` with this algorithm.
    ///
    /// The Pearson table is precomputed by the caller and passed in; it is
    /// only consulted by the Pearson variants and never regenerated per call.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::EmptyMessage`] when the 64-bit Pearson hash is
    /// applied to an empty message. All other algorithms accept empty input.
    pub fn digest(self, message: &[u8], table: &PearsonTable) -> Result<Digest, HashError> {
        match self {
            Self::StringHash => Ok(string_hash(message, STRING_HASH_PRIME, STRING_HASH_MODULO)),
            Self::Hash8 => Ok(hash8(message, table)),
            Self::Hash64 => hash64(message, table),
            Self::Fnv32a => Ok(fnv1a32(message)),
            Self::Md5 => Ok(md5_hex(message)),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StringHash => write!(f, "string_hash"),
            Self::Hash8 => write!(f, "hash8"),
            Self::Hash64 => write!(f, "hash64"),
            Self::Fnv32a => write!(f, "hashfnv32a"),
            Self::Md5 => write!(f, "hashmd5"),
        }
    }
}

/// Multiplicative string hash.
///
/// Starts from 0 and folds each byte with `acc = (acc * prime + b) % modulo`.
/// The output is always formatted as 8 hex digits even though the value is
/// bounded by `modulo`; for the default modulo of 256 only the low byte
/// varies. That width is a deliberate format choice, not extra entropy.
///
/// `modulo` must be non-zero; callers normally pass the
/// [`STRING_HASH_PRIME`]/[`STRING_HASH_MODULO`] defaults.
#[must_use]
pub fn string_hash(message: &[u8], prime: u64, modulo: u64) -> Digest {
    let mut acc: u64 = 0;
    for &b in message {
        acc = acc.wrapping_mul(prime).wrapping_add(u64::from(b)) % modulo;
    }
    format!("{acc:08x}")
}

/// MD5 digest of `message` as a 32-char lowercase hex string.
#[must_use]
pub fn md5_hex(message: &[u8]) -> Digest {
    format!("{:x}", md5::compute(message))
}
