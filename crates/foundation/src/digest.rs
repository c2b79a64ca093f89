//! Short fingerprints of canonical strings.
//!
//! A fingerprint is a fixed-width, human-displayable tag derived from a
//! canonical combination string. It is not a security primitive; the only
//! contract is that it is deterministic and eight characters wide.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::stable_hash::{fnv1a64_str, fold32};

/// Width in characters of every short digest.
pub const SHORT_DIGEST_LEN: usize = 8;

/// A pure `string -> string` fingerprint function.
pub type DigestFn = fn(&str) -> String;

/// First eight lowercase hex characters of the SHA-256 of `s`.
///
/// ```
/// use lattice_foundation::digest::sha256_short;
///
/// assert_eq!(sha256_short("abc"), "ba7816bf");
/// ```
pub fn sha256_short(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let full = hasher.finalize();
    hex::encode(&full[..SHORT_DIGEST_LEN / 2])
}

/// FNV-1a 64-bit of `s`, folded to 32 bits and rendered as eight hex characters.
pub fn fnv1a_short(s: &str) -> String {
    format!("{:08x}", fold32(fnv1a64_str(s)))
}

/// Selectable fingerprint algorithm, for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// Truncated SHA-256.
    #[default]
    Sha256,
    /// Folded FNV-1a 64-bit.
    Fnv1a,
}

impl DigestAlgorithm {
    /// The function implementing this algorithm.
    pub fn function(self) -> DigestFn {
        match self {
            DigestAlgorithm::Sha256 => sha256_short,
            DigestAlgorithm::Fnv1a => fnv1a_short,
        }
    }

    /// Fingerprint `s` with this algorithm.
    pub fn apply(self, s: &str) -> String {
        (self.function())(s)
    }
}
