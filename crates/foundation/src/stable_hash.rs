//! Stable hashing utilities for deterministic fingerprints.
//!
//! Combination identifiers are used as directory names and cache keys, so any
//! hash derived from them must be a pure function of the canonical string.
//! These helpers provide FNV-1a 64-bit for that purpose.
//!
//! NOTE: FNV-1a is **not** cryptographically secure.

/// 64-bit FNV-1a offset basis.
pub const FNV1A_OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
/// 64-bit FNV-1a prime.
pub const FNV1A_PRIME_64: u64 = 0x0000_0100_0000_01B3;

/// Mix bytes into an existing FNV-1a 64-bit hash state.
///
/// Start from [`FNV1A_OFFSET_BASIS_64`] for a fresh hash. Mixing two chunks
/// in sequence gives the same result as mixing their concatenation.
///
/// # Example
/// ```
/// use lattice_foundation::stable_hash::{fnv1a64, fnv1a64_mix, FNV1A_OFFSET_BASIS_64};
///
/// let h = fnv1a64_mix(FNV1A_OFFSET_BASIS_64, b"jdk=8,");
/// let h = fnv1a64_mix(h, b"os=linux");
/// assert_eq!(h, fnv1a64(b"jdk=8,os=linux"));
/// ```
#[inline]
pub const fn fnv1a64_mix(mut hash: u64, bytes: &[u8]) -> u64 {
    let mut i = 0usize;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME_64);
        i += 1;
    }
    hash
}

/// Hash an arbitrary byte slice with FNV-1a 64-bit.
#[inline]
pub const fn fnv1a64(bytes: &[u8]) -> u64 {
    fnv1a64_mix(FNV1A_OFFSET_BASIS_64, bytes)
}

/// Hash a UTF-8 string with FNV-1a 64-bit.
#[inline]
pub const fn fnv1a64_str(s: &str) -> u64 {
    fnv1a64(s.as_bytes())
}

/// Fold a 64-bit hash into 32 bits by xoring its halves.
#[inline]
pub const fn fold32(hash: u64) -> u32 {
    ((hash >> 32) ^ (hash & 0xffff_ffff)) as u32
}
