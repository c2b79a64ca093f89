//! Lattice Foundation
//!
//! Axis definitions and hashing primitives shared by the lattice crates.
//! An axis is a named, ordered set of distinct string values; an axis list
//! is an ordered set of axes with unique names and defines the coordinate
//! system every combination lives in.

pub mod axis;
pub mod digest;
pub mod stable_hash;

pub use axis::{Axis, AxisError, AxisList};
pub use digest::{fnv1a_short, sha256_short, DigestAlgorithm, DigestFn, SHORT_DIGEST_LEN};
pub use stable_hash::{fnv1a64, fnv1a64_mix, fnv1a64_str, FNV1A_OFFSET_BASIS_64, FNV1A_PRIME_64};
