//! Strong hash implementations for fragment identity.
//!
//! Fingerprints let the output layer drop fragments it has already written,
//! which matters for disk images holding many copies of the same key.
//!
//! - [`Blake3Hasher`] - BLAKE3 hash implementation (requires `hash-blake3` feature)

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub use blake3::Blake3Hasher;
