//! Fragment types.
//!
//! - [`Fragment`] - Owned finding with data, offset, kind, hash
//! - [`FragmentHash`] - 32-byte fingerprint of the rendered fragment

mod data;
mod hash;

pub use data::Fragment;
pub use hash::FragmentHash;
