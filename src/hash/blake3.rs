//! BLAKE3-based fragment fingerprinting.

use crate::fragment::FragmentHash;

/// A hasher that computes BLAKE3 fingerprints.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the hash.
    pub fn finalize(&self) -> FragmentHash {
        FragmentHash::new(self.state.finalize().into())
    }

    /// Convenience method to hash data in one shot.
    #[allow(dead_code)]
    pub(crate) fn hash(data: &[u8]) -> FragmentHash {
        FragmentHash::new(blake3::hash(data).into())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let hash = Blake3Hasher::hash(b"QUJD\n");
        assert_eq!(hash, Blake3Hasher::hash(b"QUJD\n"));
        assert_ne!(hash, Blake3Hasher::hash(b"QUJD"));
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"-----END RSA PRIVATE KEY-----");
        hasher.update(b"\n");

        let expected = Blake3Hasher::hash(b"-----END RSA PRIVATE KEY-----\n");
        assert_eq!(hasher.finalize(), expected);
    }
}
