//! Fragment fingerprint type.

use std::fmt;

/// A fixed-size fingerprint of a rendered fragment.
///
/// This is a thin wrapper around a 32-byte array (BLAKE3 hash). Two
/// fragments with the same rendered bytes have the same fingerprint no matter
/// where, or in which input, they were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentHash([u8; 32]);

impl FragmentHash {
    /// The size of the hash in bytes.
    pub const SIZE: usize = 32;

    /// Creates a new fingerprint from a byte array.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the hash as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses a hash from a hex string.
    ///
    /// Returns `None` if the string is not exactly 64 hex digits.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != Self::SIZE * 2 || !hex_str.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for FragmentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for FragmentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let hash = FragmentHash::new([0xABu8; 32]);
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_hex_parse() {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&[0x01, 0x23, 0xcd, 0xef]);
        let hash = FragmentHash::new(bytes);
        assert_eq!(FragmentHash::from_hex(&hash.to_hex()), Some(hash));
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(FragmentHash::from_hex("abc").is_none());
        assert!(FragmentHash::from_hex(&"zz".repeat(32)).is_none());
        // 64 bytes but not ASCII-aligned pairs
        assert!(FragmentHash::from_hex(&format!("é{}", "0".repeat(62))).is_none());
    }

    #[test]
    fn test_display_prefix() {
        let mut full = [0u8; 32];
        full[..8].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        assert!(FragmentHash::new(full).to_string().starts_with("0123456789abcdef"));
    }
}
