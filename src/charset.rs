//! Byte-class tables used by the scanner.
//!
//! Membership is a single table lookup. The tables are built at compile time
//! from the literal alphabets and are never mutated.

/// A fixed set of allowed byte values.
///
/// Byte `0x00` is never a member, whatever the alphabet the set was built
/// from contains.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CharSet {
    table: [bool; 256],
}

impl CharSet {
    /// Builds a set from an alphabet.
    pub const fn new(alphabet: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < alphabet.len() {
            table[alphabet[i] as usize] = true;
            i += 1;
        }
        // NUL is excluded even if the alphabet spells it out.
        table[0] = false;
        Self { table }
    }

    /// Returns true if `byte` is in the set.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    /// Returns the length of the run of member bytes at the start of `data`.
    #[inline]
    pub fn run_len(&self, data: &[u8]) -> usize {
        data.iter().take_while(|&&b| self.contains(b)).count()
    }

    /// Returns the index of the first member byte in `data`, if any.
    #[inline]
    pub fn find(&self, data: &[u8]) -> Option<usize> {
        data.iter().position(|&b| self.contains(b))
    }
}

impl std::fmt::Debug for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: String = (0u8..=255)
            .filter(|&b| self.contains(b))
            .map(char::from)
            .collect();
        f.debug_tuple("CharSet").field(&members).finish()
    }
}

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/-";

/// Bytes that may begin a candidate match.
pub static START_CHARS: CharSet = CharSet::new(ALPHABET);

/// Bytes allowed in the body of a base64 chunk.
pub static B64_CHARS: CharSet = CharSet::new(ALPHABET);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_members() {
        for &b in ALPHABET {
            assert!(START_CHARS.contains(b), "{} should start a match", b as char);
            assert!(B64_CHARS.contains(b), "{} should be base64", b as char);
        }
    }

    #[test]
    fn test_non_members() {
        for &b in b"=\n\r \t.:_!\"'\x7f\xff" {
            assert!(!START_CHARS.contains(b));
            assert!(!B64_CHARS.contains(b));
        }
    }

    #[test]
    fn test_nul_never_member() {
        let set = CharSet::new(b"\0abc");
        assert!(!set.contains(0));
        assert!(set.contains(b'a'));
        assert!(!START_CHARS.contains(0));
        assert!(!B64_CHARS.contains(0));
    }

    #[test]
    fn test_run_len_and_find() {
        assert_eq!(B64_CHARS.run_len(b"QUJD==\n"), 4);
        assert_eq!(B64_CHARS.run_len(b""), 0);
        assert_eq!(B64_CHARS.run_len(b"=QUJD"), 0);
        assert_eq!(START_CHARS.find(b"\0\0\n  x"), Some(5));
        assert_eq!(START_CHARS.find(b"\0\0\n"), None);
    }

    #[test]
    fn test_debug_lists_members() {
        let set = CharSet::new(b"ba");
        assert_eq!(format!("{:?}", set), "CharSet(\"ab\")");
    }
}
