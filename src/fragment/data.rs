//! The Fragment type - an owned key fragment cut out of a scanned buffer.

use bytes::Bytes;
use std::fmt;

use super::FragmentHash;
use crate::finding::FindingKind;

/// A key fragment with metadata.
///
/// `data` holds exactly the matched bytes. Like [`Finding`](crate::Finding),
/// END marker fragments need one `\n` appended when written out; use
/// [`Fragment::rendered`] or [`FragmentWriter`](crate::FragmentWriter) rather
/// than writing `data` directly.
///
/// # Example
///
/// ```
/// use keyfrag::{Fragment, FindingKind};
/// use bytes::Bytes;
///
/// let fragment = Fragment::new(Bytes::from_static(b"QUJD\n"), 1, FindingKind::Base64Chunk);
///
/// assert_eq!(fragment.range(), 1..6);
/// assert_eq!(&fragment.rendered()[..], b"QUJD\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The matched bytes (a zero-copy slice of the scanned buffer).
    pub data: Bytes,

    /// Offset of the first byte in the scanned buffer.
    pub offset: u64,

    /// What was matched.
    pub kind: FindingKind,

    /// Fingerprint of the rendered fragment (if computed).
    pub hash: Option<FragmentHash>,
}

impl Fragment {
    /// Creates a new fragment without a hash.
    pub fn new(data: impl Into<Bytes>, offset: u64, kind: FindingKind) -> Self {
        Self {
            data: data.into(),
            offset,
            kind,
            hash: None,
        }
    }

    /// Sets the hash.
    pub fn set_hash(mut self, hash: FragmentHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Returns the length of the matched data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the fragment has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the fragment as a range of the scanned buffer.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }

    /// Returns true if one `\n` must follow `data` on output.
    pub fn needs_newline(&self) -> bool {
        self.kind.needs_newline()
    }

    /// Returns the bytes as they are written out.
    ///
    /// This only allocates for END markers.
    pub fn rendered(&self) -> Bytes {
        if !self.needs_newline() {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len() + 1);
        out.extend_from_slice(&self.data);
        out.push(b'\n');
        Bytes::from(out)
    }

    /// Consumes the fragment and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({}, {} bytes @ {}", self.kind, self.len(), self.offset)?;
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}
