//! Scanner output: byte ranges tagged with what was found there.

use std::fmt;
use std::ops::Range;

use crate::marker::Marker;

/// What a [`Finding`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// One of the fixed marker lines.
    Marker(Marker),
    /// A newline-preceded base64-like run, including any `=` padding and the
    /// terminating newline.
    Base64Chunk,
}

/// A match reported by the scanner, as the byte range `[start, end)` into
/// the scanned buffer.
///
/// # Rendering
///
/// The range never contains bytes beyond what was matched. END markers do not
/// include a newline, so whoever writes a finding out must append one; see
/// [`Finding::needs_newline`]. BEGIN markers and base64 chunks already end in
/// `\n` and are written verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Finding {
    /// What was matched.
    pub kind: FindingKind,
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Finding {
    pub(crate) fn marker(marker: Marker, start: usize) -> Self {
        Self {
            kind: FindingKind::Marker(marker),
            start,
            end: start + marker.len(),
        }
    }

    pub(crate) fn chunk(start: usize, end: usize) -> Self {
        Self {
            kind: FindingKind::Base64Chunk,
            start,
            end,
        }
    }

    /// Returns the finding as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of matched bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range is empty. The scanner never produces one.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the marker, if this is a marker finding.
    pub fn marker_kind(&self) -> Option<Marker> {
        match self.kind {
            FindingKind::Marker(m) => Some(m),
            FindingKind::Base64Chunk => None,
        }
    }

    /// Returns true if one `\n` must be written after the matched bytes.
    pub fn needs_newline(&self) -> bool {
        self.kind.needs_newline()
    }

    /// Returns the number of bytes the finding occupies once rendered.
    pub fn rendered_len(&self) -> usize {
        self.len() + usize::from(self.needs_newline())
    }

    /// Returns the matched bytes from the buffer the finding came from.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than `end`, i.e. it is not the buffer
    /// that was scanned.
    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.range()]
    }
}

impl FindingKind {
    /// Returns true if a rendered finding of this kind needs a synthesized
    /// trailing newline.
    pub fn needs_newline(&self) -> bool {
        match self {
            FindingKind::Marker(m) => !m.ends_with_newline(),
            FindingKind::Base64Chunk => false,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::Marker(m) => write!(f, "marker:{}", m),
            FindingKind::Base64Chunk => f.write_str("base64"),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.kind, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_span() {
        let f = Finding::marker(Marker::OpensshBegin, 10);
        assert_eq!(f.range(), 10..46);
        assert_eq!(f.marker_kind(), Some(Marker::OpensshBegin));
        assert!(!f.needs_newline());
        assert_eq!(f.rendered_len(), 36);
    }

    #[test]
    fn test_end_marker_needs_newline() {
        let f = Finding::marker(Marker::RsaEnd, 0);
        assert!(f.needs_newline());
        assert_eq!(f.rendered_len(), 30);
    }

    #[test]
    fn test_chunk_verbatim() {
        let f = Finding::chunk(1, 6);
        assert_eq!(f.len(), 5);
        assert!(!f.is_empty());
        assert!(!f.needs_newline());
        assert_eq!(f.marker_kind(), None);
        assert_eq!(f.bytes(b"\nQUJD\n"), b"QUJD\n");
    }

    #[test]
    fn test_display() {
        assert_eq!(Finding::chunk(3, 8).to_string(), "base64 [3, 8)");
        assert_eq!(
            Finding::marker(Marker::RsaEnd, 0).to_string(),
            "marker:rsa-end [0, 29)"
        );
    }
}
