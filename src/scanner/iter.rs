//! The forward scan: per-position decision and the lazy [`Findings`] iterator.
//!
//! The scan keeps a single cursor that only ever moves forward. At each
//! candidate position (the first start-set byte at or after the cursor) one
//! of three things happens:
//!
//! 1. A marker literal matches: it is reported and the cursor jumps past it.
//! 2. The position starts a line and a base64 run follows, closed by a
//!    newline within [`TRAILER_BUDGET`] bytes: it is reported and the cursor
//!    jumps past the newline.
//! 3. Neither: the cursor moves to where the attempt stopped, which is at
//!    least one byte further.
//!
//! An abandoned base64 attempt keeps the bytes its lookahead consumed; they
//! are never revisited as candidate starts.

use std::iter::FusedIterator;

use log::trace;

use crate::charset::{B64_CHARS, START_CHARS};
use crate::finding::Finding;
use crate::marker::Marker;

/// Maximum number of bytes examined after a base64 run: up to two `=` and the
/// closing newline.
pub const TRAILER_BUDGET: usize = 3;

/// Outcome of examining one candidate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Where the scan continues. Always greater than the examined position.
    pub next: usize,
    /// What was found at the position, if anything.
    pub finding: Option<Finding>,
}

impl Step {
    fn skip(pos: usize) -> Self {
        Self {
            next: pos + 1,
            finding: None,
        }
    }

    fn found(finding: Finding) -> Self {
        Self {
            next: finding.end,
            finding: Some(finding),
        }
    }
}

/// Examines the candidate position `pos` in `data`.
///
/// `pos` must be in bounds. Callers normally pass a start-set byte, but any
/// position is handled.
///
/// # Panics
///
/// Panics if `pos >= data.len()`.
pub fn step(data: &[u8], pos: usize) -> Step {
    let step = decide(data, pos);
    debug_assert!(step.next > pos, "scan must advance");
    debug_assert!(step.next <= data.len());
    step
}

fn decide(data: &[u8], pos: usize) -> Step {
    if data[pos] == b'-' {
        if let Some(marker) = Marker::find_at(data, pos) {
            return Step::found(Finding::marker(marker, pos));
        }
    }

    // Chunks only begin right after a newline. Offset 0 has no preceding
    // byte and never qualifies.
    if pos == 0 || data[pos - 1] != b'\n' {
        return Step::skip(pos);
    }

    let run = B64_CHARS.run_len(&data[pos..]);
    if run == 0 {
        return Step::skip(pos);
    }

    let mut next = pos + run;
    let mut closed = false;
    for _ in 0..TRAILER_BUDGET {
        match data.get(next).copied() {
            Some(b'=') => next += 1,
            Some(b'\n') => {
                next += 1;
                closed = true;
                break;
            }
            // Anything else, or the end of the buffer.
            _ => break,
        }
    }

    if closed {
        Step::found(Finding::chunk(pos, next))
    } else {
        trace!("abandoned base64 candidate at {}..{}", pos, next);
        Step { next, finding: None }
    }
}

/// A lazy iterator over the findings in a buffer, in buffer order.
///
/// Created by [`Scanner::scan`](crate::Scanner::scan) or [`scan`](crate::scan).
/// The iterator borrows the buffer and never copies it. Findings come out
/// ascending and non-overlapping; once `None` is returned it stays `None`.
///
/// # Example
///
/// ```
/// use keyfrag::{scan, FindingKind};
///
/// let data = b"\xff\x00-----END RSA PRIVATE KEY-----\n";
/// let findings: Vec<_> = scan(data).collect();
///
/// assert_eq!(findings.len(), 1);
/// assert!(matches!(findings[0].kind, FindingKind::Marker(_)));
/// assert_eq!(findings[0].start, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Findings<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> Findings<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Returns the current cursor: every byte before it has been consumed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the buffer being scanned.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl Iterator for Findings<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.data.len() {
            let Some(skip) = START_CHARS.find(&self.data[self.cursor..]) else {
                self.cursor = self.data.len();
                break;
            };
            let pos = self.cursor + skip;

            let step = step(self.data, pos);
            self.cursor = step.next;

            if step.finding.is_some() {
                return step.finding;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every finding covers at least one unconsumed byte.
        (0, Some(self.data.len() - self.cursor))
    }
}

impl FusedIterator for Findings<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingKind;

    fn ranges(data: &[u8]) -> Vec<(usize, usize)> {
        Findings::new(data).map(|f| (f.start, f.end)).collect()
    }

    #[test]
    fn test_step_marker() {
        let data = b"-----END RSA PRIVATE KEY-----\n";
        let step = step(data, 0);
        assert_eq!(step.next, 29);
        assert_eq!(
            step.finding.map(|f| f.kind),
            Some(FindingKind::Marker(Marker::RsaEnd))
        );
    }

    #[test]
    fn test_step_not_after_newline() {
        let data = b"xQUJD\n";
        assert_eq!(step(data, 1), Step::skip(1));
        assert_eq!(step(data, 0), Step::skip(0));
    }

    #[test]
    fn test_step_chunk_closed() {
        let data = b"\nQUJD=\nrest";
        let step = step(data, 1);
        assert_eq!(step.next, 7);
        assert_eq!(step.finding, Some(Finding::chunk(1, 7)));
    }

    #[test]
    fn test_step_abandon_stops_at_other_byte() {
        let data = b"\nQUJD=?\n";
        let step = step(data, 1);
        assert_eq!(step.finding, None);
        // The '=' was consumed, the '?' was not.
        assert_eq!(step.next, 6);
    }

    #[test]
    fn test_step_abandon_budget_exhausted() {
        let data = b"\nQUJD===\n";
        let step = step(data, 1);
        assert_eq!(step.finding, None);
        assert_eq!(step.next, 8);
    }

    #[test]
    fn test_step_abandon_at_buffer_end() {
        let data = b"\nQUJD";
        let step = step(data, 1);
        assert_eq!(step.finding, None);
        assert_eq!(step.next, 5);
    }

    #[test]
    fn test_step_dash_without_marker_falls_through() {
        // A lone '-' line is a valid base64-alphabet chunk.
        let data = b"\n--\n";
        assert_eq!(step(data, 1).finding, Some(Finding::chunk(1, 4)));
    }

    #[test]
    fn test_iter_skips_garbage() {
        let data = b"\x00\x01\xfe\nQUJD\n\x00";
        assert_eq!(ranges(data), vec![(4, 9)]);
    }

    #[test]
    fn test_iter_fused_and_cursor() {
        let data = b"\nQUJD\n";
        let mut it = Findings::new(data);
        assert!(it.next().is_some());
        assert_eq!(it.cursor(), data.len());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_abandoned_lookahead_not_revisited() {
        // The first attempt consumes "==" and stops on '?'. "ab" after the
        // '?' is not line-initial, so nothing is reported.
        assert_eq!(ranges(b"\nQU==?ab\n"), vec![]);
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let data = b"\nQUJD\n\nQUJD\n";
        let it = Findings::new(data);
        assert_eq!(it.size_hint(), (0, Some(data.len())));
    }
}
