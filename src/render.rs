//! Output side of a scan: writes findings the way key files spell them.
//!
//! The scanner reports exact byte ranges. Turning those back into lines is
//! done here: END markers get the newline their literal lacks, everything
//! else is copied verbatim. Marker lines flush the underlying writer so a
//! consumer sees key boundaries as soon as they are found.

use std::io::Write;

#[cfg(feature = "hash-blake3")]
use std::collections::HashSet;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::finding::{Finding, FindingKind};
use crate::fragment::{Fragment, FragmentHash};

/// Writes findings and fragments to an [`std::io::Write`] sink.
///
/// With dedup enabled, a fragment whose rendered bytes were already written
/// through this writer is skipped. The memory spans every buffer fed to the
/// same writer, so one writer per run suppresses repeats across inputs.
///
/// # Example
///
/// ```
/// use keyfrag::{scan, FragmentWriter, ScanConfig};
///
/// let data = b"\x00-----END RSA PRIVATE KEY-----\x00";
/// let mut writer = FragmentWriter::new(Vec::new(), &ScanConfig::default())?;
/// writer.write_findings(data, scan(data))?;
///
/// assert_eq!(writer.into_inner(), b"-----END RSA PRIVATE KEY-----\n");
/// # Ok::<(), keyfrag::ScanError>(())
/// ```
#[derive(Debug)]
pub struct FragmentWriter<W: Write> {
    out: W,
    dedup: bool,
    #[cfg(feature = "hash-blake3")]
    seen: HashSet<FragmentHash>,
    written: usize,
    suppressed: usize,
}

impl<W: Write> FragmentWriter<W> {
    /// Creates a writer over `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `config` does not validate.
    pub fn new(out: W, config: &ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self {
            out,
            dedup: config.dedup(),
            #[cfg(feature = "hash-blake3")]
            seen: HashSet::new(),
            written: 0,
            suppressed: 0,
        })
    }

    /// Writes one finding taken from `buf`.
    ///
    /// Returns `Ok(false)` if the finding was suppressed as a duplicate.
    pub fn write_finding(&mut self, buf: &[u8], finding: &Finding) -> Result<bool, ScanError> {
        self.emit(finding.bytes(buf), finding.kind, None)
    }

    /// Writes every finding from `findings`, all taken from `buf`.
    ///
    /// Returns the number of findings actually written.
    pub fn write_findings<I>(&mut self, buf: &[u8], findings: I) -> Result<usize, ScanError>
    where
        I: IntoIterator<Item = Finding>,
    {
        let mut count = 0;
        for finding in findings {
            if self.write_finding(buf, &finding)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Writes one owned fragment, reusing its fingerprint when present.
    ///
    /// Returns `Ok(false)` if the fragment was suppressed as a duplicate.
    pub fn write_fragment(&mut self, fragment: &Fragment) -> Result<bool, ScanError> {
        self.emit(&fragment.data, fragment.kind, fragment.hash)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<(), ScanError> {
        self.out.flush()?;
        Ok(())
    }

    /// Returns the number of findings written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the number of findings dropped as duplicates.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the writer and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(
        &mut self,
        data: &[u8],
        kind: FindingKind,
        known: Option<FragmentHash>,
    ) -> Result<bool, ScanError> {
        if self.seen_before(data, kind, known) {
            self.suppressed += 1;
            return Ok(false);
        }

        self.out.write_all(data)?;
        if kind.needs_newline() {
            self.out.write_all(b"\n")?;
        }
        if matches!(kind, FindingKind::Marker(_)) {
            self.out.flush()?;
        }

        self.written += 1;
        Ok(true)
    }

    #[cfg(feature = "hash-blake3")]
    fn seen_before(&mut self, data: &[u8], kind: FindingKind, known: Option<FragmentHash>) -> bool {
        if !self.dedup {
            return false;
        }
        let hash = known.unwrap_or_else(|| {
            let mut hasher = crate::hash::Blake3Hasher::new();
            hasher.update(data);
            if kind.needs_newline() {
                hasher.update(b"\n");
            }
            hasher.finalize()
        });
        !self.seen.insert(hash)
    }

    #[cfg(not(feature = "hash-blake3"))]
    fn seen_before(&mut self, _: &[u8], _: FindingKind, _: Option<FragmentHash>) -> bool {
        // validate() refuses dedup without the feature.
        debug_assert!(!self.dedup);
        false
    }
}
