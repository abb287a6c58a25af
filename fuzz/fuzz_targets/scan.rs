#![no_main]

use libfuzzer_sys::fuzz_target;
use keyfrag::{FindingKind, ScanConfig, Scanner, scan};

fuzz_target!(|data: Vec<u8>| {
    // Verify: ranges are in bounds, non-empty, ascending and disjoint
    let findings: Vec<_> = scan(&data).collect();
    let mut last_end = 0usize;
    for f in &findings {
        assert!(f.start < f.end);
        assert!(f.end <= data.len());
        assert!(f.start >= last_end);
        last_end = f.end;

        // Verify: marker findings are the literal, with a byte to spare
        if let FindingKind::Marker(m) = f.kind {
            assert_eq!(f.bytes(&data), m.literal());
            assert!(f.end < data.len());
        }
    }

    // Verify: determinism - the owned scan reports the same ranges
    let fragments = Scanner::new(ScanConfig::default()).scan_bytes(data.clone());
    assert_eq!(findings.len(), fragments.len());
    for (f, frag) in findings.iter().zip(&fragments) {
        assert_eq!(frag.offset, f.start as u64);
        assert_eq!(&frag.data[..], f.bytes(&data));
        assert!(frag.hash.is_some());
    }
});
