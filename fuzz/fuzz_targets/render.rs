#![no_main]

use libfuzzer_sys::fuzz_target;
use keyfrag::{FragmentWriter, ScanConfig, scan};

fuzz_target!(|data: Vec<u8>| {
    let mut writer = FragmentWriter::new(Vec::new(), &ScanConfig::default()).unwrap();
    let written = writer.write_findings(&data, scan(&data)).unwrap();
    let out = writer.into_inner();

    // Verify: every rendered finding is one line
    let lines = out.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(lines, written);
    assert!(out.is_empty() || out.ends_with(b"\n"));

    // Verify: with dedup, no line comes out twice
    let config = ScanConfig::new(true).unwrap();
    let mut writer = FragmentWriter::new(Vec::new(), &config).unwrap();
    writer.write_findings(&data, scan(&data)).unwrap();
    let deduped = writer.into_inner();
    let mut seen = std::collections::HashSet::new();
    for line in deduped.split_inclusive(|&b| b == b'\n') {
        assert!(seen.insert(line.to_vec()));
    }
});
