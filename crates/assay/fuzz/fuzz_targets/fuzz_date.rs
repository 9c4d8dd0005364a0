//! Fuzz target for date detection and type inference.
//!
//! This fuzzer tests that the type inference engine:
//! 1. Never panics on any input values
//! 2. Correctly handles malformed dates
//! 3. Regex-based date detection doesn't crash on pathological input

#![no_main]

use assay::inference::{is_date, parse_date};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = is_date(content);
        let _ = parse_date(content);

        // Header + single data row exercises inference on the fuzzed value
        let tsv = format!("col1\tcol2\tcol3\n{}\t{}\t{}\n", content, content, content);
        let _ = assay::profile(&tsv, Some('\t'));
    }
});
