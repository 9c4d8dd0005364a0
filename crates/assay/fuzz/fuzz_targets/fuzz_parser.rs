//! Fuzz target for the table parser.
//!
//! This fuzzer tests that the CSV/TSV parser:
//! 1. Never panics on malformed input
//! 2. Handles all delimiter combinations
//! 3. Always produces rectangular rows

#![no_main]

use assay::input::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let outcome = Parser::new().parse(text);
        let width = outcome.table.headers.len();
        assert!(outcome.table.rows.iter().all(|row| row.len() == width));

        let _ = assay::profile(text, None);
    }
});
