//! Fuzz target for usage scanning and API detection on in-memory files.
//!
//! Goal: scanning should **never panic**, including on CRLF input and huge context sizes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_usage_scan
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ScanInput {
    text: String,
    apis: Vec<String>,
    context_size: u32,
}

fuzz_target!(|input: ScanInput| {
    if input.apis.len() > 16 || input.text.len() > 16384 {
        return;
    }
    let _ = caterpillar_repo::fuzz::scan_text(&input.text, &input.apis, input.context_size);
    let _ = caterpillar_repo::fuzz::detect_text(&input.text);
});
