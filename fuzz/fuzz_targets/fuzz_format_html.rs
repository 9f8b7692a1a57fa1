//! Fuzz target for API highlighting.
//!
//! Goal: highlighting arbitrary text against a small catalog should **never panic**.
//! Unknown APIs are reported as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_format_html
//! ```

#![no_main]

use arbitrary::Arbitrary;
use caterpillar_domain::{
    ApiCatalog, ApiDescriptor, WarningEntry, escape_html, format_html, highlight_relevant_line,
};
use caterpillar_types::Status;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct HighlightInput {
    text: String,
    /// Warning members added to `chrome.power`.
    members: Vec<String>,
    offset: usize,
}

fuzz_target!(|input: HighlightInput| {
    if input.members.len() > 32 || input.text.len() > 4096 {
        return;
    }

    let mut power = ApiDescriptor::new("power", Status::Partial);
    for member in input.members {
        power = power.with_warning(WarningEntry::unsupported(member));
    }
    let catalog = ApiCatalog::new([
        power,
        ApiDescriptor::new("app.window", Status::Total),
        ApiDescriptor::new("tts", Status::None),
    ]);

    let escaped = escape_html(&input.text);
    let _ = format_html(&escaped, &catalog);
    let _ = highlight_relevant_line(&escaped, input.offset, &catalog);
});
