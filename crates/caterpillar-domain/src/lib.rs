//! Pure status resolution and usage annotation (no IO).
//!
//! Input: an API catalog built from polyfill manifests, plus a usage index produced
//! elsewhere.
//! Output: highlighted usage contexts and relevant/other warning partitions per API.

#![forbid(unsafe_code)]

pub mod error;
pub mod highlight;
pub mod model;
pub mod resolve;
pub mod usage;
pub mod warnings;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{
    annotate_not_polyfilled, annotate_polyfilled, format_general_warnings, overall_status,
    split_by_status,
};
pub use error::DomainError;
pub use highlight::{escape_html, format_html, highlight_relevant_line, starts_reference};
pub use model::{ApiCatalog, ApiDescriptor, UsageIndex, WarningEntry};
pub use resolve::resolve_status;
pub use usage::process_usage;
pub use warnings::{RenderedWarning, WarningPartition, classify_warnings, manifest_warnings};
