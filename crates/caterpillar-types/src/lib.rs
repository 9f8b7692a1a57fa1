//! Stable DTOs and IDs used across the caterpillar report workspace.
//!
//! This crate is intentionally boring:
//! - the support `Status` enumeration
//! - usage occurrences and the emitted report envelope
//! - stable CSS classes and section ids
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;
pub mod status;
pub mod usage;

pub use path::RepoPath;
pub use report::{ApiSection, AppMeta, ConversionReport, SCHEMA_REPORT_V1, ToolMeta};
pub use status::Status;
pub use usage::UsageOccurrence;
