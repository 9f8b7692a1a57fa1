//! Use case orchestration for caterpillar.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod render;
mod report;
mod run;
mod source;

pub use render::{render_html, render_markdown};
pub use report::{ReportInput, generate_report, parse_report_json, serialize_report};
pub use run::{RunInput, run_apis, run_report};
pub use source::UsageSource;
