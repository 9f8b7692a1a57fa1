//! Rendering for conversion reports (standalone HTML page, Markdown summary).
//!
//! Renderers never highlight anything themselves: contexts and warnings in the report
//! are already escaped HTML and are inserted as-is. Everything else is escaped here.

#![forbid(unsafe_code)]

mod html;
mod markdown;

pub use html::{
    render_full, render_general_warnings, render_not_polyfilled, render_polyfilled,
    render_summary,
};
pub use markdown::render_markdown;

#[cfg(test)]
mod test_support;
