/// Failures that make a report internally inconsistent.
///
/// None of these are recoverable per API: the caller aborts the whole report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Highlighted text references an API that is missing from the catalog.
    #[error("chrome.{api} is referenced but has no polyfill manifest entry")]
    UnknownApi { api: String },

    #[error("line offset {offset} is outside a context of {lines} line(s)")]
    LineOutsideContext { offset: usize, lines: usize },

    #[error("usage at {path}:{line} lies outside its context starting at line {context_start}")]
    UsageOutsideContext {
        path: String,
        line: u32,
        context_start: u32,
    },
}
