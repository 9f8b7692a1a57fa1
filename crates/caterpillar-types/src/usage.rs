use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One located reference to an API member in converted output.
///
/// Field order is the sort order: file first, then line.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct UsageOccurrence {
    pub path: RepoPath,
    /// 1-based line of the reference.
    pub line: u32,
    /// Source window around `line`, newlines preserved.
    pub context: String,
    /// 1-based line of the first line of `context`.
    pub context_start: u32,
}

impl UsageOccurrence {
    /// Zero-based index of the referencing line inside `context`.
    pub fn relevant_offset(&self) -> Option<usize> {
        self.line
            .checked_sub(self.context_start)
            .map(|offset| offset as usize)
    }
}
