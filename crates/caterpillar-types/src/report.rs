use crate::{Status, UsageOccurrence};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for conversion reports.
pub const SCHEMA_REPORT_V1: &str = "caterpillar.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The converted Chrome App, as named in its `manifest.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One API as it appears in the report.
///
/// Strings in `usage[].context`, `relevant_warnings` and `other_warnings` are
/// already escaped and highlighted HTML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiSection {
    pub name: String,
    pub status: Status,
    pub usage: Vec<UsageOccurrence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_warnings: Vec<String>,
}

/// Everything the renderers need, fully annotated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConversionReport {
    /// Versioned schema identifier for the report shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub app: AppMeta,
    pub status: Status,
    /// Escaped and highlighted general warnings.
    #[serde(default)]
    pub general_warnings: Vec<String>,
    /// APIs with status other than `none`, ordered by name.
    pub polyfilled: Vec<ApiSection>,
    /// APIs with status `none`, ordered by name.
    pub not_polyfilled: Vec<ApiSection>,
}

impl ConversionReport {
    /// All sections, polyfilled first, each group ordered by name.
    pub fn sections(&self) -> impl Iterator<Item = &ApiSection> {
        self.polyfilled.iter().chain(self.not_polyfilled.iter())
    }
}
