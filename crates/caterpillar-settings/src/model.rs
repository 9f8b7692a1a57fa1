use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `caterpillar.toml` schema v1.
///
/// Every key is optional; unset keys fall back to built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CaterpillarConfigV1 {
    /// Optional schema string for tooling (`caterpillar.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Boilerplate directory, relative to the output directory. Usage found in here is
    /// polyfill code and never reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boilerplate_dir: Option<String>,

    /// Lines of context on either side of each usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_size: Option<u32>,

    /// File extensions scanned for API usage (without the dot).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Globs (relative to the output directory) excluded from scanning.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Namespaces whose second level names an API, e.g. `app` for `chrome.app.window`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_namespaces: Option<Vec<String>>,
}
