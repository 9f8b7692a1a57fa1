//! Polyfill manifests (`<api>.manifest.json`).
//!
//! Warnings come in three shapes: a bare member string, an object with a single
//! `text`, or an object with a list of `text`s. The last one is expanded into one
//! entry per message here, so nothing downstream branches on shape.

use caterpillar_domain::{ApiDescriptor, WarningEntry};
use caterpillar_types::Status;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid polyfill manifest JSON")]
    Json(#[from] serde_json::Error),

    #[error("unknown status `{status}` in chrome.{api} manifest")]
    UnknownStatus { api: String, status: String },

    #[error("malformed warning #{index} in chrome.{api} manifest: {reason}")]
    MalformedWarning {
        api: String,
        index: usize,
        reason: &'static str,
    },
}

#[derive(Deserialize)]
struct RawManifest {
    name: String,
    status: String,
    #[serde(default)]
    warnings: Vec<Value>,
}

/// Parse one polyfill manifest into an API descriptor.
pub fn parse_polyfill_manifest(text: &str) -> Result<ApiDescriptor, ManifestError> {
    let raw: RawManifest = serde_json::from_str(text)?;
    let status = parse_status(&raw.name, &raw.status)?;

    let mut api = ApiDescriptor::new(raw.name, status);
    for (index, warning) in raw.warnings.iter().enumerate() {
        let entries = expand_warning(&api.name, index, warning)?;
        api.warnings.extend(entries);
    }
    Ok(api)
}

/// Descriptor for an API that has no polyfill manifest: not polyfilled, no warnings.
pub fn default_manifest(api: &str) -> ApiDescriptor {
    ApiDescriptor::new(api, Status::None)
}

fn parse_status(api: &str, status: &str) -> Result<Status, ManifestError> {
    Status::parse(status).ok_or_else(|| ManifestError::UnknownStatus {
        api: api.to_string(),
        status: status.to_string(),
    })
}

fn expand_warning(
    api: &str,
    index: usize,
    warning: &Value,
) -> Result<Vec<WarningEntry>, ManifestError> {
    let malformed = |reason| ManifestError::MalformedWarning {
        api: api.to_string(),
        index,
        reason,
    };

    let obj = match warning {
        Value::String(member) => return Ok(vec![WarningEntry::unsupported(member.clone())]),
        Value::Object(obj) => obj,
        _ => return Err(malformed("expected a member string or an object")),
    };

    let member = obj
        .get("member")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing string `member`"))?;

    let status = match obj.get("status") {
        None | Some(Value::Null) => Status::None,
        Some(Value::String(s)) => parse_status(api, s)?,
        Some(_) => return Err(malformed("`status` must be a string")),
    };

    let texts: Vec<&str> = match obj.get("text") {
        Some(Value::String(text)) => vec![text.as_str()],
        Some(Value::Array(items)) => items
            .iter()
            .map(Value::as_str)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed("`text` list must contain only strings"))?,
        _ => return Err(malformed("`text` must be a string or a list of strings")),
    };

    Ok(texts
        .into_iter()
        .map(|text| WarningEntry::with_status(member, status, text))
        .collect())
}
