use anyhow::{Context, bail};
use camino::Utf8Path;
use caterpillar_types::AppMeta;
use serde_json::{Map, Value};

const MANIFEST_FILENAME: &str = "manifest.json";

// Members carried over into the converted web app manifest.
const CONVERTED_MEMBERS: &[&str] = &[
    "manifest_version",
    "app",
    "name",
    "version",
    "short_name",
    "default_locale",
    "icons",
    "author",
    "description",
];

/// A Chrome App `manifest.json`, kept as raw JSON so unknown members can be reported.
#[derive(Clone, Debug, PartialEq)]
pub struct AppManifest {
    members: Map<String, Value>,
}

impl AppManifest {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(text).context("parse app manifest JSON")?;
        match value {
            Value::Object(members) => Ok(Self { members }),
            _ => bail!("app manifest must be a JSON object"),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.members.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.members.get("version").and_then(Value::as_str)
    }

    /// Report metadata; an unnamed app is reported as `Unnamed app`.
    pub fn meta(&self) -> AppMeta {
        AppMeta {
            name: self.name().unwrap_or("Unnamed app").to_string(),
            version: self.version().map(str::to_string),
        }
    }

    fn has_background(&self) -> bool {
        self.members
            .get("app")
            .and_then(Value::as_object)
            .is_some_and(|app| app.contains_key("background"))
    }
}

/// Read `<dir>/manifest.json`.
pub fn read_app_manifest(dir: &Utf8Path) -> anyhow::Result<AppManifest> {
    let path = dir.join(MANIFEST_FILENAME);
    let text = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
    AppManifest::from_json(&text).with_context(|| format!("load {path}"))
}

/// Check a manifest for problems that affect the conversion.
///
/// Returns the warnings to show in the report. A manifest without `app.background`
/// cannot be converted at all, so that is an error instead.
pub fn verify_app_manifest(manifest: &AppManifest) -> anyhow::Result<Vec<String>> {
    let mut warnings = Vec::new();

    match manifest.members.get("manifest_version") {
        None => warnings.push("Chrome Apps must have manifest version 2.".to_string()),
        Some(v) if v.as_i64() == Some(2) => {}
        Some(v) => warnings.push(format!(
            "Chrome Apps must have manifest version 2, found manifest version {v}."
        )),
    }

    if !manifest.has_background() {
        bail!("Chrome Apps must include a background script.");
    }

    if manifest.name().is_none() {
        warnings.push("Chrome Apps must include a name.".to_string());
    }
    if !manifest.members.contains_key("version") {
        warnings.push("Chrome Apps must include a version.".to_string());
    }

    for member in manifest.members.keys() {
        if !CONVERTED_MEMBERS.contains(&member.as_str()) {
            warnings.push(format!("Manifest member `{member}` will not be converted."));
        }
    }

    for w in &warnings {
        tracing::warn!("{w}");
    }
    Ok(warnings)
}
