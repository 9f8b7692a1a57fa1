//! Config parsing and polyfill manifest parsing.
//!
//! This crate is intentionally IO-free: it parses configuration and manifests provided as
//! strings.

#![forbid(unsafe_code)]

mod manifest;
mod model;
mod resolve;

pub use manifest::{ManifestError, default_manifest, parse_polyfill_manifest};
pub use model::CaterpillarConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `caterpillar.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CaterpillarConfigV1> {
    let cfg: CaterpillarConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (defaults + config file + CLI overrides).
pub fn resolve_config(
    cfg: CaterpillarConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of `caterpillar.toml`, pretty-printed.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(CaterpillarConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}
