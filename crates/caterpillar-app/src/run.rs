//! The `report` and `apis` use cases: config, detection, manifests, report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_domain::ApiCatalog;
use caterpillar_repo::{
    ScanOptions, UsageScanner, detect_apis, load_polyfill_manifests, read_app_manifest,
    verify_app_manifest,
};
use caterpillar_settings::{CaterpillarConfigV1, Overrides, ResolvedConfig};
use caterpillar_types::{AppMeta, ConversionReport};
use std::collections::BTreeSet;

use crate::{ReportInput, generate_report};

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct RunInput<'a> {
    /// Converted web app directory.
    pub output_dir: &'a Utf8Path,
    /// Directory holding `<api>.manifest.json` polyfill manifests.
    pub polyfill_dir: &'a Utf8Path,
    /// Directory of the original Chrome App. When unset, `manifest.json` is looked up in
    /// `output_dir` and may be absent.
    pub app_dir: Option<&'a Utf8Path>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    // Empty is allowed, defaults apply.
    let cfg = if config_text.trim().is_empty() {
        CaterpillarConfigV1::default()
    } else {
        caterpillar_settings::parse_config_toml(config_text).context("parse config")?
    };
    caterpillar_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn boilerplate_ignore(output_dir: &Utf8Path, cfg: &ResolvedConfig) -> BTreeSet<Utf8PathBuf> {
    BTreeSet::from([output_dir.join(&cfg.boilerplate_dir)])
}

/// Run the report use case: resolve config, detect APIs, load manifests, assemble.
pub fn run_report(input: RunInput<'_>) -> anyhow::Result<ConversionReport> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let options = ScanOptions::from_config(&resolved);

    let apis = detect_apis(
        input.output_dir,
        &options,
        &boilerplate_ignore(input.output_dir, &resolved),
    )
    .context("detect APIs")?;
    tracing::info!(count = apis.len(), apis = %apis.join(", "), "detected APIs");

    let manifests =
        load_polyfill_manifests(input.polyfill_dir, &apis).context("load polyfill manifests")?;
    let catalog =
        ApiCatalog::new(manifests).with_flat_namespaces(resolved.flat_namespaces.clone());

    let (app, general_warnings) = app_metadata(input.output_dir, input.app_dir)?;

    let report_input = ReportInput {
        output_dir: input.output_dir.to_path_buf(),
        boilerplate_dir: Utf8PathBuf::from(&resolved.boilerplate_dir),
        catalog,
        app,
        general_warnings,
    };
    let scanner = UsageScanner::new(input.output_dir, options);
    let report = generate_report(&report_input, &scanner)?;
    tracing::info!(status = %report.status, "report generated");

    Ok(report)
}

fn app_metadata(
    output_dir: &Utf8Path,
    app_dir: Option<&Utf8Path>,
) -> anyhow::Result<(AppMeta, Vec<String>)> {
    let dir = match app_dir {
        Some(dir) => dir,
        None if output_dir.join("manifest.json").is_file() => output_dir,
        None => {
            tracing::warn!(
                dir = %output_dir,
                "no manifest.json; naming the app after its directory"
            );
            let name = output_dir.file_name().unwrap_or(output_dir.as_str());
            return Ok((
                AppMeta {
                    name: name.to_string(),
                    version: None,
                },
                Vec::new(),
            ));
        }
    };

    let manifest = read_app_manifest(dir)?;
    let warnings = verify_app_manifest(&manifest).context("verify app manifest")?;
    Ok((manifest.meta(), warnings))
}

/// Run the `apis` use case: names of every API referenced under `dir`.
pub fn run_apis(
    dir: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<Vec<String>> {
    let resolved = resolve(config_text, overrides)?;
    detect_apis(
        dir,
        &ScanOptions::from_config(&resolved),
        &boilerplate_ignore(dir, &resolved),
    )
}
