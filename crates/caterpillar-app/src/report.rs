use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_domain::{
    ApiCatalog, ApiDescriptor, DomainError, UsageIndex, annotate_not_polyfilled,
    annotate_polyfilled, format_general_warnings, overall_status, split_by_status,
};
use caterpillar_types::{ApiSection, AppMeta, ConversionReport, SCHEMA_REPORT_V1, ToolMeta};
use std::collections::BTreeSet;
use time::OffsetDateTime;

use crate::UsageSource;

/// Everything needed to assemble a report.
#[derive(Clone, Debug)]
pub struct ReportInput {
    /// Converted web app directory.
    pub output_dir: Utf8PathBuf,
    /// Boilerplate directory relative to `output_dir`; never scanned for usage.
    pub boilerplate_dir: Utf8PathBuf,
    /// Every API the app uses, with its polyfill status.
    pub catalog: ApiCatalog,
    pub app: AppMeta,
    /// Plain-text warnings raised during conversion.
    pub general_warnings: Vec<String>,
}

type Annotate =
    fn(&[&ApiDescriptor], &UsageIndex, &ApiCatalog) -> Result<Vec<ApiSection>, DomainError>;

/// Build the conversion report.
///
/// Polyfilled and not-polyfilled APIs are scanned and annotated independently. Any
/// failure (scan, unknown API, bad usage record) aborts the whole report.
pub fn generate_report(
    input: &ReportInput,
    source: &dyn UsageSource,
) -> anyhow::Result<ConversionReport> {
    let ignore_dirs = BTreeSet::from([absolute(&input.output_dir.join(&input.boilerplate_dir))?]);
    let catalog = &input.catalog;

    let general_warnings = format_general_warnings(&input.general_warnings, catalog)
        .context("highlight general warnings")?;

    let (polyfilled, not_polyfilled) = split_by_status(catalog);
    tracing::info!(
        polyfilled = polyfilled.len(),
        not_polyfilled = not_polyfilled.len(),
        "generating report"
    );

    let (polyfilled, not_polyfilled) = rayon::join(
        || section(&polyfilled, source, &ignore_dirs, catalog, annotate_polyfilled),
        || section(&not_polyfilled, source, &ignore_dirs, catalog, annotate_not_polyfilled),
    );
    let polyfilled = polyfilled.context("annotate polyfilled APIs")?;
    let not_polyfilled = not_polyfilled.context("annotate APIs without polyfills")?;

    Ok(ConversionReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "caterpillar-report".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        app: input.app.clone(),
        status: overall_status(catalog, input.general_warnings.len()),
        general_warnings,
        polyfilled,
        not_polyfilled,
    })
}

fn section(
    apis: &[&ApiDescriptor],
    source: &dyn UsageSource,
    ignore_dirs: &BTreeSet<Utf8PathBuf>,
    catalog: &ApiCatalog,
    annotate: Annotate,
) -> anyhow::Result<Vec<ApiSection>> {
    let names: Vec<String> = apis.iter().map(|api| api.name.clone()).collect();
    let usage = source.usage(&names, ignore_dirs)?;
    Ok(annotate(apis, &usage, catalog)?)
}

fn absolute(path: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let abs = std::path::absolute(path).with_context(|| format!("resolve {path}"))?;
    Utf8PathBuf::from_path_buf(abs)
        .map_err(|p| anyhow::anyhow!("path is not UTF-8: {}", p.display()))
}

pub fn serialize_report(report: &ConversionReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ConversionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse caterpillar report")
}
