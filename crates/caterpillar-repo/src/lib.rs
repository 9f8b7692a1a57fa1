//! Repository adapters: walk converted output, index API usage, load manifests.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes or
//! render anything; the report itself is assembled by the caller.

#![forbid(unsafe_code)]

mod app_manifest;
mod detect;
mod load;
mod scan;
mod walk;

use caterpillar_settings::ResolvedConfig;

pub use app_manifest::{AppManifest, read_app_manifest, verify_app_manifest};
pub use detect::detect_apis;
pub use load::load_polyfill_manifests;
pub use scan::{UsageScanner, scan_usage};
pub use walk::source_files;

/// What to scan and how much context to keep.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Lines kept on either side of a usage.
    pub context_size: u32,
    /// Lowercase extensions without the dot.
    pub extensions: Vec<String>,
    /// Globs matched against paths relative to the scan root.
    pub exclude: Vec<String>,
    pub flat_namespaces: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions::from_config(&ResolvedConfig::default())
    }
}

impl ScanOptions {
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self {
            context_size: cfg.context_size,
            extensions: cfg.extensions.clone(),
            exclude: cfg.exclude.clone(),
            flat_namespaces: cfg.flat_namespaces.clone(),
        }
    }
}

/// Fuzz-friendly API for testing scanning robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Index API usage in a single in-memory file.
    pub fn scan_text(text: &str, apis: &[String], context_size: u32) -> anyhow::Result<usize> {
        let patterns = scan::ApiPatterns::new(apis.iter().map(String::as_str))?;
        let hits = scan::scan_text(
            &caterpillar_types::RepoPath::new("fuzz.js"),
            text,
            &patterns,
            context_size,
        );
        Ok(hits.len())
    }

    /// Detect API names in a single in-memory file.
    pub fn detect_text(text: &str) -> anyhow::Result<Vec<String>> {
        let pattern = detect::api_pattern(&ScanOptions::default().flat_namespaces)?;
        let mut out = std::collections::BTreeSet::new();
        detect::detect_in_text(text, &pattern, &mut out);
        Ok(out.into_iter().collect())
    }
}
