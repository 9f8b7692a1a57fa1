use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_domain::{UsageIndex, starts_reference};
use caterpillar_types::{RepoPath, UsageOccurrence};
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;

use crate::ScanOptions;
use crate::walk::source_files;

/// One compiled member pattern per API, in the order the APIs were given.
pub(crate) struct ApiPatterns {
    patterns: Vec<(String, Regex)>,
}

impl ApiPatterns {
    pub(crate) fn new<'a>(apis: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Self> {
        let mut patterns = Vec::new();
        for api in apis {
            let re = Regex::new(&format!(
                r"chrome\.{}((?:\.[0-9A-Za-z_]+)+)",
                regex::escape(api)
            ))
            .with_context(|| format!("compile usage pattern for `{api}`"))?;
            patterns.push((api.to_string(), re));
        }
        Ok(Self { patterns })
    }
}

/// A single API member reference found while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Hit {
    pub api: String,
    pub member: String,
    pub occurrence: UsageOccurrence,
}

/// Scan `text` line by line. Each API contributes at most one hit per line: the
/// first reference on that line. `window.chrome.x` style matches are skipped, the
/// same way detection and highlighting skip them.
pub(crate) fn scan_text(
    path: &RepoPath,
    text: &str,
    patterns: &ApiPatterns,
    context_size: u32,
) -> Vec<Hit> {
    let normalized;
    let text = if text.contains('\r') {
        normalized = text.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        text
    };
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let size = context_size as usize;

    let mut hits = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for (api, re) in &patterns.patterns {
            let Some(path_match) = re
                .captures_iter(line)
                .filter(|caps| {
                    caps.get(0)
                        .is_some_and(|m| starts_reference(line, m.start()))
                })
                .find_map(|caps| caps.get(1))
            else {
                continue;
            };

            let start = idx.saturating_sub(size);
            let end = idx.saturating_add(size).saturating_add(1).min(lines.len());
            hits.push(Hit {
                api: api.clone(),
                member: path_match.as_str()[1..].to_string(),
                occurrence: UsageOccurrence {
                    path: path.clone(),
                    line: line_number(idx),
                    context: lines[start..end].concat(),
                    context_start: line_number(start),
                },
            });
        }
    }
    hits
}

fn line_number(idx: usize) -> u32 {
    u32::try_from(idx + 1).unwrap_or(u32::MAX)
}

fn scan_file(
    rel: &RepoPath,
    abs: &Utf8Path,
    patterns: &ApiPatterns,
    context_size: u32,
) -> anyhow::Result<Vec<Hit>> {
    let bytes = std::fs::read(abs).with_context(|| format!("read {abs}"))?;
    let text = String::from_utf8_lossy(&bytes);
    let hits = scan_text(rel, &text, patterns, context_size);
    tracing::debug!(path = %rel, hits = hits.len(), "scanned");
    Ok(hits)
}

/// Index every reference to `apis` below `root`.
///
/// The index has an entry for every requested API, empty when unused. Within a member,
/// occurrences are in path order, then line order.
pub fn scan_usage(
    root: &Utf8Path,
    apis: &[String],
    options: &ScanOptions,
    ignore_dirs: &BTreeSet<Utf8PathBuf>,
) -> anyhow::Result<UsageIndex> {
    let patterns = ApiPatterns::new(apis.iter().map(String::as_str))?;
    let files = source_files(root, options, ignore_dirs)?;

    let per_file: Vec<Vec<Hit>> = files
        .par_iter()
        .map(|(rel, abs)| scan_file(rel, abs, &patterns, options.context_size))
        .collect::<anyhow::Result<_>>()?;

    let mut index: UsageIndex = apis
        .iter()
        .map(|api| (api.clone(), Default::default()))
        .collect();
    for hit in per_file.into_iter().flatten() {
        index
            .entry(hit.api)
            .or_default()
            .entry(hit.member)
            .or_default()
            .push(hit.occurrence);
    }

    tracing::debug!(files = files.len(), apis = apis.len(), "usage scan complete");
    Ok(index)
}

/// Scans one output directory with fixed options.
#[derive(Clone, Debug)]
pub struct UsageScanner {
    root: Utf8PathBuf,
    options: ScanOptions,
}

impl UsageScanner {
    pub fn new(root: impl Into<Utf8PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn scan(
        &self,
        apis: &[String],
        ignore_dirs: &BTreeSet<Utf8PathBuf>,
    ) -> anyhow::Result<UsageIndex> {
        scan_usage(&self.root, apis, &self.options, ignore_dirs)
    }
}
