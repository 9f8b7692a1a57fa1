use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_types::RepoPath;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use walkdir::WalkDir;

use crate::ScanOptions;

/// Source files under `root` eligible for scanning, sorted by relative path.
///
/// Skips anything under one of `ignore_dirs` (absolute paths), anything whose relative
/// path matches an `exclude` glob, and files with other extensions.
pub fn source_files(
    root: &Utf8Path,
    options: &ScanOptions,
    ignore_dirs: &BTreeSet<Utf8PathBuf>,
) -> anyhow::Result<Vec<(RepoPath, Utf8PathBuf)>> {
    let root = root
        .canonicalize_utf8()
        .with_context(|| format!("resolve scan root {root}"))?;
    let ignore: Vec<Utf8PathBuf> = ignore_dirs
        .iter()
        .map(|d| d.canonicalize_utf8().unwrap_or_else(|_| d.clone()))
        .collect();
    let exclude = build_globset(&options.exclude).context("compile exclude globset")?;

    let mut out = Vec::new();
    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            Utf8Path::from_path(e.path())
                .map(|p| !ignore.iter().any(|dir| p.starts_with(dir)))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = Utf8Path::from_path(entry.path()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        if !has_extension(abs, &options.extensions) {
            continue;
        }

        let rel = RepoPath::relative_to(&root, abs);
        if exclude.is_match(rel.as_str()) {
            tracing::debug!(path = %rel, "excluded by glob");
            continue;
        }
        out.push((rel, abs.to_path_buf()));
    }

    out.sort();
    Ok(out)
}

fn has_extension(path: &Utf8Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}
