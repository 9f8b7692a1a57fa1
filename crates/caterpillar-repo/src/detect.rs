use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_domain::starts_reference;
use regex::Regex;
use std::collections::BTreeSet;

use crate::ScanOptions;
use crate::walk::source_files;

pub(crate) fn api_pattern(flat_namespaces: &[String]) -> anyhow::Result<Regex> {
    let flats: Vec<String> = flat_namespaces.iter().map(|ns| regex::escape(ns)).collect();
    let pattern = if flats.is_empty() {
        r"chrome\.([0-9A-Za-z_]+)".to_string()
    } else {
        format!(r"chrome\.((?:(?:{})\.)?[0-9A-Za-z_]+)", flats.join("|"))
    };
    Regex::new(&pattern).context("compile API detection pattern")
}

pub(crate) fn detect_in_text(text: &str, pattern: &Regex, out: &mut BTreeSet<String>) {
    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(api)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if starts_reference(text, whole.start()) {
            out.insert(api.as_str().to_string());
        }
    }
}

/// Sorted names of every API referenced under `root`, e.g. `tts` or `app.window`.
///
/// Detection is textual. Aliased access such as `var c = chrome; c.tts` is missed.
pub fn detect_apis(
    root: &Utf8Path,
    options: &ScanOptions,
    ignore_dirs: &BTreeSet<Utf8PathBuf>,
) -> anyhow::Result<Vec<String>> {
    let pattern = api_pattern(&options.flat_namespaces)?;
    let mut apis = BTreeSet::new();
    for (rel, abs) in source_files(root, options, ignore_dirs)? {
        let bytes = std::fs::read(&abs).with_context(|| format!("read {abs}"))?;
        let before = apis.len();
        detect_in_text(&String::from_utf8_lossy(&bytes), &pattern, &mut apis);
        tracing::debug!(path = %rel, new = apis.len() - before, "detected APIs");
    }
    Ok(apis.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<String> {
        let pattern = api_pattern(&ScanOptions::default().flat_namespaces).expect("pattern");
        let mut out = BTreeSet::new();
        detect_in_text(text, &pattern, &mut out);
        out.into_iter().collect()
    }

    #[test]
    fn finds_plain_and_flat_namespace_apis() {
        let text = "chrome.tts.speak();\nchrome.app.window.create();\nchrome.sockets.tcp.x;";
        assert_eq!(detect(text), vec!["app.window", "sockets.tcp", "tts"]);
    }

    #[test]
    fn flat_namespace_alone_is_its_own_api() {
        assert_eq!(detect("var a = chrome.app;"), vec!["app"]);
        assert_eq!(detect("chrome.application.x"), vec!["application"]);
    }

    #[test]
    fn chrome_must_start_a_token() {
        assert!(detect("window.chrome.tts.speak(); mychrome.power.x; _chrome.a").is_empty());
        assert_eq!(detect("(chrome.power.getInfo)"), vec!["power"]);
    }

    #[test]
    fn result_is_sorted_and_deduplicated() {
        assert_eq!(
            detect("chrome.tts.a; chrome.power.b; chrome.tts.c;"),
            vec!["power", "tts"]
        );
    }

    #[test]
    fn no_flat_namespaces_means_single_segment_names() {
        let pattern = api_pattern(&[]).expect("pattern");
        let mut out = BTreeSet::new();
        detect_in_text("chrome.app.window.create()", &pattern, &mut out);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec!["app"]);
    }
}
