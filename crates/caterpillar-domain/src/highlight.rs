//! HTML Highlighter: wraps `chrome.*` references in status-tagged spans.

use crate::DomainError;
use crate::model::ApiCatalog;
use crate::resolve::resolve_status;
use caterpillar_types::{Status, ids};
use regex::Regex;
use std::sync::LazyLock;

/// Anything in the chrome namespace: group 1 is the dotted path including its
/// leading dot.
static NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}((?:\.[0-9A-Za-z_]+)+)", ids::API_ROOT))
        .expect("namespace pattern is valid")
});

/// How a matched `chrome.<path>` reference maps onto the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference<'a> {
    /// `chrome.api`, or `chrome.flat.api` for a flat namespace.
    Standalone { api: &'a str },
    Nested { api: &'a str, member: &'a str },
}

/// Whether a `chrome` token at byte `at` starts a reference.
///
/// `window.chrome.x` and `mychrome.x` are not references: the token must not follow
/// a word character or a dot. Detection, scanning and highlighting all share this rule.
pub fn starts_reference(text: &str, at: usize) -> bool {
    text.as_bytes()
        .get(..at)
        .and_then(|before| before.last())
        .map(|b| !(b.is_ascii_alphanumeric() || *b == b'_' || *b == b'.'))
        .unwrap_or(true)
}

/// Split a path (without the `chrome.` prefix) into API and member.
pub fn split_reference<'a>(path: &'a str, catalog: &ApiCatalog) -> Reference<'a> {
    let Some((root, rest)) = path.split_once('.') else {
        return Reference::Standalone { api: path };
    };

    if !catalog.is_flat_namespace(root) {
        return Reference::Nested {
            api: root,
            member: rest,
        };
    }

    match rest.split_once('.') {
        None => Reference::Standalone { api: path },
        Some((sub, member)) => Reference::Nested {
            api: &path[..root.len() + 1 + sub.len()],
            member,
        },
    }
}

/// Status of a matched reference path (without the `chrome.` prefix).
pub fn reference_status(path: &str, catalog: &ApiCatalog) -> Result<Status, DomainError> {
    match split_reference(path, catalog) {
        Reference::Standalone { api } => Ok(catalog.lookup(api)?.status),
        Reference::Nested { api, member } => Ok(resolve_status(catalog.lookup(api)?, member)),
    }
}

/// Wrap every `chrome.*` reference in `text` with a status span.
///
/// `text` must already be escaped; everything outside a match is copied verbatim.
pub fn format_html(text: &str, catalog: &ApiCatalog) -> Result<String, DomainError> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in NAMESPACE.captures_iter(text) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if !starts_reference(text, whole.start()) {
            continue;
        }
        let status = reference_status(&path.as_str()[1..], catalog)?;

        out.push_str(&text[last..whole.start()]);
        out.push_str(&feature_span(status, whole.as_str()));
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

fn feature_span(status: Status, content: &str) -> String {
    format!(
        "<span class=\"{} {}\">{}</span>",
        ids::CLASS_FEATURE,
        status.as_str(),
        content
    )
}

/// Highlight only the line at `offset` (zero-based) of a multi-line context.
pub fn highlight_relevant_line(
    context: &str,
    offset: usize,
    catalog: &ApiCatalog,
) -> Result<String, DomainError> {
    let mut lines: Vec<String> = context.split('\n').map(str::to_string).collect();
    let total = lines.len();
    let Some(line) = lines.get_mut(offset) else {
        return Err(DomainError::LineOutsideContext {
            offset,
            lines: total,
        });
    };
    *line = format_html(line, catalog)?;
    Ok(lines.join("\n"))
}

/// Minimal markup escaping: `&`, `<` and `>`. Quotes are left alone.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{power_and_runtime, tts_catalog};

    #[test]
    fn standalone_reference_uses_root_status() {
        let html = format_html("chrome.tts", &tts_catalog()).expect("format");
        assert_eq!(html, "<span class=\"ca-feature partial\">chrome.tts</span>");
    }

    #[test]
    fn nested_reference_uses_member_warning() {
        let html = format_html("chrome.tts.speak", &tts_catalog()).expect("format");
        assert_eq!(html, "<span class=\"ca-feature none\">chrome.tts.speak</span>");
    }

    #[test]
    fn nested_reference_without_warning_uses_root_status() {
        let html = format_html("chrome.tts.getVoices()", &tts_catalog()).expect("format");
        assert_eq!(
            html,
            "<span class=\"ca-feature partial\">chrome.tts.getVoices</span>()"
        );
    }

    #[test]
    fn flat_namespace_two_levels_is_standalone() {
        let html =
            format_html("see chrome.app.runtime now", &power_and_runtime()).expect("format");
        assert_eq!(
            html,
            "see <span class=\"ca-feature none\">chrome.app.runtime</span> now"
        );
    }

    #[test]
    fn flat_namespace_member_resolves_against_sub_api() {
        let catalog = power_and_runtime();
        assert_eq!(
            split_reference("app.runtime.onLaunched.addListener", &catalog),
            Reference::Nested {
                api: "app.runtime",
                member: "onLaunched.addListener"
            }
        );
        assert_eq!(
            split_reference("power.requestKeepAwake", &catalog),
            Reference::Nested {
                api: "power",
                member: "requestKeepAwake"
            }
        );
    }

    #[test]
    fn multiple_references_and_text_passthrough() {
        let html = format_html(
            "a &lt; chrome.power.requestKeepAwake(); chrome.power.getInfo;",
            &power_and_runtime(),
        )
        .expect("format");
        assert_eq!(
            html,
            "a &lt; <span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>(); \
             <span class=\"ca-feature partial\">chrome.power.getInfo</span>;"
        );
    }

    #[test]
    fn unknown_api_is_an_error() {
        let err = format_html("chrome.bluetooth.getDevices", &tts_catalog()).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownApi {
                api: "bluetooth".to_string()
            }
        );
    }

    #[test]
    fn qualified_chrome_is_not_a_reference() {
        let html = format_html(
            "chrome.tts.speak(); window.chrome.webview.postMessage(x); mychrome.foo;",
            &tts_catalog(),
        )
        .expect("format");
        assert_eq!(
            html,
            "<span class=\"ca-feature none\">chrome.tts.speak</span>(); \
             window.chrome.webview.postMessage(x); mychrome.foo;"
        );
    }

    #[test]
    fn reference_after_escaped_markup_still_highlights() {
        let html = format_html("&lt;chrome.tts", &tts_catalog()).expect("format");
        assert_eq!(html, "&lt;<span class=\"ca-feature partial\">chrome.tts</span>");
    }

    #[test]
    fn reference_start_rule() {
        assert!(starts_reference("chrome.tts", 0));
        assert!(starts_reference("(chrome.tts", 1));
        assert!(!starts_reference("window.chrome.tts", 7));
        assert!(!starts_reference("_chrome.tts", 1));
    }

    #[test]
    fn text_without_references_is_unchanged() {
        let text = "var chromeless = 1; // chrome";
        assert_eq!(format_html(text, &tts_catalog()).expect("format"), text);
    }

    #[test]
    fn highlights_only_the_relevant_line() {
        let catalog = power_and_runtime();
        let context = "chrome.power.requestKeepAwake();\n\
                       chrome.app.runtime.onLaunched.addListener(makeWindow);\n\
                       notAChromeAppCall();";

        let first = highlight_relevant_line(context, 0, &catalog).expect("highlight");
        assert_eq!(
            first,
            "<span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>();\n\
             chrome.app.runtime.onLaunched.addListener(makeWindow);\n\
             notAChromeAppCall();"
        );

        let second = highlight_relevant_line(context, 1, &catalog).expect("highlight");
        assert_eq!(
            second,
            "chrome.power.requestKeepAwake();\n\
             <span class=\"ca-feature none\">chrome.app.runtime.onLaunched.addListener</span>(makeWindow);\n\
             notAChromeAppCall();"
        );
    }

    #[test]
    fn empty_context_highlights_to_empty() {
        assert_eq!(
            highlight_relevant_line("", 0, &power_and_runtime()).expect("highlight"),
            ""
        );
    }

    #[test]
    fn offset_past_context_is_an_error() {
        let err = highlight_relevant_line("a\nb", 2, &power_and_runtime()).unwrap_err();
        assert_eq!(err, DomainError::LineOutsideContext { offset: 2, lines: 2 });
    }

    #[test]
    fn escape_leaves_quotes() {
        assert_eq!(
            escape_html("<a href=\"x\">&</a>"),
            "&lt;a href=\"x\"&gt;&amp;&lt;/a&gt;"
        );
    }
}
