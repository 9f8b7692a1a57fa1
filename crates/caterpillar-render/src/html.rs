use caterpillar_types::ids::{
    API_ROOT, CLASS_CONVERSION_STATUS, CLASS_FEATURE, SECTION_GENERAL_WARNINGS,
    SECTION_NOT_POLYFILLED, SECTION_POLYFILLED, SECTION_SUMMARY,
};
use caterpillar_types::{ApiSection, ConversionReport, Status, UsageOccurrence};
use std::fmt::Write as _;

const STYLESHEET: &str = "\
body { font-family: system-ui, sans-serif; max-width: 60em; margin: 2em auto; padding: 0 1em; }
pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }
.ca-feature { font-weight: bold; }
.ca-feature.none { color: #b00020; }
.ca-feature.partial { color: #a15c00; }
.ca-feature.total { color: #1b7a2b; }
.conversion-status.none { background: #fde7ea; }
.conversion-status.partial { background: #fff4de; }
.conversion-status.total { background: #e5f6e8; }
.usage-location { font-family: monospace; }
";

/// Summary: app name, overall status, and one line per API.
pub fn render_summary(report: &ConversionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{SECTION_SUMMARY}\">");
    out.push_str("<h2>Summary</h2>\n");
    let _ = writeln!(
        out,
        "<p><span class=\"name\">{}</span> was <span class=\"{CLASS_CONVERSION_STATUS} {}\">{}</span></p>",
        escape(&report.app.name),
        report.status,
        status_phrase(report.status),
    );

    let mut sections: Vec<&ApiSection> = report.sections().collect();
    sections.sort_by(|a, b| a.name.cmp(&b.name));
    if !sections.is_empty() {
        out.push_str("<ul>\n");
        for api in sections {
            let verdict = if api.status.is_polyfilled() {
                "was polyfilled."
            } else {
                "was not polyfilled."
            };
            let _ = writeln!(out, "<li>{} {verdict}</li>", api_badge(api));
        }
        out.push_str("</ul>\n");
    }

    if !report.general_warnings.is_empty() {
        let _ = writeln!(
            out,
            "<p><a href=\"#{SECTION_GENERAL_WARNINGS}\">{} general warning{}</a> raised during conversion.</p>",
            report.general_warnings.len(),
            plural(report.general_warnings.len()),
        );
    }
    out.push_str("</section>\n");
    out
}

/// General warnings, one list item each. Empty when there are none.
pub fn render_general_warnings(report: &ConversionReport) -> String {
    if report.general_warnings.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{SECTION_GENERAL_WARNINGS}\">");
    out.push_str("<h2>General warnings</h2>\n<ul>\n");
    for warning in &report.general_warnings {
        let _ = writeln!(out, "<li>{warning}</li>");
    }
    out.push_str("</ul>\n</section>\n");
    out
}

pub fn render_polyfilled(report: &ConversionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{SECTION_POLYFILLED}\">");
    out.push_str("<h2>Polyfilled APIs</h2>\n");
    if report.polyfilled.is_empty() {
        out.push_str("<p>No APIs were polyfilled.</p>\n");
    }

    for api in &report.polyfilled {
        let _ = writeln!(out, "<article class=\"api\">\n<h3>{}</h3>", api_badge(api));

        if !api.relevant_warnings.is_empty() {
            out.push_str("<h4>Warnings relevant to this app</h4>\n");
            push_list(&mut out, &api.relevant_warnings);
        }
        push_usage(&mut out, &api.usage);
        if !api.other_warnings.is_empty() {
            let _ = writeln!(
                out,
                "<details>\n<summary>{} other warning{}</summary>",
                api.other_warnings.len(),
                plural(api.other_warnings.len()),
            );
            push_list(&mut out, &api.other_warnings);
            out.push_str("</details>\n");
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

pub fn render_not_polyfilled(report: &ConversionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{SECTION_NOT_POLYFILLED}\">");
    out.push_str("<h2>APIs without polyfills</h2>\n");
    if report.not_polyfilled.is_empty() {
        out.push_str("<p>Every API used by this app was polyfilled.</p>\n");
    }

    for api in &report.not_polyfilled {
        let _ = writeln!(out, "<article class=\"api\">\n<h3>{}</h3>", api_badge(api));
        push_usage(&mut out, &api.usage);
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

/// Standalone page with every section and an embedded stylesheet.
pub fn render_full(report: &ConversionReport) -> String {
    let mut out = String::new();
    let title = match &report.app.version {
        Some(v) => format!("{} {}", report.app.name, v),
        None => report.app.name.clone(),
    };

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>Conversion report: {}</title>", escape(&title));
    let _ = write!(out, "<style>\n{STYLESHEET}</style>\n");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>Conversion report: {}</h1>", escape(&title));
    let _ = writeln!(
        out,
        "<p class=\"generated\">Generated by {} {}.</p>",
        escape(&report.tool.name),
        escape(&report.tool.version),
    );

    out.push_str(&render_summary(report));
    out.push_str(&render_general_warnings(report));
    out.push_str(&render_polyfilled(report));
    out.push_str(&render_not_polyfilled(report));
    out.push_str("</body>\n</html>\n");
    out
}

fn status_phrase(status: Status) -> &'static str {
    match status {
        Status::Total => "fully converted.",
        Status::Partial => "partially converted, with warnings.",
        Status::None => "not converted.",
    }
}

fn api_badge(api: &ApiSection) -> String {
    format!(
        "<span class=\"{CLASS_FEATURE} {}\">{API_ROOT}.{}</span>",
        api.status,
        escape(&api.name)
    )
}

fn push_list(out: &mut String, items: &[String]) {
    out.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(out, "<li>{item}</li>");
    }
    out.push_str("</ul>\n");
}

fn push_usage(out: &mut String, usage: &[UsageOccurrence]) {
    if usage.is_empty() {
        out.push_str("<p>No usage found.</p>\n");
        return;
    }
    out.push_str("<h4>Usage</h4>\n");
    for occ in usage {
        let _ = writeln!(
            out,
            "<p class=\"usage-location\">{}:{}</p>\n<pre data-start=\"{}\"><code>{}</code></pre>",
            escape(occ.path.as_str()),
            occ.line,
            occ.context_start,
            occ.context,
        );
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// Attribute-safe, unlike the highlighter's escaping.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
