use caterpillar_types::{ConversionReport, Status};

pub fn render_markdown(report: &ConversionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Conversion report: {}\n\n", report.app.name));
    let status = match report.status {
        Status::Total => "TOTAL",
        Status::Partial => "PARTIAL",
        Status::None => "NONE",
    };
    out.push_str(&format!(
        "- Status: **{}**\n- APIs: {} polyfilled / {} not polyfilled\n- General warnings: {}\n\n",
        status,
        report.polyfilled.len(),
        report.not_polyfilled.len(),
        report.general_warnings.len()
    ));

    if report.polyfilled.is_empty() && report.not_polyfilled.is_empty() {
        out.push_str("No Chrome APIs used.\n");
        return out;
    }

    out.push_str("## APIs\n\n");

    let mut sections: Vec<_> = report.sections().collect();
    sections.sort_by(|a, b| a.name.cmp(&b.name));
    for api in sections {
        out.push_str(&format!(
            "- `chrome.{}`: {} ({} usage{})\n",
            api.name,
            api.status,
            api.usage.len(),
            if api.usage.len() == 1 { "" } else { "s" }
        ));
        if !api.relevant_warnings.is_empty() {
            out.push_str(&format!(
                "  - relevant warnings: {}\n",
                api.relevant_warnings.len()
            ));
        }
        if let Some(first) = api.usage.first() {
            out.push_str(&format!("  - first use: `{}`:{}\n", first.path, first.line));
        }
    }

    out
}
