use caterpillar_types::{
    AppMeta, ApiSection, ConversionReport, RepoPath, SCHEMA_REPORT_V1, Status, ToolMeta,
    UsageOccurrence,
};
use time::macros::datetime;

pub(crate) fn power_section() -> ApiSection {
    ApiSection {
        name: "power".to_string(),
        status: Status::Partial,
        usage: vec![UsageOccurrence {
            path: RepoPath::new("mý other script.js"),
            line: 2,
            context: "// keep awakes\n<span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>();\n"
                .to_string(),
            context_start: 1,
        }],
        relevant_warnings: vec![
            "<span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>: Not implemented in the polyfill."
                .to_string(),
        ],
        other_warnings: vec![
            "<span class=\"ca-feature partial\">chrome.power.getInfo</span>: Always reports AC power."
                .to_string(),
        ],
    }
}

pub(crate) fn runtime_section() -> ApiSection {
    ApiSection {
        name: "app.runtime".to_string(),
        status: Status::None,
        usage: Vec::new(),
        relevant_warnings: Vec::new(),
        other_warnings: Vec::new(),
    }
}

pub(crate) fn sample_report() -> ConversionReport {
    ConversionReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "caterpillar-report".to_string(),
            version: "0.1.0".to_string(),
        },
        generated_at: datetime!(2026-01-01 0:00 UTC),
        app: AppMeta {
            name: "test <app>".to_string(),
            version: Some("1.0.0".to_string()),
        },
        status: Status::Partial,
        general_warnings: vec!["Manifest member `permissions` will not be converted.".to_string()],
        polyfilled: vec![power_section()],
        not_polyfilled: vec![runtime_section()],
    }
}
