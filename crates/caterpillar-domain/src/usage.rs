//! Usage Classifier, first half: highlighted, sorted usage per API.

use crate::DomainError;
use crate::highlight::{escape_html, highlight_relevant_line};
use crate::model::{ApiCatalog, UsageIndex};
use caterpillar_types::UsageOccurrence;
use std::collections::BTreeMap;

/// Annotate every occurrence recorded for `api`.
///
/// Each context is escaped, then only its referencing line is highlighted. The
/// result is sorted by file, then line. Inputs are never modified.
pub fn annotate_usage(
    api: &str,
    usage: &UsageIndex,
    catalog: &ApiCatalog,
) -> Result<Vec<UsageOccurrence>, DomainError> {
    let Some(members) = usage.get(api) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for occ in members.values().flatten() {
        out.push(annotate_occurrence(occ, catalog)?);
    }
    out.sort();
    Ok(out)
}

fn annotate_occurrence(
    occ: &UsageOccurrence,
    catalog: &ApiCatalog,
) -> Result<UsageOccurrence, DomainError> {
    let outside = || DomainError::UsageOutsideContext {
        path: occ.path.to_string(),
        line: occ.line,
        context_start: occ.context_start,
    };

    let offset = occ.relevant_offset().ok_or_else(outside)?;
    let context = highlight_relevant_line(&escape_html(&occ.context), offset, catalog)
        .map_err(|err| match err {
            DomainError::LineOutsideContext { .. } => outside(),
            other => other,
        })?;

    Ok(UsageOccurrence {
        context,
        ..occ.clone()
    })
}

/// Annotated usage for each named API; APIs without usage map to an empty list.
///
/// Entry point for report sections; [`annotate_usage`] handles a single API.
pub fn process_usage<'a>(
    apis: impl IntoIterator<Item = &'a str>,
    usage: &UsageIndex,
    catalog: &ApiCatalog,
) -> Result<BTreeMap<String, Vec<UsageOccurrence>>, DomainError> {
    let mut out = BTreeMap::new();
    for api in apis {
        out.insert(api.to_string(), annotate_usage(api, usage, catalog)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{occurrence, power_and_runtime, usage_index};

    #[test]
    fn no_apis_means_no_usage() {
        let out = process_usage(Vec::<&str>::new(), &UsageIndex::new(), &power_and_runtime())
            .expect("process");
        assert!(out.is_empty());
    }

    #[test]
    fn api_without_occurrences_gets_empty_list() {
        let out =
            process_usage(["power"], &UsageIndex::new(), &power_and_runtime()).expect("process");
        assert_eq!(out.get("power"), Some(&Vec::new()));
    }

    #[test]
    fn usages_are_escaped_and_highlighted() {
        let context = "// keep awakes\n\
                       chrome.power.requestKeepAwake();\n\
                       // the user is now awake\n\
                       notAChromeAppCall();\n";
        let usage = usage_index(vec![(
            "power",
            "requestKeepAwake",
            occurrence("mý other script.js", 2, context, 1),
        )]);

        let out = process_usage(["power"], &usage, &power_and_runtime()).expect("process");
        let power = &out["power"];
        assert_eq!(power.len(), 1);
        assert_eq!(power[0].path.as_str(), "mý other script.js");
        assert_eq!(power[0].line, 2);
        assert_eq!(power[0].context_start, 1);
        assert_eq!(
            power[0].context,
            "// keep awakes\n\
             <span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>();\n\
             // the user is now awake\n\
             notAChromeAppCall();\n"
        );
    }

    #[test]
    fn markup_in_context_is_escaped_before_highlighting() {
        let usage = usage_index(vec![(
            "power",
            "getInfo",
            occurrence("a.js", 1, "if (a<b) chrome.power.getInfo();\n<br>", 1),
        )]);
        let out = process_usage(["power"], &usage, &power_and_runtime()).expect("process");
        assert_eq!(
            out["power"][0].context,
            "if (a&lt;b) <span class=\"ca-feature partial\">chrome.power.getInfo</span>();\n&lt;br&gt;"
        );
    }

    #[test]
    fn only_the_offset_line_is_touched() {
        let context = "chrome.power.getInfo();\nchrome.power.getInfo();\nchrome.power.requestKeepAwake();\nchrome.power.getInfo();";
        let usage = usage_index(vec![(
            "power",
            "requestKeepAwake",
            occurrence("a.js", 12, context, 10),
        )]);
        let out = process_usage(["power"], &usage, &power_and_runtime()).expect("process");
        let lines: Vec<&str> = out["power"][0].context.split('\n').collect();
        assert_eq!(lines[0], "chrome.power.getInfo();");
        assert_eq!(lines[1], "chrome.power.getInfo();");
        assert_eq!(
            lines[2],
            "<span class=\"ca-feature none\">chrome.power.requestKeepAwake</span>();"
        );
        assert_eq!(lines[3], "chrome.power.getInfo();");
    }

    #[test]
    fn sorted_by_file_then_line_across_members() {
        let usage = usage_index(vec![
            ("power", "requestKeepAwake", occurrence("b.js", 3, "chrome.power.requestKeepAwake", 3)),
            ("power", "getInfo", occurrence("a.js", 7, "chrome.power.getInfo", 7)),
            ("power", "getInfo", occurrence("a.js", 2, "chrome.power.getInfo", 2)),
        ]);
        let out = process_usage(["power"], &usage, &power_and_runtime()).expect("process");
        let keys: Vec<(&str, u32)> = out["power"]
            .iter()
            .map(|o| (o.path.as_str(), o.line))
            .collect();
        assert_eq!(keys, vec![("a.js", 2), ("a.js", 7), ("b.js", 3)]);
    }

    #[test]
    fn line_outside_context_is_an_error() {
        let usage = usage_index(vec![(
            "power",
            "getInfo",
            occurrence("a.js", 9, "chrome.power.getInfo", 1),
        )]);
        let err = process_usage(["power"], &usage, &power_and_runtime()).unwrap_err();
        assert_eq!(
            err,
            DomainError::UsageOutsideContext {
                path: "a.js".to_string(),
                line: 9,
                context_start: 1
            }
        );
    }
}
