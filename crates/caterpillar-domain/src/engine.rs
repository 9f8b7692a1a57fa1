use crate::DomainError;
use crate::highlight::{escape_html, format_html};
use crate::model::{ApiCatalog, ApiDescriptor, UsageIndex};
use crate::usage::process_usage;
use crate::warnings::{classify_warnings, manifest_warnings};
use caterpillar_types::{ApiSection, Status};

/// Split the catalog into polyfilled (status other than `none`) and not polyfilled
/// APIs, each ordered by name.
pub fn split_by_status(catalog: &ApiCatalog) -> (Vec<&ApiDescriptor>, Vec<&ApiDescriptor>) {
    catalog.apis().partition(|api| api.status.is_polyfilled())
}

/// Status of the whole conversion.
///
/// `total` only when every API is total and nothing else was flagged; `none` when
/// there is at least one API and none of them was polyfilled.
pub fn overall_status(catalog: &ApiCatalog, general_warnings: usize) -> Status {
    let mut statuses = catalog.apis().map(|api| api.status).peekable();
    if statuses.peek().is_none() {
        return if general_warnings == 0 {
            Status::Total
        } else {
            Status::Partial
        };
    }

    let statuses: Vec<Status> = statuses.collect();
    if statuses.iter().all(|s| *s == Status::None) {
        Status::None
    } else if general_warnings == 0 && statuses.iter().all(|s| *s == Status::Total) {
        Status::Total
    } else {
        Status::Partial
    }
}

/// Escape and highlight free-text warnings logged during conversion.
pub fn format_general_warnings(
    warnings: &[String],
    catalog: &ApiCatalog,
) -> Result<Vec<String>, DomainError> {
    warnings
        .iter()
        .map(|w| format_html(&escape_html(w), catalog))
        .collect()
}

/// Sections for polyfilled APIs: usage plus relevant/other warnings.
///
/// `catalog` is the full manifest map, so references to APIs outside `apis` still
/// highlight.
pub fn annotate_polyfilled(
    apis: &[&ApiDescriptor],
    usage: &UsageIndex,
    catalog: &ApiCatalog,
) -> Result<Vec<ApiSection>, DomainError> {
    let mut annotated_by_api =
        process_usage(apis.iter().map(|a| a.name.as_str()), usage, catalog)?;
    let mut sections = Vec::with_capacity(apis.len());
    for api in apis {
        let annotated = annotated_by_api.remove(&api.name).unwrap_or_default();
        let used_members: Vec<&str> = usage
            .get(&api.name)
            .map(|members| members.keys().map(String::as_str).collect())
            .unwrap_or_default();

        let partition = classify_warnings(
            manifest_warnings(api, catalog)?,
            used_members.iter().copied(),
        );
        tracing::debug!(
            api = %api.name,
            usages = annotated.len(),
            relevant = partition.relevant.len(),
            other = partition.other.len(),
            "annotated polyfilled api"
        );

        sections.push(ApiSection {
            name: api.name.clone(),
            status: api.status,
            usage: annotated,
            relevant_warnings: partition.relevant,
            other_warnings: partition.other,
        });
    }
    Ok(sections)
}

/// Sections for APIs with no polyfill: usage only.
pub fn annotate_not_polyfilled(
    apis: &[&ApiDescriptor],
    usage: &UsageIndex,
    catalog: &ApiCatalog,
) -> Result<Vec<ApiSection>, DomainError> {
    let mut annotated_by_api =
        process_usage(apis.iter().map(|a| a.name.as_str()), usage, catalog)?;
    Ok(apis
        .iter()
        .map(|api| {
            let annotated = annotated_by_api.remove(&api.name).unwrap_or_default();
            tracing::debug!(api = %api.name, usages = annotated.len(), "annotated missing api");
            ApiSection {
                name: api.name.clone(),
                status: api.status,
                usage: annotated,
                relevant_warnings: Vec::new(),
                other_warnings: Vec::new(),
            }
        })
        .collect())
}
