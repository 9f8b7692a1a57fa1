//! Usage Classifier, second half: rendered manifest warnings split by relevance.

use crate::DomainError;
use crate::highlight::{escape_html, format_html};
use crate::model::{ApiCatalog, ApiDescriptor};
use caterpillar_types::ids;

/// A manifest warning rendered to highlighted HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedWarning {
    pub member: String,
    pub text: String,
}

/// Warnings split by whether the app actually touches their member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarningPartition {
    pub relevant: Vec<String>,
    pub other: Vec<String>,
}

/// Render `chrome.<api>.<member>: <text>` with the reference highlighted.
pub fn make_warning(
    api: &str,
    member: &str,
    text: &str,
    catalog: &ApiCatalog,
) -> Result<RenderedWarning, DomainError> {
    let full = format!("{}.{api}.{member}: {}", ids::API_ROOT, escape_html(text));
    Ok(RenderedWarning {
        member: member.to_string(),
        text: format_html(&full, catalog)?,
    })
}

/// Every warning of `api`, in manifest order.
pub fn manifest_warnings(
    api: &ApiDescriptor,
    catalog: &ApiCatalog,
) -> Result<Vec<RenderedWarning>, DomainError> {
    api.warnings
        .iter()
        .map(|w| make_warning(&api.name, w.member(), w.text(), catalog))
        .collect()
}

/// A warning is relevant when its member is a string prefix of any used member.
///
/// The prefix test is on raw strings, so `onChanged` also matches `onChangedExtra`.
/// Showing a possibly unrelated warning is preferred over hiding a related one.
pub fn is_relevant<'a>(member: &str, used_members: impl IntoIterator<Item = &'a str>) -> bool {
    used_members
        .into_iter()
        .any(|used| used.starts_with(member))
}

/// Partition rendered warnings against the members the app uses. Order is kept.
pub fn classify_warnings<'a, I>(warnings: Vec<RenderedWarning>, used_members: I) -> WarningPartition
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let mut partition = WarningPartition::default();
    for warning in warnings {
        if is_relevant(&warning.member, used_members.clone()) {
            partition.relevant.push(warning.text);
        } else {
            partition.other.push(warning.text);
        }
    }
    partition
}
