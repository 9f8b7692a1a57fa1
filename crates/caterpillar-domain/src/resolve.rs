//! Status Resolver: the effective status of a dotted member path.

use crate::model::ApiDescriptor;
use caterpillar_types::Status;

/// Effective status of `member` (relative to the API root; empty means the root).
///
/// Walks from `member` up through its ancestors. At each level the first warning
/// addressing exactly that path wins; if no level matches, the API's own status
/// applies. Descendant warnings never match.
pub fn resolve_status(api: &ApiDescriptor, member: &str) -> Status {
    ancestors(member)
        .find_map(|path| exact_status(api, path))
        .unwrap_or(api.status)
}

/// `a.b.c`, `a.b`, `a`. Yields nothing for the empty path.
pub fn ancestors(member: &str) -> impl Iterator<Item = &str> {
    std::iter::successors((!member.is_empty()).then_some(member), |path| {
        path.rsplit_once('.')
            .map(|(parent, _)| parent)
            .filter(|parent| !parent.is_empty())
    })
}

fn exact_status(api: &ApiDescriptor, path: &str) -> Option<Status> {
    api.warnings
        .iter()
        .find(|w| w.member() == path)
        .map(|w| w.status())
}
