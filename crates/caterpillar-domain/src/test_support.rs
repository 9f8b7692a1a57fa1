use crate::model::{ApiCatalog, ApiDescriptor, UsageIndex, WarningEntry};
use caterpillar_types::{RepoPath, Status, UsageOccurrence};

pub fn tts_catalog() -> ApiCatalog {
    ApiCatalog::new([ApiDescriptor::new("tts", Status::Partial).with_warning(
        WarningEntry::with_status("speak", Status::None, "Always silent."),
    )])
}

/// `power` is partially polyfilled with two no-op members; `app.runtime` is missing.
pub fn power_and_runtime() -> ApiCatalog {
    ApiCatalog::new([
        ApiDescriptor::new("power", Status::Partial)
            .with_warning(WarningEntry::with_status(
                "requestKeepAwake",
                Status::None,
                "Does nothing.",
            ))
            .with_warning(WarningEntry::with_status(
                "releaseKeepAwake",
                Status::None,
                "Does nothing.",
            )),
        ApiDescriptor::new("app.runtime", Status::None),
    ])
}

pub fn occurrence(path: &str, line: u32, context: &str, context_start: u32) -> UsageOccurrence {
    UsageOccurrence {
        path: RepoPath::new(path),
        line,
        context: context.to_string(),
        context_start,
    }
}

pub fn usage_index(entries: Vec<(&str, &str, UsageOccurrence)>) -> UsageIndex {
    let mut index = UsageIndex::new();
    for (api, member, occ) in entries {
        index
            .entry(api.to_string())
            .or_default()
            .entry(member.to_string())
            .or_default()
            .push(occ);
    }
    index
}
