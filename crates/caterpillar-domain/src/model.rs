use crate::DomainError;
use caterpillar_types::{Status, UsageOccurrence, ids};
use std::collections::{BTreeMap, BTreeSet};

/// Usage index: API name -> member path -> occurrences.
pub type UsageIndex = BTreeMap<String, BTreeMap<String, Vec<UsageOccurrence>>>;

/// One support caveat for an exact member of an API.
///
/// Multi-message manifest entries are expanded into several entries sharing a member
/// when the manifest is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningEntry {
    /// Bare member string in the manifest: the member is not implemented.
    ExactUnsupported { member: String },
    /// Structured entry with its own message and status.
    ExactWithStatus {
        member: String,
        status: Status,
        text: String,
    },
}

impl WarningEntry {
    pub fn unsupported(member: impl Into<String>) -> Self {
        WarningEntry::ExactUnsupported {
            member: member.into(),
        }
    }

    pub fn with_status(member: impl Into<String>, status: Status, text: impl Into<String>) -> Self {
        WarningEntry::ExactWithStatus {
            member: member.into(),
            status,
            text: text.into(),
        }
    }

    /// Dotted member path relative to the API root.
    pub fn member(&self) -> &str {
        match self {
            WarningEntry::ExactUnsupported { member } => member,
            WarningEntry::ExactWithStatus { member, .. } => member,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            WarningEntry::ExactUnsupported { .. } => Status::None,
            WarningEntry::ExactWithStatus { status, .. } => *status,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            WarningEntry::ExactUnsupported { .. } => ids::MESSAGE_NOT_IMPLEMENTED,
            WarningEntry::ExactWithStatus { text, .. } => text,
        }
    }
}

/// Manifest record for one namespaced API (`tts`, `app.window`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDescriptor {
    pub name: String,
    pub status: Status,
    /// Priority order: the first exact match wins.
    pub warnings: Vec<WarningEntry>,
}

impl ApiDescriptor {
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: WarningEntry) -> Self {
        self.warnings.push(warning);
        self
    }
}

/// The manifest map plus the namespaces whose second level is itself an API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCatalog {
    apis: BTreeMap<String, ApiDescriptor>,
    flat_namespaces: BTreeSet<String>,
}

impl Default for ApiCatalog {
    fn default() -> Self {
        Self {
            apis: BTreeMap::new(),
            flat_namespaces: ids::DEFAULT_FLAT_NAMESPACES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ApiCatalog {
    pub fn new(apis: impl IntoIterator<Item = ApiDescriptor>) -> Self {
        let mut catalog = ApiCatalog::default();
        for api in apis {
            catalog.insert(api);
        }
        catalog
    }

    /// Replace the flat-namespace set (`app`, `sockets`, `system` by default).
    pub fn with_flat_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn insert(&mut self, api: ApiDescriptor) {
        self.apis.insert(api.name.clone(), api);
    }

    /// Descriptor for `name`; a missing API is an error.
    pub fn lookup(&self, name: &str) -> Result<&ApiDescriptor, DomainError> {
        self.apis.get(name).ok_or_else(|| DomainError::UnknownApi {
            api: name.to_string(),
        })
    }

    /// Descriptors ordered by API name.
    pub fn apis(&self) -> impl Iterator<Item = &ApiDescriptor> {
        self.apis.values()
    }

    pub fn is_flat_namespace(&self, root: &str) -> bool {
        self.flat_namespaces.contains(root)
    }
}
