use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Support status of an API or one of its members.
///
/// Deliberately not `Ord`: resolution picks the first exact match, never the "worst".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    None,
    Partial,
    Total,
}

impl Status {
    /// Lowercase token used in manifests and as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Partial => "partial",
            Status::Total => "total",
        }
    }

    pub fn parse(v: &str) -> Option<Status> {
        match v {
            "none" => Some(Status::None),
            "partial" => Some(Status::Partial),
            "total" => Some(Status::Total),
            _ => None,
        }
    }

    pub fn is_polyfilled(self) -> bool {
        self != Status::None
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&Status::Partial).expect("serialize");
        assert_eq!(json, "\"partial\"");
        let back: Status = serde_json::from_str("\"none\"").expect("deserialize");
        assert_eq!(back, Status::None);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for s in [Status::None, Status::Partial, Status::Total] {
            assert_eq!(Status::parse(s.as_str()), Some(s));
        }
        assert_eq!(Status::parse("NONE"), None);
    }
}
