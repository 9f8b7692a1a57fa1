//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - ancestor-walk termination and fallback
//! - first-match-wins and exact-match-only resolution
//! - relevant/other warning partitioning
//! - usage ordering

use crate::model::{ApiCatalog, ApiDescriptor, UsageIndex, WarningEntry};
use crate::resolve::{ancestors, resolve_status};
use crate::usage::annotate_usage;
use crate::warnings::{RenderedWarning, classify_warnings, is_relevant};
use caterpillar_types::{RepoPath, Status, UsageOccurrence};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::None),
        Just(Status::Partial),
        Just(Status::Total),
    ]
}

/// Short segments from a tiny alphabet so generated paths collide often.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab][ab0-9]{0,2}").unwrap()
}

fn arb_member() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..6).prop_map(|segs| segs.join("."))
}

fn arb_warning() -> impl Strategy<Value = WarningEntry> {
    prop_oneof![
        arb_member().prop_map(|m| WarningEntry::unsupported(m)),
        (arb_member(), arb_status())
            .prop_map(|(m, s)| WarningEntry::with_status(m, s, "note")),
    ]
}

fn arb_api() -> impl Strategy<Value = ApiDescriptor> {
    (arb_status(), prop::collection::vec(arb_warning(), 0..8)).prop_map(|(status, warnings)| {
        ApiDescriptor {
            name: "storage".to_string(),
            status,
            warnings,
        }
    })
}

fn arb_occurrence() -> impl Strategy<Value = UsageOccurrence> {
    (
        prop_oneof![Just("a.js"), Just("b/c.js"), Just("b.js"), Just("z.js")],
        1u32..50,
        0u32..3,
    )
        .prop_map(|(path, line, back)| UsageOccurrence {
            path: RepoPath::new(path),
            line,
            context: "chrome.storage.get();\n".repeat(back as usize + 1),
            context_start: line.saturating_sub(back).max(1),
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn walk_length_is_bounded_by_segment_count(member in arb_member()) {
        let segments = member.split('.').count();
        prop_assert_eq!(ancestors(&member).count(), segments);
    }

    #[test]
    fn root_status_iff_no_ancestor_matches(api in arb_api(), member in arb_member()) {
        let any_match = ancestors(&member)
            .any(|p| api.warnings.iter().any(|w| w.member() == p));
        let resolved = resolve_status(&api, &member);
        if !any_match {
            prop_assert_eq!(resolved, api.status);
        }
    }

    #[test]
    fn resolution_matches_nearest_ancestor_first_entry(api in arb_api(), member in arb_member()) {
        let expected = ancestors(&member)
            .find_map(|p| api.warnings.iter().find(|w| w.member() == p))
            .map(|w| w.status())
            .unwrap_or(api.status);
        prop_assert_eq!(resolve_status(&api, &member), expected);
    }

    #[test]
    fn earlier_duplicate_wins(member in arb_member(), first in arb_status(), second in arb_status()) {
        let api = ApiDescriptor::new("storage", Status::Total)
            .with_warning(WarningEntry::with_status(member.clone(), first, "first"))
            .with_warning(WarningEntry::with_status(member.clone(), second, "second"));
        prop_assert_eq!(resolve_status(&api, &member), first);
    }

    #[test]
    fn descendant_warning_does_not_leak_upwards(member in arb_member(), child in arb_segment(), root in arb_status()) {
        let api = ApiDescriptor::new("storage", root)
            .with_warning(WarningEntry::with_status(format!("{member}.{child}"), Status::None, "deep"));
        prop_assert_eq!(resolve_status(&api, &member), root);
    }

    #[test]
    fn partition_is_total_and_disjoint(
        members in prop::collection::vec(arb_member(), 0..8),
        used in prop::collection::vec(arb_member(), 0..5),
    ) {
        let warnings: Vec<RenderedWarning> = members
            .iter()
            .enumerate()
            .map(|(i, m)| RenderedWarning { member: m.clone(), text: format!("w{i}") })
            .collect();
        let partition = classify_warnings(warnings, used.iter().map(String::as_str));

        prop_assert_eq!(partition.relevant.len() + partition.other.len(), members.len());
        for (i, m) in members.iter().enumerate() {
            let text = format!("w{i}");
            let relevant = is_relevant(m, used.iter().map(String::as_str));
            prop_assert_eq!(partition.relevant.contains(&text), relevant);
            prop_assert_eq!(partition.other.contains(&text), !relevant);
        }
    }

    #[test]
    fn usage_is_sorted_regardless_of_input_order(occs in prop::collection::vec(arb_occurrence(), 0..20)) {
        let catalog = ApiCatalog::new([ApiDescriptor::new("storage", Status::Partial)]);
        let mut usage = UsageIndex::new();
        usage.entry("storage".to_string()).or_default().insert("get".to_string(), occs.clone());

        let out = annotate_usage("storage", &usage, &catalog).expect("annotate");
        prop_assert_eq!(out.len(), occs.len());
        for pair in out.windows(2) {
            prop_assert!(
                (pair[0].path.as_str(), pair[0].line) <= (pair[1].path.as_str(), pair[1].line)
            );
        }

        let mut expected: Vec<(String, u32, u32)> = occs
            .iter()
            .map(|o| (o.path.to_string(), o.line, o.context_start))
            .collect();
        expected.sort();
        let mut actual: Vec<(String, u32, u32)> = out
            .iter()
            .map(|o| (o.path.to_string(), o.line, o.context_start))
            .collect();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
