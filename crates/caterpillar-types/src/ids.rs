//! Stable identifiers shared by the highlighter and the renderers.
//!
//! Class names end up in emitted HTML, so changing one breaks existing stylesheets.

// Marker class on every highlighted API reference.
pub const CLASS_FEATURE: &str = "ca-feature";

// Overall conversion status badge.
pub const CLASS_CONVERSION_STATUS: &str = "conversion-status";

// Report sections
pub const SECTION_SUMMARY: &str = "summary";
pub const SECTION_GENERAL_WARNINGS: &str = "general-warnings";
pub const SECTION_POLYFILLED: &str = "polyfilled";
pub const SECTION_NOT_POLYFILLED: &str = "not-polyfilled";

// Namespace every scanned API lives under.
pub const API_ROOT: &str = "chrome";

/// APIs whose second-level member is itself an API name (`chrome.app.window`).
pub const DEFAULT_FLAT_NAMESPACES: &[&str] = &["app", "sockets", "system"];

/// Message used for bare-string warnings in a polyfill manifest.
pub const MESSAGE_NOT_IMPLEMENTED: &str = "Not implemented in the polyfill.";
