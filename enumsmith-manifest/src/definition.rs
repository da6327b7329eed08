//! Raw definition types as they appear in enums.yaml / enums.json.

use serde::Deserialize;

/// A single enum definition as authored by the user.
///
/// Every field is loosely typed on purpose: casing, defaulting, and
/// validation happen during normalization, so a half-written entry
/// still parses and fails with a per-definition diagnostic instead of
/// aborting the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDefinition {
    /// Singular enum name (e.g., "role").
    #[serde(default)]
    pub name: String,

    /// Optional plural override (e.g., "statuses").
    #[serde(default)]
    pub plural: Option<String>,

    /// Ordered key/value entries.
    #[serde(default)]
    pub values: Vec<ValueEntry>,
}

/// One key/value entry of an enum definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueEntry {
    /// Constant name (e.g., "admin").
    #[serde(default)]
    pub key: String,

    /// String value; defaults to the upper-cased key when left out.
    #[serde(default)]
    pub value: Option<String>,
}
