use serde::{Deserialize, Serialize};

/// One retail unit's recorded attributes at a point in time.
///
/// All fields carry `#[serde(default)]` so that snapshots written by older
/// versions (or with fields pruned by hand) still load: category lists fall
/// back to empty, strings to `""`, and `status` to `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Vendor-assigned identifier. Opaque and not guaranteed stable across
    /// re-ingestions; reconciliation keys on the normalized name instead.
    #[serde(default)]
    pub id: String,
    /// Display name; normalized form is the reconciliation key.
    #[serde(default)]
    pub name: String,
    /// Category labels observed during this ingestion.
    #[serde(default)]
    pub parsed_categories: Vec<String>,
    /// Manually assigned categories, carried through ingestions untouched.
    #[serde(default)]
    pub assigned_categories: Vec<String>,
    /// When this record was produced, `%Y-%m-%d %H:%M:%S`.
    #[serde(default)]
    pub parsing_date: String,
    /// Lifecycle tag as reported by the vendor, e.g. `"opened"` or `"closed"`.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "unknown".to_string()
}
