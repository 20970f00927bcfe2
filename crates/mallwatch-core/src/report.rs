use serde::Serialize;

use crate::point::Point;

/// Structured result of one reconciliation run.
///
/// Built once by [`crate::diff::diff_points`], never mutated afterwards, and
/// serialized twice (JSON report + rendered HTML) before being discarded.
/// `total_before`/`total_after` are the raw input collection sizes, counted
/// before deduplication by normalized name.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeReport {
    pub date: String,
    pub total_before: usize,
    pub total_after: usize,
    /// Points whose normalized name exists only in the new collection.
    pub new_shops: Vec<Point>,
    /// Points whose normalized name exists only in the old collection.
    pub disappeared_shops: Vec<Point>,
    pub changed_shops: Vec<ChangedShop>,
    pub stats: ReportStats,
}

/// A point present on both sides whose tracked fields differ.
#[derive(Debug, Clone, Serialize)]
pub struct ChangedShop {
    /// Display name from the old snapshot.
    pub name: String,
    pub old_shop: Point,
    pub new_shop: Point,
    /// At least one entry; empty-change points never reach the report.
    pub changes: Vec<FieldChange>,
}

/// One tracked-field delta between the old and new record of a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldChange {
    Id {
        old: String,
        new: String,
    },
    Status {
        old: String,
        new: String,
    },
    Categories {
        added: Vec<String>,
        removed: Vec<String>,
        total_old: usize,
        total_new: usize,
    },
}

/// Derived counters for one [`ChangeReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportStats {
    pub new_count: usize,
    pub disappeared_count: usize,
    pub changed_count: usize,
    pub unchanged_count: usize,
    /// `(total_after - total_before) / max(total_before, 1) * 100`, rounded
    /// to two decimals. The floored denominator keeps a first run (empty
    /// baseline) from dividing by zero.
    pub change_percentage: f64,
}
