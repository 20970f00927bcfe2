//! Snapshot reconciliation.
//!
//! Pure comparison of two point-in-time collections keyed by normalized
//! name. No I/O and no clock access; the report timestamp is supplied by
//! the caller, so the same inputs always produce the same report.

use std::collections::{BTreeMap, BTreeSet};

use crate::point::Point;
use crate::report::{ChangeReport, ChangedShop, FieldChange, ReportStats};

/// Normalizes a display name into the reconciliation key: surrounding
/// whitespace stripped, case folded.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Reconciles `old` against `new` and classifies every point as appeared,
/// disappeared, changed, or unchanged.
///
/// Duplicate normalized names within one side collapse last-write-wins, in
/// input order. Output vectors are sorted by normalized name, so reports
/// are byte-stable across runs over the same data.
///
/// `generated_at` is embedded verbatim as the report date.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn diff_points(old: &[Point], new: &[Point], generated_at: &str) -> ChangeReport {
    let old_by_name: BTreeMap<String, &Point> = old
        .iter()
        .map(|p| (normalize_name(&p.name), p))
        .collect();
    let new_by_name: BTreeMap<String, &Point> = new
        .iter()
        .map(|p| (normalize_name(&p.name), p))
        .collect();

    let new_shops: Vec<Point> = new_by_name
        .iter()
        .filter(|(key, _)| !old_by_name.contains_key(*key))
        .map(|(_, p)| (*p).clone())
        .collect();

    let disappeared_shops: Vec<Point> = old_by_name
        .iter()
        .filter(|(key, _)| !new_by_name.contains_key(*key))
        .map(|(_, p)| (*p).clone())
        .collect();

    let mut common_count = 0usize;
    let mut changed_shops = Vec::new();
    for (key, &old_shop) in &old_by_name {
        let Some(&new_shop) = new_by_name.get(key) else {
            continue;
        };
        common_count += 1;

        let changes = compare_points(old_shop, new_shop);
        if !changes.is_empty() {
            changed_shops.push(ChangedShop {
                name: old_shop.name.clone(),
                old_shop: old_shop.clone(),
                new_shop: new_shop.clone(),
                changes,
            });
        }
    }

    let change_percentage =
        (new.len() as f64 - old.len() as f64) / old.len().max(1) as f64 * 100.0;

    let stats = ReportStats {
        new_count: new_shops.len(),
        disappeared_count: disappeared_shops.len(),
        changed_count: changed_shops.len(),
        unchanged_count: common_count - changed_shops.len(),
        change_percentage: round2(change_percentage),
    };

    ChangeReport {
        date: generated_at.to_string(),
        total_before: old.len(),
        total_after: new.len(),
        new_shops,
        disappeared_shops,
        changed_shops,
        stats,
    }
}

/// Compares the tracked fields of two records of the same point.
fn compare_points(old: &Point, new: &Point) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if old.id != new.id {
        changes.push(FieldChange::Id {
            old: old.id.clone(),
            new: new.id.clone(),
        });
    }

    if old.status != new.status {
        changes.push(FieldChange::Status {
            old: old.status.clone(),
            new: new.status.clone(),
        });
    }

    let old_cats: BTreeSet<&str> = old.parsed_categories.iter().map(String::as_str).collect();
    let new_cats: BTreeSet<&str> = new.parsed_categories.iter().map(String::as_str).collect();

    if old_cats != new_cats {
        let added: Vec<String> = new_cats.difference(&old_cats).map(|&c| c.to_string()).collect();
        let removed: Vec<String> = old_cats.difference(&new_cats).map(|&c| c.to_string()).collect();

        // Guard against representation-only inequality; with sets on both
        // sides this cannot fire empty, but the report contract promises a
        // non-empty delta whenever a categories change is present.
        if !added.is_empty() || !removed.is_empty() {
            changes.push(FieldChange::Categories {
                added,
                removed,
                total_old: old_cats.len(),
                total_new: new_cats.len(),
            });
        }
    }

    changes
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;
