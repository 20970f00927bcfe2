//! Change report persistence: JSON artifacts and a rendered HTML document.
//!
//! Each run produces a "latest" file (overwritten every run) and a
//! timestamp-suffixed history copy (one per run, never overwritten). The
//! JSON and HTML writers are independent so a failure in one never blocks
//! the other; the caller decides how to react to each `Result`.

pub mod error;
pub mod html;

use std::path::Path;

use mallwatch_core::ChangeReport;

pub use error::ReportError;
pub use html::render_html;

/// Writes `latest_report.json` and `report_<stamp>.json` under `dir`,
/// creating the directory if needed.
///
/// `stamp` is the run's `%Y%m%d_%H%M%S` file-name timestamp, computed once
/// by the caller so JSON and HTML history copies line up.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on filesystem failure or
/// [`ReportError::Serialize`] if the report cannot be encoded.
pub fn write_json_reports(
    dir: &Path,
    report: &ChangeReport,
    stamp: &str,
) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;

    let latest = dir.join("latest_report.json");
    let history = dir.join(format!("report_{stamp}.json"));
    write_file(dir, &latest, &json)?;
    write_file(dir, &history, &json)?;

    tracing::info!(latest = %latest.display(), history = %history.display(), "JSON reports written");
    Ok(())
}

/// Writes `report.html` and `report_<stamp>.html` under `dir`, creating the
/// directory if needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on filesystem failure.
pub fn write_html_reports(
    dir: &Path,
    report: &ChangeReport,
    stamp: &str,
) -> Result<(), ReportError> {
    let html = render_html(report);

    let latest = dir.join("report.html");
    let history = dir.join(format!("report_{stamp}.html"));
    write_file(dir, &latest, &html)?;
    write_file(dir, &history, &html)?;

    tracing::info!(latest = %latest.display(), history = %history.display(), "HTML reports written");
    Ok(())
}

fn write_file(dir: &Path, path: &Path, content: &str) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, content).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use mallwatch_core::{diff_points, Point};

    use super::*;

    fn sample_report() -> ChangeReport {
        let old = vec![Point {
            id: "1".to_string(),
            name: "Shop A".to_string(),
            parsed_categories: vec!["food".to_string()],
            assigned_categories: vec![],
            parsing_date: "2026-08-29 12:00:00".to_string(),
            status: "opened".to_string(),
        }];
        let new = vec![Point {
            id: "1".to_string(),
            name: "Shop A".to_string(),
            parsed_categories: vec!["food".to_string(), "drinks".to_string()],
            assigned_categories: vec![],
            parsing_date: "2026-08-30 12:00:00".to_string(),
            status: "closed".to_string(),
        }];
        diff_points(&old, &new, "2026-08-30 12:00:00")
    }

    #[test]
    fn json_writer_produces_latest_and_history_pair() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        write_json_reports(dir.path(), &report, "20260830_120000").unwrap();

        let latest = dir.path().join("latest_report.json");
        let history = dir.path().join("report_20260830_120000.json");
        assert!(latest.exists());
        assert!(history.exists());

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&latest).unwrap()).unwrap();
        assert_eq!(parsed["date"], "2026-08-30 12:00:00");
        assert_eq!(parsed["stats"]["changed_count"], 1);
        assert_eq!(parsed["changed_shops"][0]["changes"][0]["field"], "status");
    }

    #[test]
    fn json_latest_is_overwritten_while_history_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        write_json_reports(dir.path(), &report, "20260830_120000").unwrap();
        write_json_reports(dir.path(), &report, "20260830_130000").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.iter().filter(|n| *n == "latest_report.json").count(), 1);
        assert!(entries.contains(&"report_20260830_120000.json".to_string()));
        assert!(entries.contains(&"report_20260830_130000.json".to_string()));
    }

    #[test]
    fn html_writer_produces_latest_and_history_pair() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        write_html_reports(dir.path(), &report, "20260830_120000").unwrap();

        let latest = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
        let history =
            std::fs::read_to_string(dir.path().join("report_20260830_120000.html")).unwrap();
        assert_eq!(latest, history);
        assert!(latest.contains("Shop A"));
    }

    #[test]
    fn writers_create_the_reports_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        write_json_reports(&nested, &sample_report(), "20260830_120000").unwrap();
        assert!(nested.join("latest_report.json").exists());
    }
}
