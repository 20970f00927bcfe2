//! One monitoring run: load snapshot, fetch, diff, persist.

use chrono::Local;

use mallwatch_core::{diff_points, AppConfig};
use mallwatch_ingest::{MallClient, Source};

/// Executes a run against `config`.
///
/// Config and fetch failures abort before anything is written. The three
/// persistence steps (JSON reports, HTML reports, new snapshot) are
/// independent and best-effort: each failure is logged and the remaining
/// steps still run.
///
/// # Errors
///
/// Returns an error for an unknown source, a client construction failure,
/// or a fetch failure.
pub async fn execute(config: &AppConfig) -> anyhow::Result<()> {
    let source: Source = config.source.parse()?;
    let now = Local::now();
    let run_date = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let file_stamp = now.format("%Y%m%d_%H%M%S").to_string();

    let old_points = mallwatch_store::load_snapshot(&config.snapshot_path);
    tracing::info!(count = old_points.len(), "previous snapshot loaded");

    let client = MallClient::new(config.request_timeout_secs, &config.user_agent)?;
    let new_points = client
        .fetch_points(source, config.base_url.as_deref(), &run_date)
        .await?;

    let report = diff_points(&old_points, &new_points, &run_date);

    if let Err(e) = mallwatch_report::write_json_reports(&config.reports_dir, &report, &file_stamp)
    {
        tracing::error!(error = %e, "failed to write JSON reports");
    }
    if let Err(e) = mallwatch_report::write_html_reports(&config.reports_dir, &report, &file_stamp)
    {
        tracing::error!(error = %e, "failed to write HTML reports");
    }
    if let Err(e) = mallwatch_store::save_snapshot(&config.snapshot_path, &new_points) {
        tracing::error!(error = %e, "failed to save snapshot");
    }

    tracing::info!(
        source = %source,
        total_before = report.total_before,
        total_after = report.total_after,
        new = report.stats.new_count,
        disappeared = report.stats.disappeared_count,
        changed = report.stats.changed_count,
        unchanged = report.stats.unchanged_count,
        change_percentage = report.stats.change_percentage,
        "run complete"
    );

    Ok(())
}
