use std::path::PathBuf;

/// Runtime configuration for one monitoring run.
///
/// Every field has an environment default, so the binary runs with no
/// configuration at all; CLI flags override individual values on top.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Vendor source slug, e.g. `"aviapark"` or `"riviera"`.
    pub source: String,
    /// Base URL override for the vendor API. `None` means the source's
    /// production endpoint; set to point ingestion at a mock server.
    pub base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Where the previous run's points are read from and this run's points
    /// are written to.
    pub snapshot_path: PathBuf,
    /// Directory receiving `latest_report.json`, `report.html`, and the
    /// timestamped history copies.
    pub reports_dir: PathBuf,
    pub log_level: String,
}
