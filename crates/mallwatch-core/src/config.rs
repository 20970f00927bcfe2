use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the actual environment so tests can drive it with a plain
/// `HashMap` lookup instead of mutating process state.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let source = or_default("MALLWATCH_SOURCE", "aviapark");
    let base_url = lookup("MALLWATCH_BASE_URL").ok();
    let request_timeout_secs = parse_u64("MALLWATCH_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("MALLWATCH_USER_AGENT", "mallwatch/0.1 (tenant-monitoring)");
    let snapshot_path = PathBuf::from(or_default("MALLWATCH_SNAPSHOT_PATH", "data/points.json"));
    let reports_dir = PathBuf::from(or_default("MALLWATCH_REPORTS_DIR", "reports"));
    let log_level = or_default("MALLWATCH_LOG_LEVEL", "info");

    Ok(AppConfig {
        source,
        base_url,
        request_timeout_secs,
        user_agent,
        snapshot_path,
        reports_dir,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.source, "aviapark");
        assert!(cfg.base_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.user_agent, "mallwatch/0.1 (tenant-monitoring)");
        assert_eq!(cfg.snapshot_path, PathBuf::from("data/points.json"));
        assert_eq!(cfg.reports_dir, PathBuf::from("reports"));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn env_vars_override_defaults() {
        let mut map = HashMap::new();
        map.insert("MALLWATCH_SOURCE", "riviera");
        map.insert("MALLWATCH_BASE_URL", "http://localhost:9000");
        map.insert("MALLWATCH_TIMEOUT_SECS", "30");
        map.insert("MALLWATCH_SNAPSHOT_PATH", "/var/lib/mallwatch/points.json");
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.source, "riviera");
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(
            cfg.snapshot_path,
            PathBuf::from("/var/lib/mallwatch/points.json")
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("MALLWATCH_TIMEOUT_SECS", "not-a-number");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MALLWATCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MALLWATCH_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
