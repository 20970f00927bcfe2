pub mod app_config;
pub mod config;
pub mod diff;
pub mod point;
pub mod report;

pub use app_config::AppConfig;
pub use config::{load_config, load_config_from_env, ConfigError};
pub use diff::{diff_points, normalize_name};
pub use point::Point;
pub use report::{ChangeReport, ChangedShop, FieldChange, ReportStats};
