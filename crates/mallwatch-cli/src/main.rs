mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mallwatch_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "mallwatch")]
#[command(about = "Mall tenant list monitor: fetch, diff against the last snapshot, report")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the current tenant list, diff it, and write the reports.
    Run(RunArgs),
}

#[derive(Debug, Default, Args)]
struct RunArgs {
    /// Vendor source: "aviapark" or "riviera".
    #[arg(long)]
    source: Option<String>,

    /// Override the vendor API base URL (mainly for testing).
    #[arg(long)]
    base_url: Option<String>,

    /// Snapshot file holding the previous run's points.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Directory receiving the JSON and HTML reports.
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl RunArgs {
    /// Folds CLI flags over the env-derived config; flags win.
    fn apply_to(self, mut config: AppConfig) -> AppConfig {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(snapshot) = self.snapshot {
            config.snapshot_path = snapshot;
        }
        if let Some(reports_dir) = self.reports_dir {
            config.reports_dir = reports_dir;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout_secs = timeout_secs;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let args = match cli.command {
        Some(Commands::Run(args)) => args,
        None => RunArgs::default(),
    };

    let config = args.apply_to(mallwatch_core::load_config_from_env()?);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    run::execute(&config).await
}
