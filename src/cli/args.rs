use crate::domain::{OutputMode, ReportConfig, SortKey};
use crate::infra::DEFAULT_RUNTIME;
use clap::Parser;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    name = "podsize",
    version,
    about = "Report disk usage of containers, per container and in total",
    after_help = "Long options take two dashes: use `--sort size` and `--json`, not `-sort size` or `-json`."
)]
pub struct Cli {
    /// Show all containers (default shows just running)
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Sort by (name, size, rwsize)
    #[arg(short, long, value_name = "KEY", default_value = "name")]
    pub sort: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Container runtime executable to query
    #[arg(long, value_name = "BIN", default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Log diagnostics at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn report_config(&self) -> ReportConfig {
        let sort_key = SortKey::from_flag(&self.sort).unwrap_or_else(|| {
            warn!(sort = %self.sort, "unknown sort key, sorting by name");
            SortKey::default()
        });

        ReportConfig {
            include_all: self.all,
            sort_key,
            output: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Table
            },
        }
    }
}
