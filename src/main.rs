use anyhow::Result;
use clap::Parser;
use podsize::cli::{Cli, init_logging};
use podsize::{PodmanAdapter, ReportService};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.report_config();
    let service = ReportService::new(Arc::new(PodmanAdapter::with_program(cli.runtime)));

    service.run(&config, &mut std::io::stdout().lock())
}
