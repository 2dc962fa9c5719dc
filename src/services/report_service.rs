use super::ordering::reorder;
use super::render::{NO_CONTAINERS, render_json, render_table};
use crate::domain::{ContainerRecord, ContainerRuntime, OutputMode, ReportConfig};
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Collect -> reorder -> render over any container runtime
pub struct ReportService {
    runtime: Arc<dyn ContainerRuntime>,
}

impl ReportService {
    pub fn new(runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self { runtime }
    }

    pub fn collect(&self, include_all: bool) -> Result<Vec<ContainerRecord>> {
        let records = self
            .runtime
            .list_containers(include_all)
            .context("Error getting containers")?;
        debug!(
            runtime = self.runtime.name(),
            count = records.len(),
            "collected containers"
        );
        Ok(records)
    }

    /// Builds the whole report in memory. Nothing is produced on error.
    pub fn generate(&self, config: &ReportConfig) -> Result<String> {
        let mut records = self.collect(config.include_all)?;

        if records.is_empty() {
            return Ok(format!("{NO_CONTAINERS}\n"));
        }

        debug!(sort = %config.sort_key, "ordering containers");
        reorder(&mut records, config.sort_key);

        match config.output {
            OutputMode::Table => Ok(render_table(&records)),
            OutputMode::Json => render_json(&records),
        }
    }

    pub fn run<W: Write>(&self, config: &ReportConfig, out: &mut W) -> Result<()> {
        let report = self.generate(config)?;
        out.write_all(report.as_bytes())
            .and_then(|_| out.flush())
            .context("writing report")
    }
}
