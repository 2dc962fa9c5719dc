use crate::domain::{CollectError, ContainerRecord, ContainerRuntime, SubprocessCause};
use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};
use tracing::debug;

pub const DEFAULT_RUNTIME: &str = "podman";

/// Runs `<program> ps --size --format json` and decodes its output.
#[derive(Debug, Clone)]
pub struct PodmanAdapter {
    program: String,
}

impl PodmanAdapter {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_RUNTIME)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run<I, S>(&self, args: I) -> Result<Vec<u8>, CollectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.subprocess_failure(e.into()))?;

        ensure_success(output).map_err(|cause| self.subprocess_failure(cause))
    }

    fn subprocess_failure(&self, cause: SubprocessCause) -> CollectError {
        CollectError::SubprocessFailure {
            program: self.program.clone(),
            cause,
        }
    }
}

impl Default for PodmanAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntime for PodmanAdapter {
    fn name(&self) -> &str {
        &self.program
    }

    fn list_containers(&self, include_all: bool) -> Result<Vec<ContainerRecord>, CollectError> {
        let args = ps_args(include_all);
        debug!(program = %self.program, ?args, "listing containers");

        let stdout = self.run(&args)?;
        decode_listing(&stdout).map_err(|source| CollectError::DecodeFailure {
            program: self.program.clone(),
            source,
        })
    }
}

pub fn ps_args(include_all: bool) -> Vec<&'static str> {
    let mut args = vec!["ps", "--size", "--format", "json"];
    if include_all {
        args.push("-a");
    }
    args
}

/// Accepts either a JSON array of containers or one JSON object per line.
/// Blank output or a bare `null` means no containers.
pub fn decode_listing(raw: &[u8]) -> Result<Vec<ContainerRecord>, serde_json::Error> {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') || trimmed == "null" {
        let records: Option<Vec<ContainerRecord>> = serde_json::from_str(trimmed)?;
        return Ok(records.unwrap_or_default());
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<ContainerRecord>()
        .collect()
}

fn ensure_success(output: Output) -> Result<Vec<u8>, SubprocessCause> {
    if output.status.success() {
        return Ok(output.stdout);
    }

    Err(SubprocessCause::Status {
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
