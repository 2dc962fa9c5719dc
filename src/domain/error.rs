use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectErrorKind {
    SubprocessFailure,
    DecodeFailure,
}

#[derive(Debug, Error)]
pub enum SubprocessCause {
    #[error("could not be started")]
    Spawn(#[from] io::Error),
    #[error("exited with {status}{}", format_stderr(.stderr))]
    Status { status: ExitStatus, stderr: String },
}

/// Failure while collecting the container listing from the runtime.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("{program} command failed")]
    SubprocessFailure {
        program: String,
        #[source]
        cause: SubprocessCause,
    },
    #[error("failed to parse {program} output")]
    DecodeFailure {
        program: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CollectError {
    pub fn kind(&self) -> CollectErrorKind {
        match self {
            Self::SubprocessFailure { .. } => CollectErrorKind::SubprocessFailure,
            Self::DecodeFailure { .. } => CollectErrorKind::DecodeFailure,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
