use crate::domain::{CollectError, ContainerRecord, ContainerRuntime};
use std::io;
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Subprocess,
    Decode,
}

/// In-memory runtime that records every listing request.
#[derive(Debug)]
pub struct MockRuntime {
    containers: RwLock<Vec<ContainerRecord>>,
    commands: RwLock<Vec<String>>,
    fail_with: RwLock<Option<MockFailure>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            containers: RwLock::new(Vec::new()),
            commands: RwLock::new(Vec::new()),
            fail_with: RwLock::new(None),
        }
    }

    pub fn with_containers(records: Vec<ContainerRecord>) -> Self {
        let mock = Self::new();
        *mock.containers.write().unwrap() = records;
        mock
    }

    pub fn add_container(&self, record: ContainerRecord) {
        self.containers.write().unwrap().push(record);
    }

    pub fn set_fail_with(&self, failure: MockFailure) {
        *self.fail_with.write().unwrap() = Some(failure);
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_fail(&self) -> Result<(), CollectError> {
        match *self.fail_with.read().unwrap() {
            Some(MockFailure::Subprocess) => Err(CollectError::SubprocessFailure {
                program: "mock".to_string(),
                cause: io::Error::new(io::ErrorKind::NotFound, "mock runtime missing").into(),
            }),
            Some(MockFailure::Decode) => Err(CollectError::DecodeFailure {
                program: "mock".to_string(),
                source: serde_json::from_str::<Vec<ContainerRecord>>("not json").unwrap_err(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntime for MockRuntime {
    fn name(&self) -> &str {
        "mock"
    }

    fn list_containers(&self, include_all: bool) -> Result<Vec<ContainerRecord>, CollectError> {
        self.record_command(if include_all { "list:all" } else { "list:running" });
        self.check_fail()?;

        let containers = self.containers.read().unwrap();
        Ok(containers
            .iter()
            .filter(|c| include_all || is_running(c))
            .cloned()
            .collect())
    }
}

fn is_running(record: &ContainerRecord) -> bool {
    record
        .status
        .as_deref()
        .is_none_or(|status| status.starts_with("Up") || status == "running")
}
