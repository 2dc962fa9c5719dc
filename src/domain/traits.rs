use super::{CollectError, ContainerRecord};
use std::fmt::Debug;

/// Source of container listings with per-container size accounting
pub trait ContainerRuntime: Send + Sync + Debug {
    /// Name of the runtime, used in diagnostics
    fn name(&self) -> &str;

    /// List containers with their sizes. Stopped containers are included
    /// only when `include_all` is set.
    fn list_containers(&self, include_all: bool) -> Result<Vec<ContainerRecord>, CollectError>;
}
