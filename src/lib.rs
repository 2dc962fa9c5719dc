pub mod cli;
pub mod domain;
pub mod infra;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use domain::{
    CollectError, CollectErrorKind, ContainerRecord, ContainerRuntime, OutputMode, ReportConfig,
    SizeInfo, SortKey,
};
pub use infra::PodmanAdapter;
pub use services::ReportService;
