mod config;
mod container;
mod error;
pub mod traits;

pub use config::{OutputMode, ReportConfig, SortKey};
pub use container::{ContainerRecord, SizeInfo, UNNAMED};
pub use error::{CollectError, CollectErrorKind, SubprocessCause};
pub use traits::ContainerRuntime;
