pub mod podman_adapter;

pub use podman_adapter::{DEFAULT_RUNTIME, PodmanAdapter};
