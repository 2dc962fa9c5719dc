use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` is not consulted so stdout and
/// stderr only depend on the flags given.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "podsize=debug"
    } else {
        "podsize=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
