mod args;
mod logging;

pub use args::Cli;
pub use logging::init_logging;
