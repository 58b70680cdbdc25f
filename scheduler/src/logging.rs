//! provides logging helpers

use tracing_subscriber::filter::{self};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry;

/// initiate the global tracing subscriber, writing to stderr so reports stay on stdout
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => filter::LevelFilter::WARN,
        1 => filter::LevelFilter::INFO,
        2 => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::TRACE,
    };
    let env_filter = filter::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    registry().with(fmt_layer).init();
}
