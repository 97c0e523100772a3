//! Log setup for the command line driver.
//!
//! The library itself only emits `tracing` events; nothing is printed unless a
//! subscriber is installed.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
};

// Log to stderr so results on stdout stay clean. Filtering follows RUST_LOG,
// defaulting to WARN.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
