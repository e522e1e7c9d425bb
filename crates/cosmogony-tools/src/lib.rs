//! Cosmogony Tools
//!
//! CLI tools for exploring Cosmogony universes.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// Use the `RUST_LOG` environment variable to override the default filter.
/// Default is `info`, with cosmogony crates raised to `debug`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,cosmogony_engine=debug,cosmogony_taxonomy=debug")
    });

    fmt().with_env_filter(filter).with_target(false).init();
}
