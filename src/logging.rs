//! Tracing setup for applications embedding the engine.
//!
//! The layout crates only emit `tracing` events: `debug` for every container
//! re-run, `trace` for every frame and natural-size change, and `warn` when a
//! grid child is skipped. Installing a subscriber is left to the host; these
//! helpers cover the common case of printing to stderr.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directives, e.g. `trellis_layout=debug`.
pub const LOG_ENV: &str = "TRELLIS_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Install a stderr subscriber filtered by [`LOG_ENV`] (idempotent).
///
/// Falls back to `info` when the variable is unset or invalid. Does nothing
/// if another global subscriber is already set.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .with_env_var(LOG_ENV)
            .from_env_lossy();
        init(filter);
    });
}

/// Install a stderr subscriber with explicit filter directives (idempotent).
///
/// Invalid directives are skipped; the rest still apply.
pub fn install_tracing_with(directives: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .parse_lossy(directives);
        init(filter);
    });
}

fn init(filter: EnvFilter) {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry().with(console).try_init().is_err() {
        eprintln!("trellis: a global tracing subscriber is already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installing_twice_is_harmless() {
        install_tracing_with("trellis_layout=trace");
        install_tracing();
        tracing::debug!("still logging");
    }
}
