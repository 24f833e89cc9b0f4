//! Tracing for the initializer steps.
//!
//! Each step emits `debug!` events per directory and component, plus an
//! `info!` when `CLAUDE.md` is written and when the run finishes. Events go
//! to stderr; the report on stdout is separate and ignores `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` selects the level, `warn` if
/// unset (`RUST_LOG=crc_init=debug crc-init` shows every check).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
