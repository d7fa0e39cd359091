//! Diagnostic tracing.
//!
//! Stdout belongs to the lifecycle trace, so every diagnostic goes to stderr.
//! `RUST_LOG` wins over the filter from [`Settings`](crate::config::Settings).
//!
//! ```bash
//! RUST_LOG=lambda_lifecycle=debug cargo run --bin lambda_lifecycle
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
