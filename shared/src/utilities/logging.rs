use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
/// Calling it again after a subscriber is set is a no-op.
pub fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
