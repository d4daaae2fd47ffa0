//! Log subscriber setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,fabric_shadow=debug,taffy=warn";

/// Install a global fmt subscriber. `RUST_LOG` takes precedence over `filter`.
///
/// Later calls are ignored, so tests can call this freely.
pub fn init_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
