//! Tracing subscriber setup. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Library, binary and HTTP trace events at info.
pub const DEFAULT_FILTER: &str = "starwars_api=info,starwars_server=info,tower_http=info";

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
