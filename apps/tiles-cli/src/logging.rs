//! Log filtering for the `tiles` binary

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter built from `RUST_LOG` directives, falling back to `info`
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
