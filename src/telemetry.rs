//! Telemetry helpers for applications embedding `graph-views`.
//!
//! Frame builders and the progress animation emit `tracing` events under the
//! `graph_views` target. Hosts either call `init_default_tracing` or install
//! their own subscriber.

/// Directive applied when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "graph_views=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or when the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
