//! Opt-in tracing setup for hosts embedding `drag-pie`.
//!
//! The engine only emits `tracing` events (chart creation, draw passes,
//! adjustment outcomes). Installing a subscriber is left to the host unless
//! it calls one of these helpers with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is unset: engine events at `info`, the rest
/// at `warn`.
pub const DEFAULT_FILTER: &str = "warn,drag_pie=info";

/// Installs a compact subscriber using `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a custom fallback filter directive.
///
/// Returns `false` as well when `fallback_filter` does not parse.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let from_env = EnvFilter::try_from_default_env();
        let Ok(filter) = from_env.or_else(|_| EnvFilter::try_new(fallback_filter)) else {
            return false;
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
