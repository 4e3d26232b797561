//! Subscriber setup for hosts that do not bring their own.
//!
//! Rejected viewport mutations (bad data lists, degenerate ranges, stale plot
//! ids) surface as `warn` events; reconciliation and tick passes log at
//! `trace`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "plotkit=warn";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_DIRECTIVE`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"plotkit=trace"` to watch per-frame reconciliation.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
