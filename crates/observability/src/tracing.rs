//! Tracing/logging initialization for the storefront.

use tracing_subscriber::EnvFilter;

/// Filter directive applied when `RUST_LOG` is unset: `info` globally,
/// `debug` for the fetch path (per-request fetch tracing).
const DEFAULT_DIRECTIVE: &str = "info,tienda_fetch=debug";

/// Initialize tracing/logging for the process from the environment.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`]. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    install(filter);
}

/// Initialize with an explicit filter directive, ignoring the environment.
///
/// Tests use this to pin their log level without touching `RUST_LOG`.
pub fn init_with_directive(directive: &str) {
    install(EnvFilter::new(directive));
}

fn install(filter: EnvFilter) {
    // JSON lines; the target stays on so log lines name the tienda crate
    // they came from (fetch vs render vs api).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_a_no_op() {
        init_with_directive("warn");
        init_with_directive("debug");
        init();
    }
}
