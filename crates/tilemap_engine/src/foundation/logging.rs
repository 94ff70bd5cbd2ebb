//! Logging utilities
//!
//! The engine logs through the `log` facade; binaries install `env_logger`
//! through [`init`]. The filter is read from `RUST_LOG` and falls back to
//! [`DEFAULT_FILTER`].

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the logging system
///
/// Safe to call more than once; later calls leave the installed logger alone.
pub fn init() {
    init_with_default_filter(DEFAULT_FILTER);
}

/// Initialize the logging system with a custom fallback filter
///
/// Returns `false` when a logger was already installed.
pub fn init_with_default_filter(filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        assert!(!init_with_default_filter("trace"));
    }
}
