//! Tracing setup: structured logging for the pattern library.

use tracing_subscriber::EnvFilter;

use assay_core::config::ObservabilityConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "ASSAY_LOG";

/// Initialize the global tracing subscriber.
///
/// Respects `ASSAY_LOG` for filtering, falling back to
/// `config.log_level`. Returns `false` if a subscriber was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if config.json_logs {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = ObservabilityConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
