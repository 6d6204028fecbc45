// Logging setup on top of tracing
use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: RUST_LOG wins, then the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.level))
}

/// Filter for a configured directive string, "info" when it does not parse
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns false if one was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LoggingConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }

    #[test]
    fn test_configured_level_is_used() {
        let filter = level_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unparseable_level_falls_back_to_info() {
        let filter = level_filter("corvidos=loudest");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter.to_string(), EnvFilter::new("info").to_string());
    }
}
