//! Logger set-up shared by the demo programs.
//!
//! Both programs log through the `log` facade into `env_logger`. The filter
//! comes from `RUST_LOG` when it is set and from the `[log]` config section
//! otherwise.

use crate::config::LogConfig;

/// Filter string to install. A non-blank `RUST_LOG` beats the config.
pub fn effective_filter(config: &LogConfig, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ => config.level.clone(),
    }
}

fn builder(config: &LogConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(&effective_filter(config, rust_log))
        .parse_write_style(&config.style)
        .format_timestamp_millis();
    builder
}

/// Installs the global logger. If one is already installed it stays.
pub fn init_logging(config: &LogConfig) {
    let rust_log = std::env::var("RUST_LOG").ok();
    if builder(config, rust_log).try_init().is_ok() {
        log::debug!("logging to stderr, level {}", log::max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    fn log_config(level: &str) -> LogConfig {
        LogConfig {
            level: level.to_string(),
            ..LogConfig::default()
        }
    }

    #[test]
    fn rust_log_beats_the_config() {
        let filter = effective_filter(&log_config("warn"), Some("points=trace".to_string()));
        assert_eq!(filter, "points=trace");
    }

    #[test]
    fn blank_rust_log_falls_back_to_the_config() {
        assert_eq!(effective_filter(&log_config("warn"), Some("  ".to_string())), "warn");
        assert_eq!(effective_filter(&log_config("warn"), None), "warn");
    }

    #[test]
    fn configured_level_reaches_the_logger() {
        let logger = builder(&log_config("warn"), None).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);

        let logger = builder(&log_config("warn"), Some("debug".to_string())).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn unknown_style_does_not_break_the_builder() {
        let config = LogConfig {
            style: "sparkly".to_string(),
            ..log_config("error")
        };
        assert_eq!(builder(&config, None).build().filter(), LevelFilter::Error);
    }

    #[test]
    fn second_init_is_harmless() {
        init_logging(&LogConfig::default());
        init_logging(&log_config("trace"));
    }
}
