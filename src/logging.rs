use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

use crate::config::LogColor;

/// How the labs' logger is set up.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `env_logger` filter from `--log`; `RUST_LOG` is consulted when absent.
    pub env_filter: Option<String>,
    pub color: LogColor,
}

fn write_style(color: LogColor) -> WriteStyle {
    match color {
        LogColor::Auto => WriteStyle::Auto,
        LogColor::Always => WriteStyle::Always,
        LogColor::Never => WriteStyle::Never,
    }
}

fn builder(config: LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match config.env_filter.or(rust_log) {
        Some(filter) => builder.parse_filters(&filter),
        None => builder.filter_level(LevelFilter::Info),
    };
    builder.write_style(write_style(config.color));
    builder
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        builder(config, std::env::var("RUST_LOG").ok()).init();
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_choice_maps_to_write_style() {
        assert_eq!(write_style(LogColor::Auto), WriteStyle::Auto);
        assert_eq!(write_style(LogColor::Always), WriteStyle::Always);
        assert_eq!(write_style(LogColor::Never), WriteStyle::Never);
    }

    #[test]
    fn defaults_to_info() {
        let logger = builder(LoggingConfig::default(), None).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn flag_filter_beats_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..Default::default()
        };
        let logger = builder(config, Some("error".to_string())).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn falls_back_to_rust_log() {
        let logger = builder(LoggingConfig::default(), Some("warn".to_string())).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }
}
