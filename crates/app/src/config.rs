use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Embedded at build time so web and mobile builds carry the same settings.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse `config.toml` into the global `OnceLock`. Only the first call has
/// effect. A malformed file falls back to defaults.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::from_toml_str(CONFIG_TOML))
}

/// The loaded configuration, or defaults if [`load`] has not run yet.
pub fn config() -> &'static AppConfig {
    load()
}

/// Log level named in the config, `INFO` when unrecognised.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = AppConfig::from_toml_str(CONFIG_TOML);
        assert_eq!(config.app.name, "Carelink");
        assert!(config.features.mobile_nav);
    }

    #[test]
    fn log_level_parses_names() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".into();
        assert_eq!(log_level(&config), tracing::Level::DEBUG);
        config.logging.level = "WARN".into();
        assert_eq!(log_level(&config), tracing::Level::WARN);
        config.logging.level = "loud".into();
        assert_eq!(log_level(&config), tracing::Level::INFO);
    }
}
