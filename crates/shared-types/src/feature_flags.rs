use serde::{Deserialize, Serialize};

/// Feature flags controlling optional presentation surfaces.
///
/// Every field defaults to `false` so that a missing or incomplete
/// config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Render the bottom navigation bar on narrow viewports.
    #[serde(default)]
    pub mobile_nav: bool,
}

/// Branding shown in the sidebar header and on the login page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_app_name() -> String {
    "Carelink".to_string()
}

fn default_tagline() -> String {
    "Care management dashboard".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Parse a config document, falling back to defaults when it is malformed.
    pub fn from_toml_str(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "config.toml is invalid, using defaults");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.mobile_nav);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app.name, "Carelink");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            mobile_nav = true
            "#,
        )
        .unwrap();
        assert!(config.features.mobile_nav);
        assert_eq!(config.app, AppSettings::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "Sunrise Care"
            tagline = "Home care, organised"

            [logging]
            level = "debug"

            [features]
            mobile_nav = true
            "#,
        )
        .unwrap();
        assert_eq!(config.app.name, "Sunrise Care");
        assert_eq!(config.app.tagline, "Home care, organised");
        assert_eq!(config.logging.level, "debug");
        assert!(config.features.mobile_nav);
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str("[features\nmobile_nav = yes");
        assert_eq!(config, AppConfig::default());
    }
}
