//! config.toml parsing and feature flag defaults

use pretty_assertions::assert_eq;
use shared_types::{AppConfig, FeatureFlags};

#[test]
fn full_document_parses() {
    let config = AppConfig::from_toml_str(
        r#"
        [app]
        name = "Carelink Staging"
        tagline = "Test agency"

        [logging]
        level = "debug"

        [features]
        mobile_nav = true
        "#,
    );
    assert_eq!(config.app.name, "Carelink Staging");
    assert_eq!(config.logging.level, "debug");
    assert!(config.features.mobile_nav);
}

#[test]
fn malformed_document_falls_back_to_defaults() {
    let config = AppConfig::from_toml_str("[features\nmobile_nav = yes");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn missing_features_disable_everything() {
    let config = AppConfig::from_toml_str("[app]\nname = \"Carelink\"\n");
    assert_eq!(config.features, FeatureFlags::default());
}
