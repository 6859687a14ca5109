//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use proptest::prelude::*;

use crate::algorithms::Algorithm;
use crate::config::{
    AlgorithmKind, ConfigLoader, LogConfig, SearchConfig, SearchSettings, SymbolMode, Validate,
};
use crate::error::config::ConfigError;

use super::test_utils::{log_level_strategy, string_strategy, TestFixture};

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = SearchConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.algorithm, AlgorithmKind::Bndm);
    assert_eq!(config.search.wildcard, '.');
    assert_eq!(config.search.symbols, SymbolMode::Bytes);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = SearchConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.search.algorithm = AlgorithmKind::ShiftOr;
    config.search.max_mismatches = usize::MAX;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.search.max_mismatches = 3;
    assert!(config.validate().is_ok());
}

/// Test that wildcards must fit the configured alphabet.
#[test]
fn test_wildcard_must_fit_symbols() {
    let mut settings = SearchSettings {
        algorithm: AlgorithmKind::BndmWildcards,
        wildcard: '€',
        ..SearchSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    settings.symbols = SymbolMode::Chars;
    assert!(settings.validate().is_ok());

    // Algorithms without wildcards ignore the setting.
    settings.symbols = SymbolMode::Bytes;
    settings.algorithm = AlgorithmKind::Horspool;
    assert!(settings.validate().is_ok());
}

/// Test that settings map onto the algorithm enum.
#[test]
fn test_settings_select_algorithm() {
    let mut settings = SearchSettings {
        wildcard: '?',
        max_mismatches: 2,
        ..SearchSettings::default()
    };

    let expected = [
        (AlgorithmKind::Bndm, Algorithm::Bndm),
        (AlgorithmKind::BndmCi, Algorithm::BndmCaseInsensitive),
        (AlgorithmKind::BndmWildcards, Algorithm::BndmWildcards { wildcard: '?' }),
        (
            AlgorithmKind::BndmWildcardsCi,
            Algorithm::BndmWildcardsCaseInsensitive { wildcard: '?' },
        ),
        (AlgorithmKind::Horspool, Algorithm::Horspool),
        (AlgorithmKind::HorspoolRaita, Algorithm::HorspoolRaita),
        (AlgorithmKind::ShiftOr, Algorithm::ShiftOrMismatches { k: 2 }),
    ];
    for (kind, algorithm) in expected {
        settings.algorithm = kind;
        assert_eq!(settings.algorithm(), algorithm);
    }
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [search]
            algorithm = "shift-or"
            max_mismatches = 2

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.search.algorithm, AlgorithmKind::ShiftOr);
    assert_eq!(config.search.max_mismatches, 2);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.search.wildcard, '.');
    assert!(!config.log.json);
}

/// Test loading configuration from JSON and YAML files.
#[test]
fn test_load_other_formats() {
    let fixture = TestFixture::new().unwrap();

    let json = fixture
        .create_file(
            "config.json",
            r#"{ "search": { "algorithm": "horspool-raita", "symbols": "chars" } }"#,
        )
        .unwrap();
    let config = ConfigLoader::new(Some(&json), "TEST_JSON").load().unwrap();
    assert_eq!(config.search.algorithm, AlgorithmKind::HorspoolRaita);
    assert_eq!(config.search.symbols, SymbolMode::Chars);

    let yaml = fixture
        .create_file("config.yaml", "search:\n  algorithm: bndm-ci\n")
        .unwrap();
    let config = ConfigLoader::new(Some(&yaml), "TEST_YAML").load().unwrap();
    assert_eq!(config.search.algorithm, AlgorithmKind::BndmCi);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
            [search]
            algorithm = "horspool"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__SEARCH__ALGORITHM", "bndm-wildcards");
    fixture.set_env("TEST_ENV__SEARCH__WILDCARD", "?");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.search.algorithm, AlgorithmKind::BndmWildcards);
    assert_eq!(config.search.wildcard, '?');
    assert!(config.log.json);
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_NO_FILE");
    assert_eq!(loader.load().unwrap(), SearchConfig::default());
}

/// Test that a missing file is reported as such.
#[test]
fn test_load_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("missing.toml");

    let loader = ConfigLoader::new(Some(&path), "TEST_MISSING");
    assert_eq!(loader.load(), Err(ConfigError::FileNotFound(path)));
}

/// Test that unknown file extensions are rejected.
#[test]
fn test_load_unsupported_format() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("config.ini", "[search]\n").unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_FORMAT");
    assert_eq!(loader.load(), Err(ConfigError::UnsupportedFormat(path)));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
            [search
            algorithm = bndm"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that unknown algorithm names fail to deserialize.
#[test]
fn test_load_unknown_algorithm() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("unknown.toml", "[search]\nalgorithm = \"regex\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_UNKNOWN");
    assert!(loader.load().is_err());
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let rendered = toml::to_string_pretty(&SearchConfig::default()).unwrap();
    assert!(rendered.contains("algorithm = \"bndm\""));
    assert!(rendered.contains("symbols = \"bytes\""));

    let parsed: SearchConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, SearchConfig::default());
}

proptest! {
    // Property: every known log level validates
    #[test]
    fn prop_known_log_levels_validate(level in log_level_strategy(), json in any::<bool>()) {
        let log = LogConfig { level, json };
        prop_assert!(log.validate().is_ok());
    }

    // Property: anything else is rejected
    #[test]
    fn prop_unknown_log_levels_rejected(level in string_strategy(12)) {
        prop_assume!(!["trace", "debug", "info", "warn", "error"].contains(&level.as_str()));
        let log = LogConfig { level, json: false };
        prop_assert!(log.validate().is_err());
    }
}
