//! Configuration module for StringSearch.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables. The resulting configuration is validated
//! before use and passed explicitly to whoever needs it; the search
//! algorithms themselves never read configuration or the environment.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::algorithms::{max_pattern_len, Algorithm, DEFAULT_WILDCARD};
use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "STRINGSEARCH";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm selection and parameters
    pub search: SearchSettings,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.search.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Algorithm names as they appear in configuration files and on the command line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Exact BNDM
    #[default]
    Bndm,
    /// Case-insensitive BNDM
    BndmCi,
    /// BNDM with a wildcard symbol
    BndmWildcards,
    /// Case-insensitive BNDM with a wildcard symbol
    BndmWildcardsCi,
    /// Boyer-Moore-Horspool
    Horspool,
    /// Boyer-Moore-Horspool with Raita's check
    HorspoolRaita,
    /// Shift-Or with mismatches
    ShiftOr,
}

impl AlgorithmKind {
    /// Whether the algorithm reads the configured wildcard.
    pub fn uses_wildcard(self) -> bool {
        matches!(self, Self::BndmWildcards | Self::BndmWildcardsCi)
    }
}

/// How text and patterns are presented to the algorithms.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// Raw bytes; case folding above ASCII follows Latin-1
    #[default]
    Bytes,
    /// Unicode scalar values decoded from UTF-8
    Chars,
}

impl fmt::Display for SymbolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes => f.write_str("bytes"),
            Self::Chars => f.write_str("chars"),
        }
    }
}

/// Algorithm selection and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Algorithm to run
    pub algorithm: AlgorithmKind,

    /// Match-anything symbol for the wildcard algorithms
    pub wildcard: char,

    /// Substitutions tolerated by `shift-or`
    pub max_mismatches: usize,

    /// Text access strategy
    pub symbols: SymbolMode,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            wildcard: DEFAULT_WILDCARD,
            max_mismatches: 1,
            symbols: SymbolMode::default(),
        }
    }
}

impl SearchSettings {
    /// The configured algorithm with its parameters.
    pub fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmKind::Bndm => Algorithm::Bndm,
            AlgorithmKind::BndmCi => Algorithm::BndmCaseInsensitive,
            AlgorithmKind::BndmWildcards => Algorithm::BndmWildcards {
                wildcard: self.wildcard,
            },
            AlgorithmKind::BndmWildcardsCi => Algorithm::BndmWildcardsCaseInsensitive {
                wildcard: self.wildcard,
            },
            AlgorithmKind::Horspool => Algorithm::Horspool,
            AlgorithmKind::HorspoolRaita => Algorithm::HorspoolRaita,
            AlgorithmKind::ShiftOr => Algorithm::ShiftOrMismatches {
                k: self.max_mismatches,
            },
        }
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.algorithm == AlgorithmKind::ShiftOr {
            max_pattern_len(self.max_mismatches).map_err(|e| ConfigError::ValueOutOfRange {
                key: "search.max_mismatches".to_string(),
                message: e.to_string(),
            })?;
        }

        if self.algorithm.uses_wildcard()
            && self.symbols == SymbolMode::Bytes
            && u8::try_from(self.wildcard).is_err()
        {
            return Err(ConfigError::ValidationError(format!(
                "Wildcard {:?} cannot be represented as a byte",
                self.wildcard
            )));
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<SearchConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&SearchConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "{}: {cause}",
                uri.unwrap_or_else(|| "<unknown>".to_string())
            )),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let search_config: SearchConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        search_config.validate()?;

        tracing::debug!(
            algorithm = ?search_config.search.algorithm,
            symbols = %search_config.search.symbols,
            "Configuration loaded"
        );

        Ok(search_config)
    }
}
