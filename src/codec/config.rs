//! Configuration for payload decoding

use serde::{Deserialize, Serialize};

/// What to do with an unknown enum token in an optional field
///
/// Unknown tokens in required fields are always errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumPolicy {
    /// Leave the field absent and record a warning
    #[default]
    Lenient,
    /// Record an error
    Strict,
}

/// Configuration for payload decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeConfig {
    /// Handling of unknown enum tokens in optional fields
    pub enum_policy: EnumPolicy,

    /// Accept numeric codes (e.g. `3`) in addition to member names for enum fields
    pub accept_numeric_enum_codes: bool,

    /// Record undeclared keys as warnings instead of ignoring them silently
    pub report_unknown_fields: bool,

    /// Maximum nesting depth of objects and arrays
    pub max_depth: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            enum_policy: EnumPolicy::Lenient,
            accept_numeric_enum_codes: true,
            report_unknown_fields: false,
            max_depth: 64,
        }
    }
}

impl DecodeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with [`EnumPolicy::Strict`]
    pub fn strict() -> Self {
        Self {
            enum_policy: EnumPolicy::Strict,
            ..Self::default()
        }
    }

    /// Create a builder for custom configuration
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Debug, Default)]
pub struct DecodeConfigBuilder {
    config: DecodeConfig,
}

impl DecodeConfigBuilder {
    pub fn enum_policy(mut self, policy: EnumPolicy) -> Self {
        self.config.enum_policy = policy;
        self
    }

    pub fn accept_numeric_enum_codes(mut self, accept: bool) -> Self {
        self.config.accept_numeric_enum_codes = accept;
        self
    }

    pub fn report_unknown_fields(mut self, report: bool) -> Self {
        self.config.report_unknown_fields = report;
        self
    }

    /// Set the maximum nesting depth (at least 1)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> DecodeConfig {
        self.config
    }
}

#[cfg(feature = "config-file")]
mod file {
    use super::DecodeConfig;
    use std::path::{Path, PathBuf};

    /// Error loading a configuration file
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        #[error("Failed to read {path}: {source}")]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("Invalid configuration: {0}")]
        Parse(#[from] toml::de::Error),
        #[error("Invalid configuration: {0}")]
        Invalid(String),
    }

    impl DecodeConfig {
        /// Parse a TOML document. Missing keys keep their defaults.
        ///
        /// ```toml
        /// enumPolicy = "strict"
        /// reportUnknownFields = true
        /// maxDepth = 32
        /// ```
        pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
            let config: DecodeConfig = toml::from_str(content)?;
            if config.max_depth == 0 {
                return Err(ConfigError::Invalid("maxDepth must be at least 1".to_string()));
            }
            Ok(config)
        }

        /// Load a TOML configuration file
        pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "loading decode configuration");
            Self::from_toml_str(&content)
        }
    }
}

#[cfg(feature = "config-file")]
pub use file::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecodeConfig::default();
        assert_eq!(config.enum_policy, EnumPolicy::Lenient);
        assert!(config.accept_numeric_enum_codes);
        assert!(!config.report_unknown_fields);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_builder_clamps_depth() {
        let config = DecodeConfig::builder()
            .enum_policy(EnumPolicy::Strict)
            .max_depth(0)
            .build();
        assert_eq!(config.enum_policy, EnumPolicy::Strict);
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let config: DecodeConfig =
            serde_json::from_str(r#"{"enumPolicy": "strict", "reportUnknownFields": true}"#).unwrap();
        assert_eq!(config.enum_policy, EnumPolicy::Strict);
        assert!(config.report_unknown_fields);
        assert!(config.accept_numeric_enum_codes);
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_from_toml_str() {
        let config = DecodeConfig::from_toml_str("enumPolicy = \"strict\"\nmaxDepth = 8\n").unwrap();
        assert_eq!(config, DecodeConfig::builder().enum_policy(EnumPolicy::Strict).max_depth(8).build());

        assert!(matches!(
            DecodeConfig::from_toml_str("maxDepth = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DecodeConfig::from_toml_str("enumPolicy = \"sometimes\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
