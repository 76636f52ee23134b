//! Top-level Veil configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnonymizationConfig, DetectionConfig, ObservabilityConfig, OperatorConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`VEIL_*`)
/// 3. Config file (`--config` path, else `veil.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VeilConfig {
    pub detection: DetectionConfig,
    pub anonymization: AnonymizationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub language: Option<String>,
    pub score_threshold: Option<f64>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl VeilConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `veil.toml` in
    /// `root` is used when present.
    pub fn load(
        config_path: Option<&Path>,
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(constants::PROJECT_CONFIG_FILE);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `VEIL_*` overrides. `lookup` is `std::env::var` outside tests.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(config: &mut VeilConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VEIL_LANGUAGE") {
            config.detection.default_language = val;
        }
        if let Some(val) = lookup("VEIL_SCORE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.detection.score_threshold = v;
            }
        }
        if let Some(val) = lookup("VEIL_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        if let Some(val) = lookup("VEIL_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = v;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut VeilConfig, cli: &CliOverrides) {
        if let Some(ref language) = cli.language {
            config.detection.default_language = language.clone();
        }
        if let Some(threshold) = cli.score_threshold {
            config.detection.score_threshold = threshold;
        }
        if let Some(ref level) = cli.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(json) = cli.log_json {
            config.observability.json = json;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &VeilConfig) -> Result<(), ConfigError> {
        let detection = &config.detection;
        if !(0.0..=1.0).contains(&detection.score_threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "detection.score_threshold".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&detection.context_boost) {
            return Err(ConfigError::ValidationFailed {
                field: "detection.context_boost".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if detection.languages.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "detection.languages".to_string(),
                message: "must name at least one language".to_string(),
            });
        }
        if detection.default_language.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "detection.default_language".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        for (entity, terms) in &detection.deny_lists {
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("detection.deny_lists.{entity}"),
                    message: "terms must not be empty".to_string(),
                });
            }
        }

        Self::validate_operator(
            "anonymization.default_operator",
            &config.anonymization.default_operator,
        )?;
        for (entity, op) in &config.anonymization.operators {
            Self::validate_operator(&format!("anonymization.operators.{entity}"), op)?;
        }
        Ok(())
    }

    fn validate_operator(field: &str, op: &OperatorConfig) -> Result<(), ConfigError> {
        if let OperatorConfig::Mask { masking_char, .. } = op {
            if masking_char.chars().count() != 1 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{field}.masking_char"),
                    message: "must be exactly one character".to_string(),
                });
            }
        }
        Ok(())
    }
}
