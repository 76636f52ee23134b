//! Configuration system for Veil.
//! TOML-based, layered: CLI > env > config file > defaults.

pub mod anonymization_config;
pub mod detection_config;
pub mod observability_config;
pub mod veil_config;

pub use anonymization_config::{AnonymizationConfig, OperatorConfig};
pub use detection_config::DetectionConfig;
pub use observability_config::ObservabilityConfig;
pub use veil_config::{CliOverrides, VeilConfig};
