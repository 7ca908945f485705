//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::calculation::{get_fifo_roster, get_overtime_multiplier};
use crate::error::{EngineError, EngineResult};

use super::types::{InputLimits, ScenarioDefaults, ServiceConfig, ServiceSettings};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── service.yaml   # Service settings, request defaults and limits
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Listening on {}", loader.service().bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `service.yaml` is missing
    /// - The file contains invalid YAML or is missing a field
    /// - A value fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let service_path = path.as_ref().join("service.yaml");
        let config = Self::load_yaml::<ServiceConfig>(&service_path)?;
        Self::from_config(config)
    }

    /// Builds a loader from an already parsed configuration, validating it.
    pub fn from_config(config: ServiceConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns a loader holding the built-in defaults.
    ///
    /// ```
    /// use wage_engine::config::ConfigLoader;
    /// use rust_decimal_macros::dec;
    ///
    /// let loader = ConfigLoader::embedded();
    /// assert_eq!(loader.defaults().weeks_per_year, dec!(48));
    /// ```
    pub fn embedded() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceSettings {
        &self.config.service
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &ScenarioDefaults {
        &self.config.defaults
    }

    /// Returns the request limits.
    pub fn limits(&self) -> &InputLimits {
        &self.config.limits
    }
}

fn validate(config: &ServiceConfig) -> EngineResult<()> {
    if config.service.bind_address.trim().is_empty() {
        return Err(invalid("service.bind_address", "must not be empty"));
    }

    let defaults = &config.defaults;
    let limits = &config.limits;

    positive("limits.max_hourly_rate", limits.max_hourly_rate)?;
    positive("limits.max_hours_per_week", limits.max_hours_per_week)?;
    positive("limits.max_weeks_per_year", limits.max_weeks_per_year)?;
    if limits.max_overtime_hours < Decimal::ZERO {
        return Err(invalid("limits.max_overtime_hours", "must not be negative"));
    }

    positive("defaults.weeks_per_year", defaults.weeks_per_year)?;
    if defaults.weeks_per_year > limits.max_weeks_per_year {
        return Err(invalid(
            "defaults.weeks_per_year",
            "must not exceed limits.max_weeks_per_year",
        ));
    }
    if defaults.business_expense_rate < Decimal::ZERO
        || defaults.business_expense_rate > Decimal::ONE
    {
        return Err(invalid(
            "defaults.business_expense_rate",
            "must be between 0 and 1",
        ));
    }
    if get_overtime_multiplier(&defaults.overtime_multiplier).is_none() {
        return Err(invalid(
            "defaults.overtime_multiplier",
            format!("unknown multiplier '{}'", defaults.overtime_multiplier),
        ));
    }
    if get_fifo_roster(&defaults.fifo_roster).is_none() {
        return Err(invalid(
            "defaults.fifo_roster",
            format!("unknown roster '{}'", defaults.fifo_roster),
        ));
    }

    Ok(())
}

fn positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.service().name, "wage-engine");
        assert_eq!(loader.service().bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_shipped_configuration_matches_embedded_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::embedded().config());
    }

    #[test]
    fn test_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.defaults().weeks_per_year, dec("48"));
        assert_eq!(loader.defaults().business_expense_rate, dec("0.15"));
        assert!(loader.defaults().include_super_contribution);
        assert_eq!(loader.defaults().overtime_multiplier, "1.5x");
        assert_eq!(loader.defaults().fifo_roster, "2-1");
    }

    #[test]
    fn test_limits_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.limits().max_hourly_rate, dec("1000"));
        assert_eq!(loader.limits().max_hours_per_week, dec("100"));
        assert_eq!(loader.limits().max_weeks_per_year, dec("52"));
        assert_eq!(loader.limits().max_overtime_hours, dec("60"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_embedded_configuration_is_valid() {
        assert!(ConfigLoader::from_config(ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_expense_rate_above_one_rejected() {
        let mut config = ServiceConfig::default();
        config.defaults.business_expense_rate = dec("1.5");

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "defaults.business_expense_rate");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_default_roster_rejected() {
        let mut config = ServiceConfig::default();
        config.defaults.fifo_roster = "5-5".to_string();

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "defaults.fifo_roster");
                assert!(message.contains("5-5"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_default_multiplier_rejected() {
        let mut config = ServiceConfig::default();
        config.defaults.overtime_multiplier = "3x".to_string();

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_weeks_above_limit_rejected() {
        let mut config = ServiceConfig::default();
        config.defaults.weeks_per_year = dec("53");

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "defaults.weeks_per_year");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = ServiceConfig::default();
        config.limits.max_hours_per_week = Decimal::ZERO;

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::InvalidConfig { field, .. }) if field == "limits.max_hours_per_week"
        ));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = std::env::temp_dir().join(format!("wage-engine-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("service.yaml"), "service: [not, a, map]\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("service.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
