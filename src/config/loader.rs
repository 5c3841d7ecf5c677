//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::money::{ArithmeticContext, MAX_SCALE};
use crate::validation::Validator;

use super::types::EngineConfig;

/// The path reported for configuration parsed from an in-memory string.
const INLINE_SOURCE: &str = "<inline>";

/// Loads and provides access to engine configuration.
///
/// # Example
///
/// ```no_run
/// use pension_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// let ctx = loader.context();
/// let validator = loader.validator();
/// # Ok::<(), pension_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file cannot be read ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or values out of range
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            rounding = ?loader.config.arithmetic.rounding,
            money_scale = loader.config.arithmetic.money_scale,
            "Loaded engine configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use pension_engine::config::ConfigLoader;
    /// use pension_engine::money::RoundingMode;
    ///
    /// let loader = ConfigLoader::from_yaml_str("arithmetic:\n  rounding: down\n").unwrap();
    /// assert_eq!(loader.context().rounding, RoundingMode::Down);
    /// assert_eq!(loader.context().money_scale, 2);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, INLINE_SOURCE)
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::check(&config).map_err(|message| EngineError::ConfigParseError {
            path: path.to_string(),
            message,
        })?;

        Ok(Self { config })
    }

    /// Range checks serde cannot express.
    fn check(config: &EngineConfig) -> Result<(), String> {
        let arithmetic = &config.arithmetic;
        for (key, scale) in [
            ("arithmetic.money_scale", arithmetic.money_scale),
            ("arithmetic.factor_scale", arithmetic.factor_scale),
        ] {
            if scale > MAX_SCALE {
                return Err(format!("{} must be at most {}, got {}", key, MAX_SCALE, scale));
            }
        }

        let defaults = &config.defaults;
        for (key, frequency) in [
            ("defaults.accrual_frequency", defaults.accrual_frequency),
            (
                "defaults.payment_frequency_per_year",
                defaults.payment_frequency_per_year,
            ),
        ] {
            if frequency < 1 {
                return Err(format!("{} must be at least 1, got {}", key, frequency));
            }
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured arithmetic context.
    pub fn context(&self) -> ArithmeticContext {
        self.config.arithmetic
    }

    /// Returns a validator seeded with the configured input defaults.
    pub fn validator(&self) -> Validator {
        Validator::new(self.config.defaults.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::RoundingMode;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/engine.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.context(), ArithmeticContext::default());
        assert_eq!(loader.validator().defaults().payment_frequency_per_year, 12);
        assert_eq!(loader.validator().defaults().early_retirement_pct, dec("0.05"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/engine.yaml");
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { ref path }) if path == "/nonexistent/engine.yaml"
        ));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("{}").unwrap();
        assert_eq!(loader.context(), ArithmeticContext::default());
        assert_eq!(loader.validator().defaults().accrual_frequency, 1);
    }

    #[test]
    fn test_overrides_are_applied() {
        let yaml = r#"
arithmetic:
  rounding: half_even
  factor_scale: 10
defaults:
  accrual_frequency: 12
  early_retirement_pct: "0.06"
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        let ctx = loader.context();

        assert_eq!(ctx.rounding, RoundingMode::HalfEven);
        assert_eq!(ctx.money_scale, 2);
        assert_eq!(ctx.factor_scale, 10);
        assert_eq!(loader.validator().defaults().accrual_frequency, 12);
        assert_eq!(loader.validator().defaults().early_retirement_pct, dec("0.06"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("arithmetic: [unterminated");
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { ref path, .. }) if path == "<inline>"
        ));
    }

    #[test]
    fn test_scale_beyond_decimal_precision_is_rejected() {
        let err = ConfigLoader::from_yaml_str("arithmetic:\n  money_scale: 29\n").unwrap_err();
        match err {
            EngineError::ConfigParseError { message, .. } => {
                assert!(message.contains("arithmetic.money_scale"));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_frequency_default_is_rejected() {
        let err = ConfigLoader::from_yaml_str("defaults:\n  payment_frequency_per_year: 0\n")
            .unwrap_err();
        assert!(err.to_string().contains("payment_frequency_per_year"));
    }
}
