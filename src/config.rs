//! Approximation tunables
//!
//! This module holds the two knobs trading precision against fraction complexity,
//! their validation, and loading them from TOML text.

use std::fmt;

/// Residual fractional part below which the current convergent is accepted
pub const DEFAULT_ACCEPTABLE_ERROR: f64 = 0.000_000_1;

/// Numerator/denominator magnitude at which refinement falls back to the previous convergent
pub const DEFAULT_VALUE_CEILING: u64 = 10_000;

/// Largest accepted ceiling: every integer up to 2^53 is exact in an `f64`
pub const MAX_VALUE_CEILING: u64 = 1 << 53;

/// Error type for configuration operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tunable is outside its accepted range
    InvalidValue(String),
    /// An error occurred while parsing configuration data
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Error parsing configuration data: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables of the Farey-chain approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximationConfig {
    /// Threshold on the residual fractional part that stops refinement
    pub acceptable_error: f64,
    /// Upper bound (exclusive) on numerator and denominator of refined convergents
    pub value_ceiling: u64,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            acceptable_error: DEFAULT_ACCEPTABLE_ERROR,
            value_ceiling: DEFAULT_VALUE_CEILING,
        }
    }
}

impl ApproximationConfig {
    /// Create a validated configuration
    pub fn new(acceptable_error: f64, value_ceiling: u64) -> Result<Self> {
        Self {
            acceptable_error,
            value_ceiling,
        }
        .validate()
    }

    /// Create a new configuration with a custom acceptable error
    pub fn with_acceptable_error(mut self, acceptable_error: f64) -> Self {
        self.acceptable_error = acceptable_error;
        self
    }

    /// Create a new configuration with a custom value ceiling
    pub fn with_value_ceiling(mut self, value_ceiling: u64) -> Self {
        self.value_ceiling = value_ceiling;
        self
    }

    /// Check both tunables, returning the configuration unchanged when they are usable
    ///
    /// `acceptable_error` must be finite and in `[0, 1)`; `value_ceiling` must be in
    /// `1..=MAX_VALUE_CEILING` so that state values below it convert to `i64` exactly.
    pub fn validate(self) -> Result<Self> {
        if !(0.0..1.0).contains(&self.acceptable_error) {
            return Err(reject(format!(
                "acceptable_error must be finite and in [0, 1), got {}",
                self.acceptable_error
            )));
        }
        if !(1..=MAX_VALUE_CEILING).contains(&self.value_ceiling) {
            return Err(reject(format!(
                "value_ceiling must be in 1..={}, got {}",
                MAX_VALUE_CEILING, self.value_ceiling
            )));
        }
        Ok(self)
    }

    /// Load a configuration from TOML text
    ///
    /// Keys may sit at the document root or under an `[approximation]` table.
    /// Missing keys keep their defaults and unknown keys are ignored.
    ///
    /// # Examples
    /// ```
    /// use decimal_fraction::config::ApproximationConfig;
    ///
    /// let config = ApproximationConfig::from_toml_str("value_ceiling = 100").unwrap();
    /// assert_eq!(config.value_ceiling, 100);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let root = parsed_toml
            .as_table()
            .ok_or_else(|| ConfigError::ParseError("Root is not a table".to_string()))?;

        let table = match root.get("approximation") {
            Some(section) => section.as_table().ok_or_else(|| {
                ConfigError::ParseError("approximation is not a table".to_string())
            })?,
            None => root,
        };

        let mut config = Self::default();

        if let Some(value) = table.get("acceptable_error") {
            config.acceptable_error = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| {
                    ConfigError::ParseError(format!(
                        "acceptable_error must be a number, got {}",
                        value.type_str()
                    ))
                })?;
        }

        if let Some(value) = table.get("value_ceiling") {
            let ceiling = value.as_integer().ok_or_else(|| {
                ConfigError::ParseError(format!(
                    "value_ceiling must be an integer, got {}",
                    value.type_str()
                ))
            })?;
            config.value_ceiling = u64::try_from(ceiling).map_err(|_| {
                reject(format!("value_ceiling must not be negative, got {}", ceiling))
            })?;
        }

        config.validate()
    }
}

fn reject(msg: String) -> ConfigError {
    log::warn!("rejecting approximation config: {}", msg);
    ConfigError::InvalidValue(msg)
}
