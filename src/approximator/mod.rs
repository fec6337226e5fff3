//! Decimal to fraction approximation
//!
//! This module turns a non-negative decimal value into a best-fit fraction using the
//! Farey-chain form of the continued-fraction algorithm. The main entry point is
//! [`FractionApproximator::approximate`].

mod farey;

use std::fmt;

use crate::config::{ApproximationConfig, ConfigError};
use crate::parser::parse_decimal;
use crate::types::{Approximation, Fraction, Step, Termination};

/// Error type for approximation operations
#[derive(Debug, Clone, PartialEq)]
pub enum ApproximationError {
    /// The value is negative, NaN, infinite, or too large for an `i64` numerator
    InvalidInput(f64),
    /// The text passed to `approximate_str` is not a decimal literal
    MalformedInput(String),
}

impl fmt::Display for ApproximationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproximationError::InvalidInput(value) => write!(
                f,
                "Only non-negative finite values below 2^63 are supported, got {}",
                value
            ),
            ApproximationError::MalformedInput(msg) => write!(f, "Malformed decimal input: {}", msg),
        }
    }
}

impl std::error::Error for ApproximationError {}

type Result<T> = std::result::Result<T, ApproximationError>;

/// Smallest value whose integer part no longer fits in an `i64` (2^63)
const INTEGER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Approximates decimal values with fractions under a fixed configuration
///
/// The approximator holds no state besides its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FractionApproximator {
    config: ApproximationConfig,
}

impl FractionApproximator {
    /// Create an approximator using the given tunables
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when `config` fails
    /// [`ApproximationConfig::validate`].
    pub fn new(config: ApproximationConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// The tunables this approximator runs with
    pub fn config(&self) -> &ApproximationConfig {
        &self.config
    }

    /// Approximate `value` with a fraction
    ///
    /// Integral values (including zero) come back as `value/1` without refinement.
    /// The result is not reduced to lowest terms.
    ///
    /// # Errors
    /// Returns [`ApproximationError::InvalidInput`] when `value` is negative, not finite,
    /// or at least 2^63.
    ///
    /// # Examples
    /// ```
    /// use decimal_fraction::{Fraction, FractionApproximator};
    ///
    /// let approximator = FractionApproximator::default();
    /// assert_eq!(approximator.approximate(1.5).unwrap(), Fraction::new(3, 2));
    /// ```
    pub fn approximate(&self, value: f64) -> Result<Fraction> {
        self.approximate_detailed(value)
            .map(|approximation| approximation.fraction)
    }

    /// Approximate `value`, also reporting why refinement stopped and how many steps it took
    pub fn approximate_detailed(&self, value: f64) -> Result<Approximation> {
        self.approximate_traced(value, |_| {})
    }

    /// Approximate `value`, calling `on_step` after every refinement step
    pub fn approximate_traced<F>(&self, value: f64, on_step: F) -> Result<Approximation>
    where
        F: FnMut(&Step),
    {
        if !(0.0..INTEGER_LIMIT).contains(&value) {
            return Err(ApproximationError::InvalidInput(value));
        }

        let approximation = if value == value.floor() {
            Approximation {
                fraction: Fraction::new(value.round() as i64, 1),
                termination: Termination::Integral,
                iterations: 0,
            }
        } else {
            farey::refine(value, &self.config, on_step)
        };

        log::debug!(
            "approximated {} as {}/{} ({:?} after {} steps)",
            value,
            approximation.fraction.numerator,
            approximation.fraction.denominator,
            approximation.termination,
            approximation.iterations
        );

        Ok(approximation)
    }

    /// Parse a decimal literal such as `"0.333333"` and approximate it
    ///
    /// # Errors
    /// Returns [`ApproximationError::MalformedInput`] when `input` is not a decimal literal
    /// and [`ApproximationError::InvalidInput`] when it denotes a negative value.
    pub fn approximate_str(&self, input: &str) -> Result<Fraction> {
        let value = parse_decimal(input).map_err(ApproximationError::MalformedInput)?;
        self.approximate(value)
    }
}

/// Approximate `value` using the default tunables
///
/// # Examples
/// ```
/// use decimal_fraction::{approximate, Fraction};
///
/// assert_eq!(approximate(0.5).unwrap(), Fraction::new(1, 2));
/// ```
pub fn approximate(value: f64) -> Result<Fraction> {
    FractionApproximator::default().approximate(value)
}
