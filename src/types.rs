//! Type definitions for decimal-to-fraction approximation
//!
//! This module defines the values produced by the approximator: the fraction itself,
//! the reason the refinement loop stopped, and the per-step records handed to
//! instrumentation hooks.

/// A numerator/denominator pair approximating a decimal value
///
/// Fractions are returned exactly as the refinement loop produced them. They are not
/// reduced to lowest terms, so `numerator` and `denominator` may share a common factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// The numerator, never negative for values produced by the approximator
    pub numerator: i64,
    /// The denominator, at least 1 for values produced by the approximator
    pub denominator: i64,
}

impl Fraction {
    /// Create a fraction from its parts
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Real-valued quotient `numerator / denominator`
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Reason the refinement loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The input had no fractional part, no refinement was needed
    Integral,
    /// The residual fractional part dropped to the acceptable error
    WithinError,
    /// The next convergent would have reached the value ceiling,
    /// the previous convergent was kept
    CeilingReached,
}

/// State of the refinement loop right after one advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based index of the advance
    pub iteration: usize,
    /// Continued-fraction residual carried into the next round
    pub z: f64,
    /// Current numerator, still in floating-point form
    pub numerator: f64,
    /// Current denominator, still in floating-point form
    pub denominator: f64,
}

/// Detailed outcome of one approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// The best fraction found
    pub fraction: Fraction,
    /// Why refinement stopped
    pub termination: Termination,
    /// Number of state advances performed
    pub iterations: usize,
}
