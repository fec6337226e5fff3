use crate::config::ApproximationConfig;
use crate::types::{Approximation, Fraction, Step, Termination};

/// Convergent state of the Farey chain, kept in floating point until the result is built
struct ChainState {
    z: f64,
    numerator: f64,
    denominator: f64,
    previous_denominator: f64,
}

impl ChainState {
    fn new(value: f64) -> Self {
        Self {
            z: value,
            numerator: value.round(),
            denominator: 1.0,
            previous_denominator: 0.0,
        }
    }

    fn advance(&mut self, z: f64, numerator: f64, denominator: f64) {
        self.previous_denominator = self.denominator;
        self.denominator = denominator;
        self.numerator = numerator;
        self.z = z;
    }

    fn finish(&self, termination: Termination, iterations: usize) -> Approximation {
        Approximation {
            fraction: Fraction::new(to_integer(self.numerator), to_integer(self.denominator)),
            termination,
            iterations,
        }
    }
}

/// `f64::round` is half-away-from-zero; the cast saturates instead of wrapping.
fn to_integer(value: f64) -> i64 {
    value.round() as i64
}

/// Run the Farey-chain refinement for a finite, positive, non-integral `value`.
///
/// Each round computes the next continued-fraction residual `z`, the next convergent
/// denominator `d * floor(z) + d_prev` and the matching numerator `round(value * d)`.
/// Refinement stops once the residual's fractional part is within
/// `config.acceptable_error`, or before adopting a convergent whose numerator or
/// denominator reaches `config.value_ceiling`.
pub(super) fn refine<F>(value: f64, config: &ApproximationConfig, mut on_step: F) -> Approximation
where
    F: FnMut(&Step),
{
    let ceiling = config.value_ceiling as f64;
    let mut state = ChainState::new(value);
    let mut iterations = 0;

    loop {
        let fractional_part = state.z - state.z.floor();
        if fractional_part <= config.acceptable_error {
            return state.finish(Termination::WithinError, iterations);
        }

        let next_z = 1.0 / fractional_part;
        let next_denominator = state.denominator * next_z.floor() + state.previous_denominator;
        let next_numerator = (value * next_denominator).round();

        if next_denominator >= ceiling || next_numerator >= ceiling {
            return state.finish(Termination::CeilingReached, iterations);
        }

        state.advance(next_z, next_numerator, next_denominator);
        iterations += 1;

        let step = Step {
            iteration: iterations,
            z: state.z,
            numerator: state.numerator,
            denominator: state.denominator,
        };
        log::trace!(
            "farey step {}: z={} n={} d={}",
            step.iteration,
            step.z,
            step.numerator,
            step.denominator
        );
        on_step(&step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: f64, config: &ApproximationConfig) -> Approximation {
        refine(value, config, |_| {})
    }

    #[test]
    fn test_exact_halves_and_quarters() {
        let config = ApproximationConfig::default();
        let half = run(0.5, &config);
        assert_eq!(half.fraction, Fraction::new(1, 2));
        assert_eq!(half.termination, Termination::WithinError);
        assert_eq!(half.iterations, 1);

        assert_eq!(run(0.25, &config).fraction, Fraction::new(1, 4));
        assert_eq!(run(0.75, &config).fraction, Fraction::new(3, 4));
        assert_eq!(run(2.75, &config).fraction, Fraction::new(11, 4));
    }

    #[test]
    fn test_ceiling_keeps_previous_convergent() {
        let pi = std::f64::consts::PI;

        let approx = run(pi, &ApproximationConfig::default());
        assert_eq!(approx.fraction, Fraction::new(355, 113));
        assert_eq!(approx.termination, Termination::CeilingReached);
        assert_eq!(approx.iterations, 3);

        let coarse = ApproximationConfig::default().with_value_ceiling(100);
        assert_eq!(run(pi, &coarse).fraction, Fraction::new(22, 7));

        // 106 is the first convergent denominator at or above 1000.
        let medium = ApproximationConfig::default().with_value_ceiling(1000);
        assert_eq!(run(pi, &medium).fraction, Fraction::new(355, 113));
    }

    #[test]
    fn test_ceiling_of_one_returns_rounded_value() {
        let config = ApproximationConfig::default().with_value_ceiling(1);
        let approx = run(std::f64::consts::PI, &config);
        assert_eq!(approx.fraction, Fraction::new(3, 1));
        assert_eq!(approx.termination, Termination::CeilingReached);
        assert_eq!(approx.iterations, 0);
    }

    #[test]
    fn test_initial_numerator_is_rounded_value() {
        // 0.0001 needs a denominator of 10000, so the starting state round(x)/1 survives.
        let approx = run(0.0001, &ApproximationConfig::default());
        assert_eq!(approx.fraction, Fraction::new(0, 1));
        assert_eq!(approx.termination, Termination::CeilingReached);

        let approx = run(20000.5, &ApproximationConfig::default());
        assert_eq!(approx.fraction, Fraction::new(20001, 1));
    }

    #[test]
    fn test_residual_below_error_stops_immediately() {
        let approx = run(1e-9, &ApproximationConfig::default());
        assert_eq!(approx.fraction, Fraction::new(0, 1));
        assert_eq!(approx.termination, Termination::WithinError);
        assert_eq!(approx.iterations, 0);
    }

    #[test]
    fn test_steps_follow_fibonacci_for_golden_ratio() {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let mut denominators = Vec::new();
        let approx = refine(phi, &ApproximationConfig::default(), |step| {
            denominators.push(step.denominator)
        });

        assert_eq!(approx.fraction, Fraction::new(6765, 4181));
        assert_eq!(approx.iterations, 18);
        assert_eq!(denominators.len(), 18);
        assert_eq!(&denominators[..6], &[1.0, 2.0, 3.0, 5.0, 8.0, 13.0]);
        assert_eq!(denominators.last(), Some(&4181.0));
    }

    #[test]
    fn test_to_integer_rounds_half_away_from_zero() {
        assert_eq!(to_integer(2.5), 3);
        assert_eq!(to_integer(2.4999), 2);
        assert_eq!(to_integer(-2.5), -3);
        assert_eq!(to_integer(f64::MAX), i64::MAX);
    }
}
