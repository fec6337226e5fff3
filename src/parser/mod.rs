//! Decimal literal parsing module
//!
//! This module reads textual decimal values such as `0.333333` or `2.5e-3` into `f64`.
//! The main entry point is the `parse_decimal` function.

mod decimal;

pub use decimal::parse_decimal;
