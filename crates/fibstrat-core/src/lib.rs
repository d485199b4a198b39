//! # fibstrat-core
//!
//! Fibonacci strategy family over an arbitrary-precision 2x2 matrix
//! exponentiation engine. Eight interchangeable strategies compute
//! F(n), from the exponential naive recursion to O(log n) repeated
//! squaring and O(1) closed-form approximations, for comparing
//! complexity classes on the same problem.

pub mod constants;
pub mod eigen;
pub mod fixed_width;
pub mod generator;
pub mod matrix;
pub mod matrix_ops;
pub mod matrix_power;
pub mod matrix_types;
pub mod recursive;
pub mod registry;
pub mod sequential;
pub mod value;

// Re-exports
pub use constants::MAX_FIXED_WIDTH_INDEX;
pub use generator::{CoreGenerator, FibError, FibGenerator, Generator};
pub use matrix_power::{power_by_repeated_multiplication, power_by_repeated_squaring};
pub use matrix_types::Matrix2x2;
pub use registry::{DefaultFactory, GeneratorFactory, DEFAULT_STRATEGY, STRATEGY_KEYS};
pub use value::FibValue;

use num_bigint::BigUint;

/// Compute F(n) with the default strategy (repeated squaring).
///
/// Convenience for simple use cases; for strategy selection use
/// [`compute_fibonacci`] or the [`registry::DefaultFactory`] directly.
///
/// # Example
/// ```
/// assert_eq!(fibstrat_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibstrat_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    use generator::CoreGenerator;

    matrix::MatrixRepeatedSquaring::new()
        .fib(n)
        .expect("repeated squaring should not fail for a valid index")
        .into_exact()
        .expect("repeated squaring always yields an exact value")
}

/// Compute F(n) with the strategy named by `strategy`.
///
/// The selector accepts an ordinal index or a case-insensitive name
/// from [`STRATEGY_KEYS`]. Negative `n` fails with
/// [`FibError::NegativeIndex`] before any computation starts.
///
/// # Example
/// ```
/// let value = fibstrat_core::compute_fibonacci(20, "sequential").unwrap();
/// assert_eq!(value.to_string(), "6765");
/// ```
pub fn compute_fibonacci(n: i64, strategy: &str) -> Result<FibValue, FibError> {
    DefaultFactory::new().get(strategy)?.compute(n)
}
