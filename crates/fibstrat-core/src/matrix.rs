//! Matrix exponentiation Fibonacci strategies.
//!
//! Both raise Q = [[1,1],[1,0]] to the n-th power over unbounded
//! integers and read F(n) from entry [1][0]. They differ only in the
//! exponentiation strategy: O(n) repeated multiplication versus
//! O(log n) repeated squaring.

use crate::generator::{CoreGenerator, FibError};
use crate::matrix_power::{power_by_repeated_multiplication, power_by_repeated_squaring};
use crate::matrix_types::Matrix2x2;
use crate::value::FibValue;

// The decorator validates n from a non-negative i64, so the cast back
// to i64 cannot wrap.
#[allow(clippy::cast_possible_wrap)]
fn as_power(n: u64) -> i64 {
    n as i64
}

/// Q^n via repeated multiplication: n - 1 matrix products.
pub struct MatrixRepeatedMultiplication;

impl MatrixRepeatedMultiplication {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixRepeatedMultiplication {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for MatrixRepeatedMultiplication {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let q = Matrix2x2::fibonacci_q();
        let m = power_by_repeated_multiplication(&q, as_power(n))?;
        Ok(FibValue::Exact(m.c))
    }

    fn name(&self) -> &'static str {
        "MatrixRepeatedMultiplication"
    }
}

/// Q^n via repeated squaring: O(log n) matrix products. The preferred
/// exact strategy for large n.
pub struct MatrixRepeatedSquaring;

impl MatrixRepeatedSquaring {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixRepeatedSquaring {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for MatrixRepeatedSquaring {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let q = Matrix2x2::fibonacci_q();
        let m = power_by_repeated_squaring(&q, as_power(n))?;
        Ok(FibValue::Exact(m.c))
    }

    fn name(&self) -> &'static str {
        "MatrixRepeatedSquaring"
    }
}
