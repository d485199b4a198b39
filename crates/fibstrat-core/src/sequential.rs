//! Sequential (iterative) Fibonacci strategy.

use num_bigint::BigUint;

use crate::generator::{CoreGenerator, FibError};
use crate::value::FibValue;

/// Classic two-variable iterative update. O(n) additions of growing
/// cost; the simplest correct baseline for validating other strategies.
pub struct Sequential;

impl Sequential {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for Sequential {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let mut a = BigUint::ZERO;
        let mut b = BigUint::from(1u32);
        for _ in 0..n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        Ok(FibValue::Exact(a))
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
