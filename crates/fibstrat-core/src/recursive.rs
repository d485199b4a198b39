//! Recursive Fibonacci strategies.
//!
//! `NaiveRecursion` is the textbook exponential-time definition, kept
//! as a complexity baseline. `TailRecursion` carries the last two terms
//! through accumulator arguments and runs in linear time.

use num_bigint::BigUint;

use crate::generator::{CoreGenerator, FibError};
use crate::value::FibValue;

/// Direct double self-recursion F(n-1) + F(n-2).
///
/// Exponential time: intractable beyond small n. Included as a
/// contrast, not for real use.
pub struct NaiveRecursion;

impl NaiveRecursion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn naive(n: u64) -> BigUint {
        match n {
            0 => BigUint::ZERO,
            1 => BigUint::from(1u32),
            _ => Self::naive(n - 1) + Self::naive(n - 2),
        }
    }
}

impl Default for NaiveRecursion {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for NaiveRecursion {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        Ok(FibValue::Exact(Self::naive(n)))
    }

    fn name(&self) -> &'static str {
        "NaiveRecursion"
    }
}

/// Accumulator-passing recursion carrying (second_last, last).
///
/// Linear time, one frame per term. Rust does not guarantee tail-call
/// elimination, so depth is bounded by the thread stack; `Sequential`
/// is the iterative rewrite with identical semantics.
pub struct TailRecursion;

impl TailRecursion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tail(remaining: u64, second_last: BigUint, last: BigUint) -> BigUint {
        match remaining {
            0 => second_last,
            1 => last,
            _ => {
                let next = second_last + &last;
                Self::tail(remaining - 1, last, next)
            }
        }
    }
}

impl Default for TailRecursion {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for TailRecursion {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        Ok(FibValue::Exact(Self::tail(
            n,
            BigUint::ZERO,
            BigUint::from(1u32),
        )))
    }

    fn name(&self) -> &'static str {
        "TailRecursion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(n: u64) -> BigUint {
        NaiveRecursion::new().fib(n).unwrap().into_exact().unwrap()
    }

    fn tail(n: u64) -> BigUint {
        TailRecursion::new().fib(n).unwrap().into_exact().unwrap()
    }

    #[test]
    fn naive_first_eleven_terms() {
        let expected: [u32; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(naive(n as u64), BigUint::from(*want), "F({n})");
        }
    }

    #[test]
    fn naive_f20() {
        assert_eq!(naive(20), BigUint::from(6765u32));
    }

    #[test]
    fn tail_first_eleven_terms() {
        let expected: [u32; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(tail(n as u64), BigUint::from(*want), "F({n})");
        }
    }

    #[test]
    fn tail_f50() {
        assert_eq!(tail(50), BigUint::from(12_586_269_025u64));
    }

    #[test]
    fn tail_f100_exceeds_64_bits() {
        assert_eq!(
            tail(100),
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn tail_matches_naive_on_small_terms() {
        for n in 0..=20 {
            assert_eq!(tail(n), naive(n), "F({n})");
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(NaiveRecursion::default().name(), "NaiveRecursion");
        assert_eq!(TailRecursion::default().name(), "TailRecursion");
    }
}
