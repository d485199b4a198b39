//! Result type spanning the exact and approximate regimes.

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// A computed Fibonacci term.
///
/// Exact strategies produce an unbounded integer; the closed-form
/// strategies trade exactness for O(1) arithmetic and produce a finite
/// precision real carrying bounded relative error.
#[derive(Debug, Clone, PartialEq)]
pub enum FibValue {
    /// Exact arbitrary-precision value.
    Exact(BigUint),
    /// Finite-precision approximation.
    Approximate(f64),
}

impl FibValue {
    /// Whether this value is bit-exact.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Borrow the exact value, if any.
    #[must_use]
    pub fn as_exact(&self) -> Option<&BigUint> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Approximate(_) => None,
        }
    }

    /// Consume into the exact value, if any.
    #[must_use]
    pub fn into_exact(self) -> Option<BigUint> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Approximate(_) => None,
        }
    }

    /// View the value as an `f64`.
    ///
    /// Exact values are converted with rounding, so this view is only
    /// suitable for tolerance comparisons.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Exact(v) => v.to_f64(),
            Self::Approximate(v) => Some(*v),
        }
    }
}

impl fmt::Display for FibValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v}"),
            Self::Approximate(v) => write!(f, "{v}"),
        }
    }
}

impl From<BigUint> for FibValue {
    fn from(v: BigUint) -> Self {
        Self::Exact(v)
    }
}
