//! Generator traits and the `FibGenerator` decorator.
//!
//! `Generator` is the public trait consumed by the registry and CLI.
//! `CoreGenerator` is the internal trait implemented by the strategy
//! variants. `FibGenerator` is a decorator that adds the shared
//! input-domain validation, so no strategy duplicates it.

use std::sync::Arc;

use crate::value::FibValue;

/// Error type for Fibonacci computations.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The requested index is outside the sequence domain.
    #[error("n = {0} must be a non-negative integer")]
    NegativeIndex(i64),

    /// A matrix power with a negative exponent was requested.
    #[error("power = {0} must be a non-negative integer")]
    NegativePower(i64),

    /// The strategy key matched no registered strategy.
    #[error("unknown strategy '{key}'; available: {available}")]
    UnknownStrategy { key: String, available: String },

    /// The fixed-width strategy overflowed its 64-bit entries.
    #[error("F({n}) exceeds the 64-bit range of the fixed-width strategy (exact up to n = {limit})")]
    PrecisionLoss { n: u64, limit: u64 },
}

/// Public trait for Fibonacci generators.
///
/// Every call is pure given its input; implementations hold no mutable
/// state, so a single instance may serve concurrent callers.
pub trait Generator: Send + Sync + std::fmt::Debug {
    /// Compute F(n), rejecting negative indices before any work starts.
    fn compute(&self, n: i64) -> Result<FibValue, FibError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Internal trait for strategy implementations.
///
/// Receives an already-validated index. Wrapped by `FibGenerator`,
/// which owns the domain check.
pub trait CoreGenerator: Send + Sync {
    /// Compute F(n) for a validated non-negative index.
    fn fib(&self, n: u64) -> Result<FibValue, FibError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreGenerator` with the shared validation.
pub struct FibGenerator {
    inner: Arc<dyn CoreGenerator>,
}

impl FibGenerator {
    /// Create a new `FibGenerator` wrapping the given strategy.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreGenerator>) -> Self {
        Self { inner }
    }
}

impl std::fmt::Debug for FibGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FibGenerator")
            .field("name", &self.inner.name())
            .finish()
    }
}

impl Generator for FibGenerator {
    fn compute(&self, n: i64) -> Result<FibValue, FibError> {
        let n = u64::try_from(n).map_err(|_| FibError::NegativeIndex(n))?;
        self.inner.fib(n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
