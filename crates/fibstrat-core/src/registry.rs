//! Generator factory and registry.
//!
//! The strategy set is closed and known at compile time, so the
//! registry is an explicit ordered slice of keys; a key resolves by
//! ordinal position or by case-insensitive name. Duplicate matches are
//! impossible by construction.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::eigen::{EigenDecomposition, LargestEigenvalue};
use crate::fixed_width::FixedWidthMatrix;
use crate::generator::{FibError, FibGenerator, Generator};
use crate::matrix::{MatrixRepeatedMultiplication, MatrixRepeatedSquaring};
use crate::recursive::{NaiveRecursion, TailRecursion};
use crate::sequential::Sequential;

/// Registered strategy keys, in ordinal order.
pub const STRATEGY_KEYS: [&str; 8] = [
    "naive",
    "tail",
    "sequential",
    "fixed",
    "multiply",
    "squaring",
    "eigen",
    "golden",
];

/// Key of the default strategy (repeated squaring).
pub const DEFAULT_STRATEGY: &str = "squaring";

/// Factory trait for resolving generators.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create a generator by key (ordinal or name).
    fn get(&self, key: &str) -> Result<Arc<dyn Generator>, FibError>;

    /// List all strategy keys in ordinal order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Strategies are stateless, so one instance per key serves the whole
/// process; the cache only memoizes construction.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Generator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Render the registry as `index=name` pairs for error messages
    /// and display.
    #[must_use]
    pub fn describe_keys() -> String {
        STRATEGY_KEYS
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{i}={name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Map an ordinal or case-insensitive name to its canonical key.
    fn canonicalize(key: &str) -> Result<&'static str, FibError> {
        let wanted = key.trim().to_ascii_lowercase();
        if let Ok(index) = wanted.parse::<usize>() {
            return STRATEGY_KEYS
                .get(index)
                .copied()
                .ok_or_else(|| FibError::UnknownStrategy {
                    key: key.to_string(),
                    available: Self::describe_keys(),
                });
        }
        STRATEGY_KEYS
            .iter()
            .find(|name| **name == wanted)
            .copied()
            .ok_or_else(|| FibError::UnknownStrategy {
                key: key.to_string(),
                available: Self::describe_keys(),
            })
    }

    fn create_generator(canonical: &str) -> Arc<dyn Generator> {
        match canonical {
            "naive" => Arc::new(FibGenerator::new(Arc::new(NaiveRecursion::new()))),
            "tail" => Arc::new(FibGenerator::new(Arc::new(TailRecursion::new()))),
            "sequential" => Arc::new(FibGenerator::new(Arc::new(Sequential::new()))),
            "fixed" => Arc::new(FibGenerator::new(Arc::new(FixedWidthMatrix::new()))),
            "multiply" => Arc::new(FibGenerator::new(Arc::new(
                MatrixRepeatedMultiplication::new(),
            ))),
            "squaring" => Arc::new(FibGenerator::new(Arc::new(MatrixRepeatedSquaring::new()))),
            "eigen" => Arc::new(FibGenerator::new(Arc::new(EigenDecomposition::new()))),
            "golden" => Arc::new(FibGenerator::new(Arc::new(LargestEigenvalue::new()))),
            other => unreachable!("canonical key '{other}' is not in STRATEGY_KEYS"),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, key: &str) -> Result<Arc<dyn Generator>, FibError> {
        let canonical = Self::canonicalize(key)?;

        if let Some(gen) = self.cache.read().get(canonical) {
            return Ok(Arc::clone(gen));
        }

        let gen = Self::create_generator(canonical);
        self.cache
            .write()
            .insert(canonical.to_string(), Arc::clone(&gen));
        Ok(gen)
    }

    fn available(&self) -> Vec<&str> {
        STRATEGY_KEYS.to_vec()
    }
}
