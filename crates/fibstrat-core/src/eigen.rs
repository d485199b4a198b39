//! Closed-form Fibonacci approximations via eigen-decomposition.
//!
//! Q = [[1,1],[1,0]] diagonalizes as U·D·V with eigenvalues
//! phi = (1+sqrt 5)/2 and psi = (1-sqrt 5)/2. Both strategies here run
//! in O(1) arithmetic over `f64` and carry bounded relative error that
//! grows with n as rounding accumulates.

use crate::generator::{CoreGenerator, FibError};
use crate::value::FibValue;

type Mat2F64 = [[f64; 2]; 2];

fn mat_mul(x: Mat2F64, y: Mat2F64) -> Mat2F64 {
    [
        [
            x[0][0] * y[0][0] + x[0][1] * y[1][0],
            x[0][0] * y[0][1] + x[0][1] * y[1][1],
        ],
        [
            x[1][0] * y[0][0] + x[1][1] * y[1][0],
            x[1][0] * y[0][1] + x[1][1] * y[1][1],
        ],
    ]
}

/// Full closed form: U · D · V applied to the basis vector (1, 0).
///
/// D holds phi^n and psi^n; the psi term vanishes geometrically, so for
/// growing n only the dominant eigenvalue contributes.
pub struct EigenDecomposition;

impl EigenDecomposition {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for EigenDecomposition {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for EigenDecomposition {
    #[allow(clippy::cast_precision_loss)]
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let sqrt5 = 5.0_f64.sqrt();
        let phi = 0.5 * (1.0 + sqrt5);
        let psi = 0.5 * (1.0 - sqrt5);

        let exp = n as f64;
        let u = [[phi, psi], [1.0, 1.0]];
        let d = [[phi.powf(exp), 0.0], [0.0, psi.powf(exp)]];
        let v = [[1.0 / sqrt5, psi / sqrt5], [-1.0 / sqrt5, phi / sqrt5]];

        // F(n) = (U · D · V)[1][0]
        let m = mat_mul(mat_mul(u, d), v);
        Ok(FibValue::Approximate(m[1][0]))
    }

    fn name(&self) -> &'static str {
        "EigenDecomposition"
    }
}

/// Dominant-eigenvalue form: phi^n / sqrt(5), dropping the psi term.
///
/// Slightly coarser than the full closed form for small n; the dropped
/// term shrinks geometrically, so the error converges quickly.
pub struct LargestEigenvalue;

impl LargestEigenvalue {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LargestEigenvalue {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for LargestEigenvalue {
    #[allow(clippy::cast_precision_loss)]
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let sqrt5 = 5.0_f64.sqrt();
        let phi = 0.5 * (1.0 + sqrt5);
        Ok(FibValue::Approximate(phi.powf(n as f64) / sqrt5))
    }

    fn name(&self) -> &'static str {
        "LargestEigenvalue"
    }
}
