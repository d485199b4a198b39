//! Fixed-width matrix strategy (precision-bounded).
//!
//! Counterpart of running the matrix power through a fixed-width
//! numeric-array library: entries are plain `u64`, so the strategy is
//! exact only while every intermediate fits 64 bits. Where such a
//! library would silently overflow, this one uses checked arithmetic
//! and reports `FibError::PrecisionLoss` instead.

use num_bigint::BigUint;

use crate::constants::MAX_FIXED_WIDTH_INDEX;
use crate::generator::{CoreGenerator, FibError};
use crate::value::FibValue;

type Mat2U64 = [[u64; 2]; 2];

const IDENTITY: Mat2U64 = [[1, 0], [0, 1]];
const Q: Mat2U64 = [[1, 1], [1, 0]];

fn mul_checked(x: &Mat2U64, y: &Mat2U64) -> Option<Mat2U64> {
    let mut out = [[0u64; 2]; 2];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let p0 = x[i][0].checked_mul(y[0][j])?;
            let p1 = x[i][1].checked_mul(y[1][j])?;
            *entry = p0.checked_add(p1)?;
        }
    }
    Some(out)
}

/// Q^n over `u64` entries by binary exponentiation.
///
/// Returns `None` as soon as any product or sum overflows.
fn power_checked(power: u64) -> Option<Mat2U64> {
    if power == 0 {
        return Some(IDENTITY);
    }

    let mut result = IDENTITY;
    let mut base = Q;
    let mut remaining = power;
    loop {
        if remaining & 1 == 1 {
            result = mul_checked(&result, &base)?;
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        base = mul_checked(&base, &base)?;
    }
    Some(result)
}

/// The naively bounded matrix strategy.
///
/// O(log n) through 64-bit matrix squaring, exact for
/// n <= [`MAX_FIXED_WIDTH_INDEX`]. Beyond that, Q^n holds F(n+1) in
/// entry [0][0] and no longer fits, so the computation fails loudly
/// rather than losing precision. Kept as an illustrative contrast to
/// the unbounded strategies.
pub struct FixedWidthMatrix;

impl FixedWidthMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FixedWidthMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreGenerator for FixedWidthMatrix {
    fn fib(&self, n: u64) -> Result<FibValue, FibError> {
        let m = power_checked(n).ok_or(FibError::PrecisionLoss {
            n,
            limit: MAX_FIXED_WIDTH_INDEX,
        })?;
        Ok(FibValue::Exact(BigUint::from(m[1][0])))
    }

    fn name(&self) -> &'static str {
        "FixedWidthMatrix"
    }
}
