//! Matrix multiplication operations.

use crate::matrix_types::Matrix2x2;

/// Multiply two 2x2 matrices with the standard four-entry product.
///
/// No overflow check is needed: entries are unbounded integers, so the
/// product is exact at any magnitude. The general form (eight
/// multiplications) is kept because the power functions accept arbitrary
/// matrices, not just powers of the symmetric Fibonacci Q matrix.
#[must_use]
pub fn matrix_multiply(x: &Matrix2x2, y: &Matrix2x2) -> Matrix2x2 {
    Matrix2x2 {
        a: &x.a * &y.a + &x.b * &y.c,
        b: &x.a * &y.b + &x.b * &y.d,
        c: &x.c * &y.a + &x.d * &y.c,
        d: &x.c * &y.b + &x.d * &y.d,
    }
}

/// Square a 2x2 matrix.
#[must_use]
pub fn matrix_square(m: &Matrix2x2) -> Matrix2x2 {
    matrix_multiply(m, m)
}
