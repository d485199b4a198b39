//! The two matrix exponentiation strategies.
//!
//! `power_by_repeated_multiplication` is the O(power) baseline;
//! `power_by_repeated_squaring` is the O(log power) binary
//! exponentiation used by the default Fibonacci strategy. Both operate
//! on unbounded-precision entries, so cost per multiplication grows
//! with the bit-length of the operands.

use crate::generator::FibError;
use crate::matrix_ops::{matrix_multiply, matrix_square};
use crate::matrix_types::Matrix2x2;

/// Compute `matrix^power` by iterated multiplication.
///
/// Performs `power - 1` multiplications. Returns the identity for
/// `power == 0` and a copy of the input for `power == 1`.
pub fn power_by_repeated_multiplication(
    matrix: &Matrix2x2,
    power: i64,
) -> Result<Matrix2x2, FibError> {
    let power = u64::try_from(power).map_err(|_| FibError::NegativePower(power))?;
    if power == 0 {
        return Ok(Matrix2x2::identity());
    }

    let mut result = matrix.clone();
    for _ in 1..power {
        result = matrix_multiply(&result, matrix);
    }
    Ok(result)
}

/// Compute `matrix^power` by binary exponentiation (square-and-multiply).
///
/// Scans the exponent bits from the least significant: the running base
/// is squared each round and multiplied into the accumulator on set
/// bits. The final squaring is skipped once the remaining exponent is
/// exhausted. O(log power) multiplications.
pub fn power_by_repeated_squaring(matrix: &Matrix2x2, power: i64) -> Result<Matrix2x2, FibError> {
    let power = u64::try_from(power).map_err(|_| FibError::NegativePower(power))?;
    if power == 0 {
        return Ok(Matrix2x2::identity());
    }
    if power == 1 {
        return Ok(matrix.clone());
    }

    let mut result = Matrix2x2::identity();
    let mut base = matrix.clone();
    let mut remaining = power;
    loop {
        if remaining & 1 == 1 {
            result = matrix_multiply(&result, &base);
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        base = matrix_square(&base);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn power_zero_is_identity() {
        let q = Matrix2x2::fibonacci_q();
        assert!(power_by_repeated_multiplication(&q, 0).unwrap().is_identity());
        assert!(power_by_repeated_squaring(&q, 0).unwrap().is_identity());
    }

    #[test]
    fn power_one_is_input() {
        let m = Matrix2x2::from_u32(1, 2, 3, 4);
        assert_eq!(power_by_repeated_multiplication(&m, 1).unwrap(), m);
        assert_eq!(power_by_repeated_squaring(&m, 1).unwrap(), m);
    }

    #[test]
    fn negative_power_is_rejected() {
        let q = Matrix2x2::fibonacci_q();
        assert!(matches!(
            power_by_repeated_multiplication(&q, -1),
            Err(FibError::NegativePower(-1))
        ));
        assert!(matches!(
            power_by_repeated_squaring(&q, -7),
            Err(FibError::NegativePower(-7))
        ));
    }

    #[test]
    fn q_power_10() {
        // Q^10: a = F(11) = 89, b = c = F(10) = 55, d = F(9) = 34
        let q = Matrix2x2::fibonacci_q();
        let expected = Matrix2x2::from_u32(89, 55, 55, 34);
        assert_eq!(power_by_repeated_multiplication(&q, 10).unwrap(), expected);
        assert_eq!(power_by_repeated_squaring(&q, 10).unwrap(), expected);
    }

    #[test]
    fn both_power_functions_agree() {
        let q = Matrix2x2::fibonacci_q();
        for n in 0..=64 {
            let by_mul = power_by_repeated_multiplication(&q, n).unwrap();
            let by_sqr = power_by_repeated_squaring(&q, n).unwrap();
            assert_eq!(by_mul, by_sqr, "Q^{n} mismatch");
        }
    }

    #[test]
    fn semigroup_law_on_q() {
        // power(M, a+b) == power(M, a) * power(M, b)
        let q = Matrix2x2::fibonacci_q();
        for a in 0..8 {
            for b in 0..8 {
                let combined = power_by_repeated_squaring(&q, a + b).unwrap();
                let left = power_by_repeated_squaring(&q, a).unwrap();
                let right = power_by_repeated_squaring(&q, b).unwrap();
                assert_eq!(combined, matrix_multiply(&left, &right));
            }
        }
    }

    #[test]
    fn squaring_handles_large_power() {
        // Q^100 carries F(100), a value beyond 64-bit range
        let q = Matrix2x2::fibonacci_q();
        let q100 = power_by_repeated_squaring(&q, 100).unwrap();
        assert_eq!(
            q100.c,
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn power_of_arbitrary_matrix() {
        // [[2,0],[0,2]]^5 = [[32,0],[0,32]]
        let m = Matrix2x2::from_u32(2, 0, 0, 2);
        let m5 = power_by_repeated_squaring(&m, 5).unwrap();
        assert_eq!(m5, Matrix2x2::from_u32(32, 0, 0, 32));
        assert_eq!(power_by_repeated_multiplication(&m, 5).unwrap(), m5);
    }
}
