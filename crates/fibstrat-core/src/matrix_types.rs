//! Matrix type for the arbitrary-precision exponentiation engine.

use num_bigint::BigUint;

/// 2x2 matrix of `BigUint` values.
///
/// Entries grow without a bit-width ceiling, which is what keeps the
/// matrix strategies exact for Fibonacci-scale powers. The type is a
/// 2x2 grid by construction, so no runtime shape check is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix2x2 {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl Matrix2x2 {
    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::ZERO,
            c: BigUint::ZERO,
            d: BigUint::from(1u32),
        }
    }

    /// Create the Fibonacci transform matrix Q = [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::from(1u32),
            c: BigUint::from(1u32),
            d: BigUint::ZERO,
        }
    }

    /// Build a matrix from small entries.
    #[must_use]
    pub fn from_u32(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            a: BigUint::from(a),
            b: BigUint::from(b),
            c: BigUint::from(c),
            d: BigUint::from(d),
        }
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.a == BigUint::from(1u32)
            && self.b == BigUint::ZERO
            && self.c == BigUint::ZERO
            && self.d == BigUint::from(1u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let m = Matrix2x2::identity();
        assert!(m.is_identity());
    }

    #[test]
    fn fibonacci_q_matrix() {
        let q = Matrix2x2::fibonacci_q();
        assert_eq!(q.a, BigUint::from(1u32));
        assert_eq!(q.b, BigUint::from(1u32));
        assert_eq!(q.c, BigUint::from(1u32));
        assert_eq!(q.d, BigUint::ZERO);
    }

    #[test]
    fn from_u32_entries() {
        let m = Matrix2x2::from_u32(1, 2, 3, 4);
        assert_eq!(m.b, BigUint::from(2u32));
        assert_eq!(m.c, BigUint::from(3u32));
        assert!(!m.is_identity());
    }

    #[test]
    fn q_is_not_identity() {
        assert!(!Matrix2x2::fibonacci_q().is_identity());
    }
}
