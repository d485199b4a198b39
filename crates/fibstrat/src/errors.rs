//! Error handling and exit codes.

use fibstrat_core::constants::exit_codes;
use fibstrat_core::FibError;

/// Map a computation error to the process exit code.
#[must_use]
pub fn exit_code(err: &FibError) -> i32 {
    match err {
        FibError::NegativeIndex(_) | FibError::NegativePower(_) => exit_codes::ERROR_DOMAIN,
        FibError::PrecisionLoss { .. } => exit_codes::ERROR_PRECISION,
        FibError::UnknownStrategy { .. } => exit_codes::ERROR_SELECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&FibError::NegativeIndex(-1)), 1);
        assert_eq!(exit_code(&FibError::NegativePower(-2)), 1);
        assert_eq!(exit_code(&FibError::PrecisionLoss { n: 100, limit: 92 }), 2);
        assert_eq!(
            exit_code(&FibError::UnknownStrategy {
                key: "bogus".into(),
                available: String::new(),
            }),
            4
        );
    }
}
