//! # Error Module
//!
//! Domain errors for Pocketbank, built with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every failed command leaves the accounts and credits it touched unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Account errors ===
    #[error("Insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    // === Credit errors ===
    #[error("Repayment of {requested} exceeds remaining loan balance {remaining}")]
    ExcessiveRepayment {
        requested: Decimal,
        remaining: Decimal,
    },

    // === Validation errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Build an `InvalidArgument` from anything printable
    pub fn invalid(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument(msg.into())
    }

    pub fn overflow(what: impl Into<String>) -> Self {
        CoreError::Overflow(what.into())
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    pub fn is_excessive_repayment(&self) -> bool {
        matches!(self, CoreError::ExcessiveRepayment { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, CoreError::Overflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::InsufficientFunds {
            needed: dec!(1000),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need 1000, available 500"
        );

        let err = CoreError::ExcessiveRepayment {
            requested: dec!(60000),
            remaining: dec!(45000),
        };
        assert_eq!(
            err.to_string(),
            "Repayment of 60000 exceeds remaining loan balance 45000"
        );

        let err = CoreError::invalid("loan term must be positive");
        assert_eq!(err.to_string(), "Invalid argument: loan term must be positive");
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::InsufficientFunds {
            needed: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_funds());
        assert!(!err.is_excessive_repayment());

        let err = CoreError::ExcessiveRepayment {
            requested: dec!(10),
            remaining: dec!(5),
        };
        assert!(err.is_excessive_repayment());

        assert!(CoreError::invalid("x").is_invalid_argument());

        let err = CoreError::overflow("deposit income");
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "Arithmetic overflow: deposit income");
    }
}
