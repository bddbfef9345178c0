//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Wraps everything below                         │
//! │  ├── ValidationError  - Request shape failures (too many items)        │
//! │  └── PaymentError     - Payment helper failures                        │
//! │                                                                         │
//! │  NOT errors: malformed prices/quantities. Coercion degrades them to    │
//! │  0.0 and the aggregator skips them. Nothing in coerce/totals fails.    │
//! │                                                                         │
//! │  tally-cli errors (in app)                                             │
//! │  └── ConfigError      - Bad environment configuration                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Payment error (wraps PaymentError).
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Request-level validation errors.
///
/// Raised by the checkout boundary before any totals are computed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// The order carries more line items than the boundary accepts.
    ///
    /// ## When This Occurs
    /// - A client posts a list longer than `TALLY_MAX_ITEMS`
    #[error("Order cannot have more than {max} items (got {count})")]
    TooManyItems { count: usize, max: usize },
}

// =============================================================================
// Payment Error
// =============================================================================

/// Payment helper errors. The messages are part of the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Amount or method was missing.
    #[error("Invalid input")]
    InvalidInput,

    /// Method is not on the allow-list.
    #[error("Unsupported payment method")]
    UnsupportedMethod { method: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooManyItems { count: 5, max: 3 };
        assert_eq!(err.to_string(), "Order cannot have more than 3 items (got 5)");

        let err = ValidationError::MustBePositive {
            field: "max_items".to_string(),
        };
        assert_eq!(err.to_string(), "max_items must be positive");
    }

    #[test]
    fn test_payment_error_messages() {
        assert_eq!(PaymentError::InvalidInput.to_string(), "Invalid input");
        let err = PaymentError::UnsupportedMethod {
            method: "bitcoin".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported payment method");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = ValidationError::TooManyItems { count: 2, max: 1 }.into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let core_err: CoreError = PaymentError::InvalidInput.into();
        assert!(matches!(core_err, CoreError::Payment(_)));
    }
}
