//! # Payment Module
//!
//! Allow-list check for payment methods. No money moves here; this only
//! decides whether a payment request is acceptable.

use serde::Serialize;
use ts_rs::TS;

use crate::error::PaymentError;
use crate::types::PaymentMethod;

/// An accepted payment request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentReceipt {
    pub amount: f64,
    pub method: PaymentMethod,
}

/// Payment outcome as reported to callers.
///
/// ```json
/// { "success": true, "amount": 100.0, "method": "credit_card" }
/// { "success": false, "error": "Unsupported payment method" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PaymentResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub method: Option<PaymentMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

/// Checks a payment request against the supported methods.
///
/// ## Rules
/// - Missing amount or method → [`PaymentError::InvalidInput`]
/// - Method not in [`PaymentMethod::ALL`] → [`PaymentError::UnsupportedMethod`]
pub fn authorize_payment(
    amount: Option<f64>,
    method: Option<&str>,
) -> Result<PaymentReceipt, PaymentError> {
    let (Some(amount), Some(method)) = (amount, method) else {
        return Err(PaymentError::InvalidInput);
    };

    Ok(PaymentReceipt {
        amount,
        method: method.parse()?,
    })
}

/// Same as [`authorize_payment`], flattened into a [`PaymentResult`].
///
/// ## Example
/// ```rust
/// use tally_core::payment::process_payment;
///
/// let result = process_payment(Some(100.0), Some("credit_card"));
/// assert!(result.success);
///
/// let result = process_payment(Some(100.0), Some("bitcoin"));
/// assert_eq!(result.error.as_deref(), Some("Unsupported payment method"));
/// ```
pub fn process_payment(amount: Option<f64>, method: Option<&str>) -> PaymentResult {
    authorize_payment(amount, method).into()
}

impl From<Result<PaymentReceipt, PaymentError>> for PaymentResult {
    fn from(result: Result<PaymentReceipt, PaymentError>) -> Self {
        match result {
            Ok(receipt) => PaymentResult {
                success: true,
                amount: Some(receipt.amount),
                method: Some(receipt.method),
                error: None,
            },
            Err(err) => PaymentResult {
                success: false,
                amount: None,
                method: None,
                error: Some(err.to_string()),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
