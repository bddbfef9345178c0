//! # Checkout Boundary
//!
//! Turns a raw JSON order body into a response, without any transport.
//! Whatever serves requests (HTTP handler, CLI, queue consumer) calls in
//! here and renders the result.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  body: {"items": [...]}                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items missing / null / not an array ──► treated as []                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  keep JSON objects only ──► LineItem                                    │
//! │       │                                                                 │
//! │       ├── count > max_items ──► 400 VALIDATION_ERROR "Too many items"   │
//! │       │                                                                 │
//! │       ├── non-empty and nothing countable                               │
//! │       │        ──► 400 INVALID_ORDER "Invalid order items"              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_breakdown ──► 200 { success, total, items, skipped }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};
use crate::totals::calculate_breakdown;
use crate::types::LineItem;
use crate::validation::{has_countable_item, is_valid_order, validate_item_count};
use crate::DEFAULT_MAX_ITEMS;

// =============================================================================
// Limits
// =============================================================================

/// Bounds applied to a request before any arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutLimits {
    max_items: usize,
}

impl CheckoutLimits {
    /// Creates limits; `max_items` must be at least 1.
    pub fn new(max_items: usize) -> ValidationResult<Self> {
        if max_items == 0 {
            return Err(ValidationError::MustBePositive {
                field: "max_items".to_string(),
            });
        }
        Ok(CheckoutLimits { max_items })
    }

    #[inline]
    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

impl Default for CheckoutLimits {
    fn default() -> Self {
        CheckoutLimits {
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Machine-readable rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request shape failed validation (400)
    ValidationError,

    /// Every item had an invalid price or quantity (400)
    InvalidOrder,

    /// Payment amount or method was refused (400)
    PaymentFailed,
}

impl ErrorCode {
    /// HTTP-style status a transport should use.
    pub const fn status(&self) -> u16 {
        match self {
            ErrorCode::ValidationError | ErrorCode::InvalidOrder | ErrorCode::PaymentFailed => 400,
        }
    }
}

/// Successful total calculation.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TotalReport {
    pub success: bool,
    pub total: f64,
    #[ts(type = "Array<{ price: unknown, quantity: unknown }>")]
    pub items: Vec<LineItem>,
    pub skipped: Vec<usize>,
    pub message: String,
}

/// A refused request.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Rejection {
    pub success: bool,
    pub code: ErrorCode,
    pub error: String,
    pub message: String,
}

impl Rejection {
    fn new(code: ErrorCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Rejection {
            success: false,
            code,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<CoreError> for Rejection {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(ValidationError::TooManyItems { .. }) => {
                Rejection::new(ErrorCode::ValidationError, "Too many items", err.to_string())
            }
            CoreError::Validation(_) => {
                Rejection::new(ErrorCode::ValidationError, "Invalid request", err.to_string())
            }
            CoreError::Payment(_) => {
                Rejection::new(ErrorCode::PaymentFailed, "Payment rejected", err.to_string())
            }
        }
    }
}

/// Outcome of [`calculate_total_request`].
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum CheckoutResponse {
    Accepted(TotalReport),
    Rejected(Rejection),
}

impl CheckoutResponse {
    /// HTTP-style status a transport should use.
    pub fn status(&self) -> u16 {
        match self {
            CheckoutResponse::Accepted(_) => 200,
            CheckoutResponse::Rejected(rejection) => rejection.code.status(),
        }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckoutResponse::Accepted(_))
    }
}

/// Outcome of [`validate_order_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub valid: bool,
    pub item_count: usize,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Computes the total for a raw order body.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use tally_core::checkout::{calculate_total_request, CheckoutLimits, CheckoutResponse};
///
/// let body = json!({"items": [{"price": "$5.25", "quantity": 3}, "junk"]});
/// match calculate_total_request(&body, &CheckoutLimits::default()) {
///     CheckoutResponse::Accepted(report) => assert_eq!(report.total, 15.75),
///     CheckoutResponse::Rejected(_) => unreachable!(),
/// }
/// ```
pub fn calculate_total_request(body: &Value, limits: &CheckoutLimits) -> CheckoutResponse {
    let items = match prepare_items(body, limits) {
        Ok(items) => items,
        Err(err) => {
            warn!(error = %err, "Order total request rejected");
            return CheckoutResponse::Rejected(err.into());
        }
    };

    if !items.is_empty() && !has_countable_item(&items) {
        warn!(count = items.len(), "Invalid order calculation attempted: all items invalid");
        return CheckoutResponse::Rejected(Rejection::new(
            ErrorCode::InvalidOrder,
            "Invalid order items",
            "All items must have valid price and quantity",
        ));
    }

    let breakdown = calculate_breakdown(Some(items.as_slice()));
    debug!(
        total = breakdown.total,
        counted = breakdown.counted,
        skipped = breakdown.skipped.len(),
        "Order total calculated"
    );

    CheckoutResponse::Accepted(TotalReport {
        success: true,
        total: breakdown.total,
        items: items.into_iter().flatten().collect(),
        skipped: breakdown.skipped,
        message: "Total calculated successfully".to_string(),
    })
}

/// Applies the all-or-nothing validator to a raw order body.
pub fn validate_order_request(body: &Value, limits: &CheckoutLimits) -> CoreResult<ValidationReport> {
    let items = prepare_items(body, limits)?;
    Ok(ValidationReport {
        valid: is_valid_order(Some(items.as_slice())),
        item_count: items.len(),
    })
}

/// Extracts the record entries of `body["items"]`, enforcing the size limit.
fn prepare_items(body: &Value, limits: &CheckoutLimits) -> CoreResult<Vec<Option<LineItem>>> {
    let entries: &[Value] = match body.get("items") {
        Some(Value::Array(entries)) => entries.as_slice(),
        None | Some(Value::Null) => &[],
        Some(other) => {
            warn!(kind = json_kind(other), "items is not an array, treating as empty");
            &[]
        }
    };

    let items: Vec<Option<LineItem>> = entries
        .iter()
        .filter_map(Value::as_object)
        .map(|object| Some(LineItem::from_object(object)))
        .collect();

    if items.len() < entries.len() {
        debug!(dropped = entries.len() - items.len(), "Dropped non-record item entries");
    }

    validate_item_count(items.len(), limits.max_items())?;
    Ok(items)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
