//! # Validation Module
//!
//! Order acceptance rules for Order Tally.
//!
//! ## Two Policies Over the Same Items
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  calculate_total (totals.rs)      is_valid_order (THIS MODULE)          │
//! │  ────────────────────────────     ────────────────────────────          │
//! │  best effort                      all-or-nothing                        │
//! │  bad item → skipped               bad item → whole order invalid        │
//! │  empty → 0.0                      empty → false                         │
//! │                                                                         │
//! │  Callers pick the policy: hard reject or partial sum.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::is_valid_order;
//! use tally_core::LineItem;
//!
//! let order = vec![Some(LineItem::new(1_i64, 1_i64)), Some(LineItem::new(0_i64, 1_i64))];
//! assert!(!is_valid_order(Some(order.as_slice())));
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::LineItem;

// =============================================================================
// Order Validators
// =============================================================================

/// Checks that an order is non-empty and every item passes the inclusion rule.
///
/// A null element counts as an invalid item.
pub fn is_valid_order(items: Option<&[Option<LineItem>]>) -> bool {
    match items {
        Some(items) if !items.is_empty() => items
            .iter()
            .all(|item| item.as_ref().is_some_and(LineItem::is_countable)),
        _ => false,
    }
}

/// Checks whether at least one item would contribute to the total.
pub fn has_countable_item(items: &[Option<LineItem>]) -> bool {
    items
        .iter()
        .flatten()
        .any(LineItem::is_countable)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items accepted in one request.
///
/// ## Rules
/// - Must not exceed `max`
pub fn validate_item_count(count: usize, max: usize) -> ValidationResult<()> {
    if count > max {
        return Err(ValidationError::TooManyItems { count, max });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn item(price: impl Into<FieldValue>, quantity: impl Into<FieldValue>) -> Option<LineItem> {
        Some(LineItem::new(price, quantity))
    }

    #[test]
    fn test_empty_orders_are_invalid() {
        assert!(!is_valid_order(None));
        assert!(!is_valid_order(Some(&[])));
    }

    #[test]
    fn test_all_or_nothing() {
        assert!(is_valid_order(Some(&[item(1_i64, 1_i64)])));
        assert!(is_valid_order(Some(&[item(10.50, 2_i64), item("$5", "3")])));

        assert!(!is_valid_order(Some(&[item(0_i64, 2_i64)])));
        assert!(!is_valid_order(Some(&[item(1_i64, 1_i64), item(0_i64, 1_i64)])));
        assert!(!is_valid_order(Some(&[item(1_i64, 1_i64), None])));
        assert!(!is_valid_order(Some(&[item("invalid", 1_i64)])));
        assert!(!is_valid_order(Some(&[item(f64::NAN, 1_i64)])));
    }

    #[test]
    fn test_has_countable_item() {
        assert!(!has_countable_item(&[]));
        assert!(!has_countable_item(&[None, item(0_i64, 2_i64), item(-5_i64, 1_i64)]));
        assert!(has_countable_item(&[item(0_i64, 2_i64), None, item(1.5, 1_i64)]));
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count(0, 10).is_ok());
        assert!(validate_item_count(10, 10).is_ok());
        assert!(matches!(
            validate_item_count(11, 10),
            Err(ValidationError::TooManyItems { count: 11, max: 10 })
        ));
    }
}
