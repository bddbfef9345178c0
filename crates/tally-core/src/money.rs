//! # Money Module
//!
//! Discount arithmetic on order totals.
//!
//! ## Why f64 here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Totals come out of the aggregator as finite f64 values. Rounding and   │
//! │  locale formatting belong to whoever displays the number, so this       │
//! │  module stays in f64 and never rounds.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::apply_discount;
//!
//! assert_eq!(apply_discount(Some(100.0), Some(10.0)), Some(90.0));
//! assert_eq!(apply_discount(Some(100.0), Some(250.0)), Some(0.0)); // clamped to 100%
//! assert_eq!(apply_discount(None, Some(10.0)), None);
//! ```

/// Largest discount percentage honoured.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

/// Applies a percentage discount to a total.
///
/// ## Rules
/// - No total → `None`
/// - No percentage → total unchanged
/// - Percentage is clamped to at most 100
/// - Result never goes below zero
///
/// ## User Workflow
/// ```text
/// Order Total: $100.00
///      │
///      ▼
/// apply_discount(10%) ← THIS FUNCTION
///      │
///      ▼
/// Discounted Total: $90.00
/// ```
pub fn apply_discount(total: Option<f64>, percent: Option<f64>) -> Option<f64> {
    let total = total?;
    let Some(percent) = percent else {
        return Some(total);
    };

    let percent = percent.min(MAX_DISCOUNT_PERCENT);
    let discount_amount = total * (percent / 100.0);
    Some((total - discount_amount).max(0.0))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount() {
        assert_eq!(apply_discount(Some(100.0), Some(10.0)), Some(90.0));
        assert_eq!(apply_discount(Some(36.75), Some(0.0)), Some(36.75));
        assert_eq!(apply_discount(Some(200.0), Some(50.0)), Some(100.0));
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(apply_discount(None, Some(10.0)), None);
        assert_eq!(apply_discount(None, None), None);
        assert_eq!(apply_discount(Some(100.0), None), Some(100.0));
    }

    #[test]
    fn test_percentage_clamped_to_one_hundred() {
        assert_eq!(apply_discount(Some(100.0), Some(100.0)), Some(0.0));
        assert_eq!(apply_discount(Some(100.0), Some(150.0)), Some(0.0));
    }

    #[test]
    fn test_result_floored_at_zero() {
        assert_eq!(apply_discount(Some(-20.0), Some(10.0)), Some(0.0));
    }

    #[test]
    fn test_negative_percentage_is_a_surcharge() {
        // Only the upper bound is clamped.
        assert_eq!(apply_discount(Some(100.0), Some(-10.0)), Some(110.0));
    }
}
