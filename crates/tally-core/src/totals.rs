//! # Totals Module
//!
//! Sums an order's line items into a single finite total.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: Option<&[Option<LineItem>]>                                     │
//! │       │                                                                 │
//! │       ├── None / empty ─────────────────────────────► 0.0               │
//! │       │                                                                 │
//! │       ▼  for each element                                               │
//! │  None element? ──yes──► skip                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  coerce(price), coerce(quantity)                                        │
//! │       │                                                                 │
//! │  both > 0? ──no──► skip (business rule, not an error)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total += price × quantity                                              │
//! │       │                                                                 │
//! │       ▼  after the loop                                                 │
//! │  total finite? ──no──► 0.0                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The aggregator skips bad items one at a time. For an all-or-nothing
//! decision use [`crate::validation::is_valid_order`] instead.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::types::LineItem;

/// Result of summing an order, with the indices that did not contribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalBreakdown {
    /// Finite sum of every counted line.
    pub total: f64,

    /// Number of items that passed the inclusion rule.
    pub counted: usize,

    /// Indices of null elements and excluded items, ascending.
    pub skipped: Vec<usize>,
}

/// Calculates the order total.
///
/// ## Example
/// ```rust
/// use tally_core::{calculate_total, LineItem};
///
/// let items = vec![
///     Some(LineItem::new(10.50, 2_i64)),
///     None,
///     Some(LineItem::new("$5.25", "3")),
///     Some(LineItem::new(0_i64, 9_i64)),
/// ];
/// assert_eq!(calculate_total(Some(items.as_slice())), 36.75);
/// assert_eq!(calculate_total(None), 0.0);
/// ```
pub fn calculate_total(items: Option<&[Option<LineItem>]>) -> f64 {
    calculate_breakdown(items).total
}

/// Calculates the order total and reports which items were skipped.
pub fn calculate_breakdown(items: Option<&[Option<LineItem>]>) -> TotalBreakdown {
    let items = match items {
        Some(items) if !items.is_empty() => items,
        _ => return TotalBreakdown::default(),
    };

    let mut breakdown = TotalBreakdown::default();
    for (index, item) in items.iter().enumerate() {
        match item.as_ref().and_then(LineItem::line_amount) {
            Some(amount) => {
                breakdown.total += amount;
                breakdown.counted += 1;
            }
            None => breakdown.skipped.push(index),
        }
    }

    if !breakdown.total.is_finite() {
        debug!(
            counted = breakdown.counted,
            "Order total overflowed, collapsing to zero"
        );
        breakdown.total = 0.0;
    }

    breakdown
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;
    use std::collections::BTreeMap;

    fn item(price: impl Into<FieldValue>, quantity: impl Into<FieldValue>) -> Option<LineItem> {
        Some(LineItem::new(price, quantity))
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(calculate_total(None), 0.0);
        assert_eq!(calculate_total(Some(&[])), 0.0);
        assert_eq!(calculate_breakdown(None), TotalBreakdown::default());
    }

    #[test]
    fn test_valid_items() {
        let items = [item(10.50, 2_i64), item(5.25, 3_i64)];
        assert_eq!(calculate_total(Some(&items)), 36.75);
    }

    #[test]
    fn test_null_element_is_skipped() {
        let items = [None, item(10.50, 2_i64)];
        assert_eq!(calculate_total(Some(&items)), 21.0);

        let items = [item(10.50, 2_i64), None, item(5.25, 3_i64)];
        assert_eq!(calculate_total(Some(&items)), 36.75);
    }

    #[test]
    fn test_non_positive_values_are_excluded() {
        let expected = 5.25 * 3.0;
        for bad in [
            item(0_i64, 2_i64),
            item(10.50, 0_i64),
            item(-10.50, 2_i64),
            item(10.50, -2_i64),
            item(FieldValue::Null, 2_i64),
            item(10.50, FieldValue::Null),
            Some(LineItem::default()),
        ] {
            let items = [bad, item(5.25, 3_i64)];
            assert_eq!(calculate_total(Some(&items)), expected);
        }
    }

    #[test]
    fn test_string_values() {
        let items = [item("10.50", "2"), item("5.25", "3")];
        assert_eq!(calculate_total(Some(&items)), 36.75);

        let items = [item("invalid", "also_invalid"), item(5.25, 3_i64)];
        assert_eq!(calculate_total(Some(&items)), 15.75);
    }

    #[test]
    fn test_adversarial_mix() {
        let items = [
            None,
            item(f64::INFINITY, 2_i64),
            item(f64::NAN, 3_i64),
            item(f64::NEG_INFINITY, 1_i64),
            item("invalid_string", "bad_string"),
            Some(LineItem::default()),
            item(FieldValue::List(vec![]), FieldValue::Map(BTreeMap::new())),
            item(true, false),
            item(10.50, 2_i64),
        ];
        let breakdown = calculate_breakdown(Some(&items));
        assert_eq!(breakdown.total, 21.0);
        assert_eq!(breakdown.counted, 1);
        assert_eq!(breakdown.skipped, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_overflow_collapses_to_zero() {
        let items = [item(f64::MAX, 2_i64), item(1.0, 1_i64)];
        assert_eq!(calculate_total(Some(&items)), 0.0);

        let items = [item(f64::MAX, 1_i64), item(f64::MAX, 1_i64)];
        let breakdown = calculate_breakdown(Some(&items));
        assert_eq!(breakdown.total, 0.0);
        assert_eq!(breakdown.counted, 2);
        assert!(breakdown.skipped.is_empty());
    }
}
