//! # Coercion Module
//!
//! Turns any [`FieldValue`] into a finite `f64`. This is a total function:
//! it never fails, never panics and never returns `NaN` or an infinity.
//!
//! ## Rules (applied in order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Null                        → 0.0                                      │
//! │  Number(n)                   → n if finite, else 0.0                    │
//! │  Text(s)                                                                │
//! │    ├── trim; empty           → 0.0                                      │
//! │    ├── drop $ € £ ¥ ₹ and ,                                             │
//! │    ├── whole text is -?D+(.D+)?   → parse it                            │
//! │    ├── else first -?D+(.D+)? run  → parse that                          │
//! │    ├── no numeric run        → 0.0                                      │
//! │    └── non-finite parse      → 0.0                                      │
//! │  Bool / List / Map           → 0.0                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//! ```rust
//! use tally_core::coerce::coerce_str;
//!
//! assert_eq!(coerce_str("$1,000.50"), 1000.50);
//! assert_eq!(coerce_str("abc123.00"), 123.0);
//! assert_eq!(coerce_str("invalid"), 0.0);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FieldValue;

/// Symbols stripped from text before parsing: currency marks and the
/// thousands separator.
pub const STRIPPED_SYMBOLS: [char; 6] = ['$', '€', '£', '¥', '₹', ','];

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static WHOLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid numeric pattern"));

static EMBEDDED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+(\.[0-9]+)?").expect("valid numeric pattern"));

/// Coerces an arbitrary value to a finite number.
pub fn coerce(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Null => 0.0,
        FieldValue::Number(n) => finite_or_zero(*n),
        FieldValue::Text(text) => coerce_str(text),
        FieldValue::Bool(_) | FieldValue::List(_) | FieldValue::Map(_) => 0.0,
    }
}

/// Coerces raw text using the textual rules only.
pub fn coerce_str(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !STRIPPED_SYMBOLS.contains(c))
        .collect();

    let numeric = if WHOLE_NUMBER.is_match(&cleaned) {
        Some(cleaned.as_str())
    } else {
        EMBEDDED_NUMBER.find(&cleaned).map(|m| m.as_str())
    };

    numeric
        .and_then(|n| n.parse::<f64>().ok())
        .map_or(0.0, finite_or_zero)
}

#[inline]
fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coerce_str_is_always_finite(text in any::<String>()) {
            prop_assert!(coerce_str(&text).is_finite());
        }

        #[test]
        fn coerce_number_is_always_finite(n in any::<f64>()) {
            prop_assert!(coerce(&FieldValue::Number(n)).is_finite());
        }

        #[test]
        fn formatted_amounts_parse_back(cents in 0u64..10_000_000_000u64) {
            let text = format!("${}.{:02}", cents / 100, cents % 100);
            let expected: f64 = format!("{}.{:02}", cents / 100, cents % 100).parse().unwrap();
            prop_assert_eq!(coerce_str(&text), expected);
        }
    }
}
