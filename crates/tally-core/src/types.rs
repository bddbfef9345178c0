//! # Domain Types
//!
//! Core domain types used throughout Order Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   FieldValue    │   │    LineItem     │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Null           │   │  price    ──────┼─► │  CreditCard     │       │
//! │  │  Bool           │   │  quantity ──────┼─► │  DebitCard      │       │
//! │  │  Number (f64)   │   │  (FieldValue)   │   │  Paypal         │       │
//! │  │  Text           │   └─────────────────┘   │  BankTransfer   │       │
//! │  │  List / Map     │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Order = [Option<LineItem>]   (None = null placeholder in the list)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why an explicit variant type?
//! Order bodies arrive from clients we do not control. Prices show up as
//! numbers, as `"$1,000.50"`, as `null`, or as nested objects. Every shape is
//! a variant here, so each one gets an explicit branch in [`crate::coerce`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::coerce::coerce;
use crate::error::PaymentError;

// =============================================================================
// Field Value
// =============================================================================

/// A loosely-typed value as it appeared in an order body.
///
/// JSON integers and floats both land in [`FieldValue::Number`]. Values built
/// in-process may also carry `NaN` or infinities, which JSON cannot express.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Checks if the value is null/absent.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => FieldValue::Text(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(FieldValue::from)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One price/quantity record within an order.
///
/// Missing keys deserialize to [`FieldValue::Null`]; any other keys on the
/// record are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Semantically a monetary amount.
    pub price: FieldValue,

    /// Semantically a count.
    pub quantity: FieldValue,
}

impl LineItem {
    /// Creates a line item from anything convertible to a [`FieldValue`].
    pub fn new(price: impl Into<FieldValue>, quantity: impl Into<FieldValue>) -> Self {
        LineItem {
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Builds a line item from a JSON object, reading only `price` and `quantity`.
    pub fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let field = |key: &str| object.get(key).cloned().map(FieldValue::from).unwrap_or_default();
        LineItem {
            price: field("price"),
            quantity: field("quantity"),
        }
    }

    /// Coerced `(price, quantity)`. Both are always finite.
    #[inline]
    pub fn coerced(&self) -> (f64, f64) {
        (coerce(&self.price), coerce(&self.quantity))
    }

    /// The amount this item adds to an order total.
    ///
    /// ## Inclusion Rule
    /// Only items whose coerced price AND coerced quantity are strictly
    /// positive count. Zero, negative and unparseable values return `None`.
    pub fn line_amount(&self) -> Option<f64> {
        let (price, quantity) = self.coerced();
        (price > 0.0 && quantity > 0.0).then(|| price * quantity)
    }

    /// Checks whether the item passes the inclusion rule.
    #[inline]
    pub fn is_countable(&self) -> bool {
        self.line_amount().is_some()
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment methods accepted by [`crate::payment::authorize_payment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
}

impl PaymentMethod {
    /// Every supported method, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Paypal,
        PaymentMethod::BankTransfer,
    ];

    /// Wire name (`credit_card`, `paypal`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    /// Exact match on the wire name. No trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| PaymentError::UnsupportedMethod {
                method: s.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_from_json() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!(2)), FieldValue::Number(2.0));
        assert_eq!(FieldValue::from(json!(10.5)), FieldValue::Number(10.5));
        assert_eq!(FieldValue::from(json!("$5")), FieldValue::Text("$5".into()));
        assert_eq!(FieldValue::from(json!(true)), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(json!([])), FieldValue::List(vec![]));
        assert!(matches!(
            FieldValue::from(json!({"nested": "10.50"})),
            FieldValue::Map(m) if m.len() == 1
        ));
    }

    #[test]
    fn test_line_item_missing_keys_are_null() {
        let item: LineItem = serde_json::from_value(json!({"quantity": 2, "sku": "X"})).unwrap();
        assert!(item.price.is_null());
        assert_eq!(item.quantity, FieldValue::Number(2.0));

        let object = json!({"price": "3.50"});
        let item = LineItem::from_object(object.as_object().unwrap());
        assert_eq!(item.price, FieldValue::Text("3.50".into()));
        assert!(item.quantity.is_null());
    }

    #[test]
    fn test_line_amount_inclusion_rule() {
        assert_eq!(LineItem::new(10.5, 2_i64).line_amount(), Some(21.0));
        assert_eq!(LineItem::new("$5.25", "3").line_amount(), Some(15.75));
        assert_eq!(LineItem::new(0_i64, 2_i64).line_amount(), None);
        assert_eq!(LineItem::new(-1.0, 2_i64).line_amount(), None);
        assert_eq!(LineItem::new(10.0, FieldValue::Null).line_amount(), None);
        assert_eq!(LineItem::new(f64::INFINITY, 2_i64).line_amount(), None);
    }

    #[test]
    fn test_serialize_round_trips_shape() {
        let item = LineItem::new("10.50", FieldValue::Null);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"price": "10.50", "quantity": null})
        );
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("paypal".parse::<PaymentMethod>().unwrap(), PaymentMethod::Paypal);
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
        assert!("Credit_Card".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::DebitCard.to_string(), "debit_card");
    }
}
