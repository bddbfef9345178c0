//! # tally-core: Pure Order Arithmetic for Order Tally
//!
//! This crate turns untrusted line-item lists into a single finite total.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Tally Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Callers (tally-cli, HTTP handlers, workers)           │   │
//! │  │      JSON body ──► checkout ──► JSON response + status          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  coerce   │─►│  totals   │  │ validation│  │  checkout │  │   │
//! │  │   │ any → f64 │  │ sum/skip  │  │ all-or-   │  │  request  │  │   │
//! │  │   │           │  │           │  │  nothing  │  │  boundary │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   money   │  │  payment  │                                 │   │
//! │  │   │ discounts │  │ allow-list│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (FieldValue, LineItem, PaymentMethod)
//! - [`coerce`] - Any value to a finite number
//! - [`totals`] - Order total with per-item exclusion
//! - [`validation`] - All-or-nothing order acceptance
//! - [`money`] - Discount arithmetic
//! - [`payment`] - Payment method allow-list
//! - [`checkout`] - Raw JSON body to response
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Total Functions**: coercion and totals never fail; garbage becomes 0.0
//! 2. **Always Finite**: no NaN or infinity ever leaves this crate
//! 3. **No I/O**: database, network, file system access is FORBIDDEN here
//! 4. **Explicit Variants**: dynamic input is a [`FieldValue`], matched exhaustively
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{calculate_total, is_valid_order, LineItem};
//!
//! let order = vec![
//!     Some(LineItem::new("$1,000.50", 1_i64)),
//!     Some(LineItem::new(0_i64, 3_i64)),
//! ];
//!
//! // Best effort: the zero-price line is skipped.
//! assert_eq!(calculate_total(Some(order.as_slice())), 1000.50);
//!
//! // All-or-nothing: the zero-price line invalidates the order.
//! assert!(!is_valid_order(Some(order.as_slice())));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod coerce;
pub mod error;
pub mod money;
pub mod payment;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::calculate_total` instead of
// `use tally_core::totals::calculate_total`

pub use checkout::{calculate_total_request, validate_order_request, CheckoutLimits, CheckoutResponse};
pub use coerce::{coerce, coerce_str};
pub use error::{CoreError, CoreResult, PaymentError, ValidationError};
pub use money::apply_discount;
pub use payment::{authorize_payment, process_payment, PaymentResult};
pub use totals::{calculate_breakdown, calculate_total, TotalBreakdown};
pub use types::*;
pub use validation::{has_countable_item, is_valid_order};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default cap on line items accepted in a single request.
///
/// ## Business Reason
/// Aggregation is linear in the list length; the boundary refuses
/// oversized lists instead of doing unbounded work.
pub const DEFAULT_MAX_ITEMS: usize = 1000;
