// ============================================================================
// Exact Money Library
// Money arithmetic over integer minor units and exact decimals
// ============================================================================

//! # Exact Money
//!
//! Monetary amounts and tax derivation without floating-point error.
//!
//! ## Features
//!
//! - **Two representations**: [`MoneyAmountFixed`](domain::MoneyAmountFixed)
//!   counts whole minor units in an `i64`,
//!   [`MoneyAmountDecimal`](domain::MoneyAmountDecimal) holds an exact decimal
//! - **Checked arithmetic**: integer overflow is reported where it happens,
//!   never wrapped
//! - **Currency guard**: binary operations refuse mixed currencies
//! - **Tax helpers**: gross, net, tax rate and tax amount from percentage rates
//! - **Configurable division precision** via
//!   [`CalculatorConfig`](domain::CalculatorConfig)
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let fixed = FixedPointCalculator::new();
//! let decimal = DecimalCalculator::new();
//!
//! // 19.99 EUR + 5.01 EUR, in cents
//! let total = fixed
//!     .add(&MoneyAmountFixed::new(1999, "EUR"), &MoneyAmountFixed::new(501, "EUR"))
//!     .unwrap();
//! assert_eq!(total.amount(), 2500);
//!
//! // Add 20% tax, then derive the rate back
//! let gross = fixed.calculate_gross(&total, "20").unwrap();
//! assert_eq!(gross.amount(), Decimal::from(3000));
//!
//! let rate = decimal
//!     .calculate_tax_rate(&fixed.to_fractional_price(&total), &gross)
//!     .unwrap();
//! assert_eq!(rate, Decimal::from(20));
//!
//! // Mixed currencies are rejected before any arithmetic runs
//! let err = fixed
//!     .add(&MoneyAmountFixed::new(1, "EUR"), &MoneyAmountFixed::new(1, "USD"))
//!     .unwrap_err();
//! assert!(matches!(err, MoneyError::CurrencyMismatch { .. }));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, Currency, MoneyAmountDecimal, MoneyAmountFixed};
    pub use crate::engine::{ensure_same_currency, DecimalCalculator, FixedPointCalculator};
    pub use crate::interfaces::HasCurrency;
    pub use crate::numeric::{MoneyError, MoneyResult};
    pub use rust_decimal::Decimal;
}
