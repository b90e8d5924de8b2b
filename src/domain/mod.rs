// ============================================================================
// Domain Models Module
// Money value types, currency identifiers and calculator configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;

pub use config::CalculatorConfig;
pub use currency::Currency;
pub use money::{MoneyAmountDecimal, MoneyAmountFixed};
