// ============================================================================
// Money Errors
// Failures raised by the guards and the decimal primitive
// ============================================================================

use crate::domain::Currency;
use thiserror::Error;

/// Errors that can occur during money calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoneyError {
    /// Operands of a binary operation carry different currencies.
    ///
    /// `currencies` holds the distinct identifiers in first-seen order.
    #[error(
        "For calculations all amounts must be of the same currency but different currencies were found: {}.",
        join_currencies(.currencies)
    )]
    CurrencyMismatch { currencies: Vec<Currency> },

    /// A fixed-point result left the i64 range
    #[error("Price calculation resulted in an integer overflow.")]
    IntegerOverflow,

    /// A decimal string could not be parsed exactly
    #[error("invalid decimal: {0}")]
    InvalidDecimal(#[from] rust_decimal::Error),

    /// Decimal division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// A decimal result left the range of the decimal primitive
    #[error("decimal overflow: result exceeds the representable range")]
    DecimalOverflow,

    /// A decimal product would need more digits than the primitive holds
    #[error("decimal precision loss: product cannot be represented exactly")]
    PrecisionLoss,

    #[error("invalid calculator configuration: {0}")]
    InvalidConfig(String),
}

fn join_currencies(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(Currency::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
