// ============================================================================
// Money Amounts
// Immutable value types for both money representations
// ============================================================================

use crate::domain::Currency;
use crate::interfaces::HasCurrency;
use crate::numeric::{decimal, MoneyResult};
use rust_decimal::Decimal;

// ============================================================================
// Fixed-Point Amount
// ============================================================================

/// Money amount counted in whole minor units of its currency.
///
/// An amount of `1999` with currency `"EUR"` stands for 19.99 EUR; `71` with
/// `"JPY"` stands for 71 JPY. Sub-unit fractions such as 5.001 EUR cannot be
/// represented here, use [`MoneyAmountDecimal`] for those.
///
/// The i64 range bounds what can be held. Calculations that would leave it
/// fail with `IntegerOverflow` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoneyAmountFixed {
    amount: i64,
    currency: Currency,
}

impl MoneyAmountFixed {
    pub fn new(amount: i64, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Amount in minor units.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Lossless widening into the decimal representation.
    pub fn to_decimal(&self) -> MoneyAmountDecimal {
        MoneyAmountDecimal::new(Decimal::from(self.amount), self.currency.clone())
    }
}

impl From<MoneyAmountFixed> for MoneyAmountDecimal {
    fn from(fixed: MoneyAmountFixed) -> Self {
        MoneyAmountDecimal::new(Decimal::from(fixed.amount), fixed.currency)
    }
}

// ============================================================================
// Decimal Amount
// ============================================================================

/// Money amount held as an exact base-10 decimal.
///
/// Used where sub-unit precision is needed, e.g. unit prices, tax
/// intermediates or the output of a percentage calculation. Rounding back
/// to minor units is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoneyAmountDecimal {
    amount: Decimal,
    currency: Currency,
}

impl MoneyAmountDecimal {
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create from a decimal string, parsed without rounding.
    ///
    /// # Errors
    /// Returns `InvalidDecimal` if `amount` is not an exact decimal literal.
    pub fn from_str_amount(amount: &str, currency: impl Into<Currency>) -> MoneyResult<Self> {
        Ok(Self::new(decimal::parse_decimal(amount)?, currency))
    }

    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

// ============================================================================
// Currency Capability
// ============================================================================

impl HasCurrency for MoneyAmountFixed {
    fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl HasCurrency for MoneyAmountDecimal {
    fn currency(&self) -> &Currency {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MoneyError;

    #[test]
    fn test_fixed_accessors() {
        let price = MoneyAmountFixed::new(1999, "EUR");
        assert_eq!(price.amount(), 1999);
        assert_eq!(price.currency(), "EUR");
    }

    #[test]
    fn test_fixed_to_decimal_is_lossless() {
        let price = MoneyAmountFixed::new(i64::MIN, "EUR");
        let widened = price.to_decimal();
        assert_eq!(widened.amount(), Decimal::from(i64::MIN));
        assert_eq!(widened.currency(), "EUR");

        let owned: MoneyAmountDecimal = MoneyAmountFixed::new(45, "JPY").into();
        assert_eq!(owned.amount(), Decimal::from(45));
        assert_eq!(owned.currency(), "JPY");
    }

    #[test]
    fn test_decimal_from_str_amount() {
        let price = MoneyAmountDecimal::from_str_amount("34524.3599999", "EUR").unwrap();
        assert_eq!(price.amount(), Decimal::new(345243599999, 7));

        let err = MoneyAmountDecimal::from_str_amount("twelve", "EUR").unwrap_err();
        assert!(matches!(err, MoneyError::InvalidDecimal(_)));
    }

    #[test]
    fn test_decimal_equality_is_numeric() {
        let a = MoneyAmountDecimal::from_str_amount("12.0", "EUR").unwrap();
        let b = MoneyAmountDecimal::from_str_amount("12", "EUR").unwrap();
        assert_eq!(a, b);
    }
}
