// ============================================================================
// Currency Capability
// The one contract shared by both money representations
// ============================================================================

use crate::domain::Currency;

/// Anything that carries a currency identifier.
///
/// Both money types implement this so a single currency guard can serve
/// both calculators. It is a capability, not a base type: implementors share
/// no other behavior.
pub trait HasCurrency {
    fn currency(&self) -> &Currency;
}

impl<T: HasCurrency + ?Sized> HasCurrency for &T {
    #[inline]
    fn currency(&self) -> &Currency {
        (**self).currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoneyAmountDecimal, MoneyAmountFixed};
    use rust_decimal::Decimal;

    fn currency_of<T: HasCurrency>(value: T) -> String {
        value.currency().to_string()
    }

    #[test]
    fn test_both_representations_expose_currency() {
        let fixed = MoneyAmountFixed::new(10, "EUR");
        let decimal = MoneyAmountDecimal::new(Decimal::TEN, "USD");

        assert_eq!(currency_of(&fixed), "EUR");
        assert_eq!(currency_of(&decimal), "USD");
        assert_eq!(currency_of(&&fixed), "EUR");
    }
}
