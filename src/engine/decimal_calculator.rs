// ============================================================================
// Decimal Calculator
// Arithmetic and tax derivation over exact decimal amounts
// ============================================================================

use crate::domain::{CalculatorConfig, MoneyAmountDecimal};
use crate::engine::currency_guard::ensure_same_currency;
use crate::numeric::{decimal, MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Calculator for [`MoneyAmountDecimal`].
///
/// Has no overflow concept of its own; the only failures are the currency
/// guard and whatever the decimal primitive reports (bad literals, zero
/// divisors, results beyond its range).
#[derive(Debug, Clone, Default)]
pub struct DecimalCalculator {
    config: CalculatorConfig,
}

impl DecimalCalculator {
    /// Create a calculator with the exact division policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom division policy
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: CalculatorConfig) -> MoneyResult<Self> {
        config.validate().map_err(MoneyError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Add two amounts of the same currency.
    pub fn add(
        &self,
        a: &MoneyAmountDecimal,
        b: &MoneyAmountDecimal,
    ) -> MoneyResult<MoneyAmountDecimal> {
        ensure_same_currency([a, b])?;

        let amount = decimal::checked_add(a.amount(), b.amount())?;

        tracing::trace!(currency = %a.currency(), %amount, "decimal add");
        Ok(MoneyAmountDecimal::new(amount, a.currency().clone()))
    }

    /// Subtract `b` from `a`.
    pub fn subtract(
        &self,
        a: &MoneyAmountDecimal,
        b: &MoneyAmountDecimal,
    ) -> MoneyResult<MoneyAmountDecimal> {
        ensure_same_currency([a, b])?;

        let amount = decimal::checked_sub(a.amount(), b.amount())?;

        tracing::trace!(currency = %a.currency(), %amount, "decimal subtract");
        Ok(MoneyAmountDecimal::new(amount, a.currency().clone()))
    }

    /// Multiply by an exact decimal factor. No digits are truncated.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the exact product needs more than 28 fractional digits
    /// - `DecimalOverflow` if the product is out of range
    pub fn multiply(
        &self,
        price: &MoneyAmountDecimal,
        factor: Decimal,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let amount = decimal::checked_mul(price.amount(), factor)?;

        tracing::trace!(currency = %price.currency(), %amount, %factor, "decimal multiply");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }

    /// Gross amount for a net `price` and a percentage `rate`.
    pub fn calculate_gross(
        &self,
        price: &MoneyAmountDecimal,
        rate: &str,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let amount = decimal::gross_from_net(price.amount(), rate, &self.config)?;

        tracing::trace!(currency = %price.currency(), %amount, rate, "decimal gross");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }

    /// Net amount for a gross `price` and a percentage `rate`.
    pub fn calculate_net(
        &self,
        price: &MoneyAmountDecimal,
        rate: &str,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let amount = decimal::net_from_gross(price.amount(), rate, &self.config)?;

        tracing::trace!(currency = %price.currency(), %amount, rate, "decimal net");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }

    /// Percentage rate that turns `net` into `gross`: `gross / (net / 100) - 100`.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `DivisionByZero` if `net` is zero
    pub fn calculate_tax_rate(
        &self,
        net: &MoneyAmountDecimal,
        gross: &MoneyAmountDecimal,
    ) -> MoneyResult<Decimal> {
        ensure_same_currency([net, gross])?;

        let net_hundredth = decimal::checked_div(net.amount(), decimal::HUNDRED, &self.config)?;
        let ratio = decimal::checked_div(gross.amount(), net_hundredth, &self.config)?;
        let rate = decimal::checked_sub(ratio, decimal::HUNDRED)?;

        tracing::trace!(currency = %net.currency(), %rate, "decimal tax rate");
        Ok(rate)
    }

    /// Tax contained between `net` and `gross`.
    ///
    /// Returned as a bare decimal; attach a currency if one is needed.
    pub fn calculate_tax(
        &self,
        net: &MoneyAmountDecimal,
        gross: &MoneyAmountDecimal,
    ) -> MoneyResult<Decimal> {
        ensure_same_currency([net, gross])?;

        let tax = decimal::checked_sub(gross.amount(), net.amount())?;

        tracing::trace!(currency = %net.currency(), %tax, "decimal tax");
        Ok(tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn eur(amount: &str) -> MoneyAmountDecimal {
        MoneyAmountDecimal::new(dec(amount), "EUR")
    }

    fn usd(amount: &str) -> MoneyAmountDecimal {
        MoneyAmountDecimal::new(dec(amount), "USD")
    }

    const MISMATCH: &str =
        "For calculations all amounts must be of the same currency but different currencies were found: EUR, USD.";

    #[test]
    fn test_add() {
        let calc = DecimalCalculator::new();
        let cases = [("1", "2", "3"), ("-1", "2", "1"), ("1", "-2", "-1"), ("-1", "-2", "-3")];

        for (a, b, expected) in cases {
            let sum = calc.add(&eur(a), &eur(b)).unwrap();
            assert_eq!(sum.amount(), dec(expected));
            assert_eq!(sum.currency(), "EUR");
        }
    }

    #[test]
    fn test_add_rejects_mixed_currencies() {
        let calc = DecimalCalculator::new();
        let err = calc.add(&eur("1"), &usd("2")).unwrap_err();
        assert_eq!(err.to_string(), MISMATCH);
    }

    #[test]
    fn test_subtract() {
        let calc = DecimalCalculator::new();
        let cases = [
            ("1", "2", "-1"),
            ("-1", "2", "-3"),
            ("1", "-2", "3"),
            ("-1", "-2", "1"),
            ("234234.23234", "2342.214", "231892.01834"),
        ];

        for (a, b, expected) in cases {
            assert_eq!(calc.subtract(&eur(a), &eur(b)).unwrap().amount(), dec(expected));
        }
    }

    #[test]
    fn test_subtract_rejects_mixed_currencies() {
        let calc = DecimalCalculator::new();
        let err = calc.subtract(&eur("1"), &usd("2")).unwrap_err();
        assert_eq!(err.to_string(), MISMATCH);
    }

    #[test]
    fn test_add_beyond_decimal_range() {
        let calc = DecimalCalculator::new();
        let max = MoneyAmountDecimal::new(Decimal::MAX, "EUR");
        assert_eq!(calc.add(&max, &eur("1")), Err(MoneyError::DecimalOverflow));
    }

    #[test]
    fn test_multiply() {
        let calc = DecimalCalculator::new();
        let cases = [("1", "3", "3"), ("3", "-4", "-12"), ("335.3454", "123.65", "41465.458710")];

        for (amount, factor, expected) in cases {
            let product = calc.multiply(&eur(amount), dec(factor)).unwrap();
            assert_eq!(product.amount(), dec(expected));
            assert_eq!(product.currency(), "EUR");
        }
    }

    #[test]
    fn test_multiply_never_rounds_silently() {
        let calc = DecimalCalculator::new();
        let tiny = eur("0.0000000000000001");
        assert_eq!(
            calc.multiply(&tiny, dec("0.0000000000000003")),
            Err(MoneyError::PrecisionLoss)
        );
        assert_eq!(tiny, eur("0.0000000000000001"));
    }

    #[test]
    fn test_calculate_gross() {
        let calc = DecimalCalculator::new();
        let gross = calc.calculate_gross(&eur("10"), "20").unwrap();
        assert_eq!(gross.amount(), dec("12"));
        assert_eq!(gross.currency(), "EUR");
    }

    #[test]
    fn test_calculate_net() {
        let calc = DecimalCalculator::new();
        let net = calc.calculate_net(&eur("12"), "20").unwrap();
        assert_eq!(net.amount(), dec("10"));
        assert_eq!(net.currency(), "EUR");
    }

    #[test]
    fn test_calculate_gross_and_net_invalid_rate() {
        let calc = DecimalCalculator::new();
        assert!(matches!(
            calc.calculate_gross(&eur("10"), "twenty"),
            Err(MoneyError::InvalidDecimal(_))
        ));
        assert!(matches!(
            calc.calculate_net(&eur("12"), "twenty"),
            Err(MoneyError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn test_calculate_net_minus_hundred_rate() {
        let calc = DecimalCalculator::new();
        assert_eq!(
            calc.calculate_net(&eur("12"), "-100"),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_gross_net_round_trip() {
        let calc = DecimalCalculator::new();
        let gross = calc.calculate_gross(&eur("10"), "20").unwrap();
        let net = calc.calculate_net(&gross, "20").unwrap();
        assert_eq!(net.amount(), dec("10"));
    }

    #[test]
    fn test_calculate_tax_rate() {
        let calc = DecimalCalculator::new();
        assert_eq!(calc.calculate_tax_rate(&eur("10"), &eur("12")).unwrap(), dec("20"));
        assert_eq!(calc.calculate_tax_rate(&eur("100"), &eur("107")).unwrap(), dec("7"));
    }

    #[test]
    fn test_calculate_tax_rate_rejects_mixed_currencies() {
        let calc = DecimalCalculator::new();
        let err = calc.calculate_tax_rate(&eur("10"), &usd("12")).unwrap_err();
        assert_eq!(err.to_string(), MISMATCH);
    }

    #[test]
    fn test_calculate_tax_rate_zero_net() {
        let calc = DecimalCalculator::new();
        assert_eq!(
            calc.calculate_tax_rate(&eur("0"), &eur("12")),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_calculate_tax() {
        let calc = DecimalCalculator::new();
        assert_eq!(calc.calculate_tax(&eur("10"), &eur("12")).unwrap(), dec("2"));

        let err = calc.calculate_tax(&eur("10"), &usd("12")).unwrap_err();
        assert_eq!(err.to_string(), MISMATCH);
    }

    #[test]
    fn test_rounded_division_policy() {
        let calc = DecimalCalculator::with_config(CalculatorConfig::rounded(2)).unwrap();
        // 10 / 300 -> 0.03, times 100 -> 3.00
        let net = calc.calculate_net(&eur("10"), "200").unwrap();
        assert_eq!(net.amount(), dec("3"));

        let exact = DecimalCalculator::new().calculate_net(&eur("10"), "200").unwrap();
        assert_ne!(exact.amount(), dec("3"));
    }

    #[test]
    fn test_inputs_unchanged() {
        let calc = DecimalCalculator::new();
        let net = eur("10");
        let gross = eur("12");

        calc.add(&net, &gross).unwrap();
        calc.calculate_tax_rate(&net, &gross).unwrap();
        calc.calculate_tax(&net, &gross).unwrap();
        calc.multiply(&net, dec("1.5")).unwrap();

        assert_eq!(net, eur("10"));
        assert_eq!(gross, eur("12"));
    }
}
