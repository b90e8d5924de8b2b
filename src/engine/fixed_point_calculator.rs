// ============================================================================
// Fixed-Point Calculator
// Arithmetic over integer minor units
// ============================================================================

use crate::domain::{CalculatorConfig, MoneyAmountDecimal, MoneyAmountFixed};
use crate::engine::currency_guard::ensure_same_currency;
use crate::numeric::{checked, decimal, MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Calculator for [`MoneyAmountFixed`].
///
/// Sums, differences and whole-number products stay in minor units and fail
/// with `IntegerOverflow` rather than wrap. Anything that can produce a
/// fraction of a minor unit (decimal factors, tax percentages) returns a
/// [`MoneyAmountDecimal`] and leaves the final rounding to the caller.
#[derive(Debug, Clone, Default)]
pub struct FixedPointCalculator {
    config: CalculatorConfig,
}

impl FixedPointCalculator {
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

    /// Lossless upcast into the decimal representation.
    pub fn to_fractional_price(&self, price: &MoneyAmountFixed) -> MoneyAmountDecimal {
        price.to_decimal()
    }

    /// Add two amounts of the same currency.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `IntegerOverflow` if the sum leaves the i64 range
    pub fn add(&self, a: &MoneyAmountFixed, b: &MoneyAmountFixed) -> MoneyResult<MoneyAmountFixed> {
        ensure_same_currency([a, b])?;

        let amount = checked::add_minor_units(a.amount(), b.amount())?;

        tracing::trace!(currency = %a.currency(), amount, "fixed add");
        Ok(MoneyAmountFixed::new(amount, a.currency().clone()))
    }

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `IntegerOverflow` if the difference leaves the i64 range
    pub fn subtract(
        &self,
        a: &MoneyAmountFixed,
        b: &MoneyAmountFixed,
    ) -> MoneyResult<MoneyAmountFixed> {
        ensure_same_currency([a, b])?;

        let amount = checked::sub_minor_units(a.amount(), b.amount())?;

        tracing::trace!(currency = %a.currency(), amount, "fixed subtract");
        Ok(MoneyAmountFixed::new(amount, a.currency().clone()))
    }

    /// Multiply by a whole number, e.g. a line quantity.
    ///
    /// # Errors
    /// Returns `IntegerOverflow` if the product leaves the i64 range.
    pub fn multiply_with_integer(
        &self,
        price: &MoneyAmountFixed,
        factor: i64,
    ) -> MoneyResult<MoneyAmountFixed> {
        let amount = checked::mul_minor_units(price.amount(), factor)?;

        tracing::trace!(currency = %price.currency(), amount, factor, "fixed multiply");
        Ok(MoneyAmountFixed::new(amount, price.currency().clone()))
    }

    /// Multiply by a decimal literal such as `"4.55"`.
    ///
    /// # Errors
    /// Returns `InvalidDecimal` if `factor` does not parse.
    pub fn multiply_with_decimal(
        &self,
        price: &MoneyAmountFixed,
        factor: &str,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let factor = decimal::parse_decimal(factor)?;
        let amount = decimal::checked_mul(factor, Decimal::from(price.amount()))?;

        tracing::trace!(currency = %price.currency(), %amount, %factor, "fixed multiply by decimal");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }

    /// Gross amount for a net `price` and a percentage `rate` (`"20"` = 20%).
    ///
    /// The division happens in decimal space so no fraction of a minor unit
    /// is lost before the multiplication.
    pub fn calculate_gross(
        &self,
        price: &MoneyAmountFixed,
        rate: &str,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let amount = decimal::gross_from_net(Decimal::from(price.amount()), rate, &self.config)?;

        tracing::trace!(currency = %price.currency(), %amount, rate, "fixed gross");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }

    /// Net amount for a gross `price` and a percentage `rate`.
    ///
    /// # Errors
    /// - `InvalidDecimal` if `rate` does not parse
    /// - `DivisionByZero` if `rate` is `-100`
    pub fn calculate_net(
        &self,
        price: &MoneyAmountFixed,
        rate: &str,
    ) -> MoneyResult<MoneyAmountDecimal> {
        let amount = decimal::net_from_gross(Decimal::from(price.amount()), rate, &self.config)?;

        tracing::trace!(currency = %price.currency(), %amount, rate, "fixed net");
        Ok(MoneyAmountDecimal::new(amount, price.currency().clone()))
    }
}
