// ============================================================================
// Decimal Primitive
// Exact parsing and checked arithmetic over rust_decimal::Decimal
// ============================================================================
//
// rust_decimal stores a 96-bit mantissa with up to 28 fractional digits.
// Every operation here is checked so that leaving that range surfaces as an
// error instead of a panic.

use super::errors::{MoneyError, MoneyResult};
use crate::domain::config::CalculatorConfig;
use rust_decimal::Decimal;

/// One hundred, the base of every percentage formula.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Parse a decimal string without rounding.
///
/// Binary float notation is never involved: `"0.1"` is exactly one tenth.
///
/// # Errors
/// Returns `InvalidDecimal` for non-numeric input or input that cannot be
/// held without losing digits.
///
/// # Examples
/// - "20" -> 20
/// - "4.55865" -> 4.55865
/// - "-0.001" -> -0.001
pub fn parse_decimal(s: &str) -> MoneyResult<Decimal> {
    Ok(Decimal::from_str_exact(s)?)
}

#[inline]
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
    lhs.checked_add(rhs).ok_or(MoneyError::DecimalOverflow)
}

#[inline]
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(MoneyError::DecimalOverflow)
}

/// Exact product of two decimals.
///
/// rust_decimal rescales a product whose scale would pass 28 digits or whose
/// mantissa would pass 96 bits, rounding away the dropped digits. That is
/// accepted only when every dropped digit is zero.
///
/// # Errors
/// - `DecimalOverflow` if the product is out of range
/// - `PrecisionLoss` if a nonzero digit was rounded away
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
    let product = lhs.checked_mul(rhs).ok_or(MoneyError::DecimalOverflow)?;

    let dropped = (lhs.scale() + rhs.scale()).saturating_sub(product.scale());
    if dropped > 0
        && !ends_in_zeros(lhs.mantissa().unsigned_abs(), rhs.mantissa().unsigned_abs(), dropped)
    {
        return Err(MoneyError::PrecisionLoss);
    }

    Ok(product)
}

/// Whether `a * b` is divisible by `10^digits`, without forming the product.
fn ends_in_zeros(a: u128, b: u128, digits: u32) -> bool {
    if a == 0 || b == 0 {
        return true;
    }
    let twos = a.trailing_zeros() + b.trailing_zeros();
    let fives = factors_of_five(a) + factors_of_five(b);
    twos >= digits && fives >= digits
}

fn factors_of_five(mut n: u128) -> u32 {
    let mut count = 0;
    while n % 5 == 0 {
        n /= 5;
        count += 1;
    }
    count
}

/// Divide under the configured precision policy.
///
/// With no division scale configured the library result is kept as is
/// (rounded by rust_decimal only where the quotient does not fit in 28
/// digits). With a scale, the quotient is rounded to that many fractional
/// digits using the configured strategy.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `DecimalOverflow` if the quotient is out of range
pub fn checked_div(
    numerator: Decimal,
    divisor: Decimal,
    config: &CalculatorConfig,
) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }

    let quotient = numerator
        .checked_div(divisor)
        .ok_or(MoneyError::DecimalOverflow)?;

    Ok(match config.division_scale {
        Some(scale) => quotient.round_dp_with_strategy(scale, config.rounding),
        None => quotient,
    })
}

/// `100 + rate`, the multiplier/divisor shared by the gross and net formulas.
pub fn rate_plus_hundred(rate: &str) -> MoneyResult<Decimal> {
    checked_add(parse_decimal(rate)?, HUNDRED)
}

/// gross = amount / 100 × (100 + rate)
pub fn gross_from_net(amount: Decimal, rate: &str, config: &CalculatorConfig) -> MoneyResult<Decimal> {
    let rate_plus_hundred = rate_plus_hundred(rate)?;
    let hundredth = checked_div(amount, HUNDRED, config)?;
    checked_mul(hundredth, rate_plus_hundred)
}

/// net = amount / (100 + rate) × 100
pub fn net_from_gross(amount: Decimal, rate: &str, config: &CalculatorConfig) -> MoneyResult<Decimal> {
    let rate_plus_hundred = rate_plus_hundred(rate)?;
    let share = checked_div(amount, rate_plus_hundred, config)?;
    checked_mul(share, HUNDRED)
}
