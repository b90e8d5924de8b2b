// ============================================================================
// Overflow Guard
// Checked minor-unit arithmetic for the fixed-point path
// ============================================================================

use super::errors::{MoneyError, MoneyResult};

/// Checked addition of two minor-unit amounts.
///
/// # Errors
/// Returns `IntegerOverflow` if the sum leaves the i64 range.
#[inline]
pub fn add_minor_units(lhs: i64, rhs: i64) -> MoneyResult<i64> {
    lhs.checked_add(rhs).ok_or(MoneyError::IntegerOverflow)
}

/// Checked subtraction of two minor-unit amounts.
///
/// # Errors
/// Returns `IntegerOverflow` if the difference leaves the i64 range.
#[inline]
pub fn sub_minor_units(lhs: i64, rhs: i64) -> MoneyResult<i64> {
    lhs.checked_sub(rhs).ok_or(MoneyError::IntegerOverflow)
}

/// Multiply a minor-unit amount by a whole number.
///
/// # Errors
/// Returns `IntegerOverflow` if the product leaves the i64 range.
#[inline]
pub fn mul_minor_units(amount: i64, factor: i64) -> MoneyResult<i64> {
    amount.checked_mul(factor).ok_or(MoneyError::IntegerOverflow)
}
