// ============================================================================
// Currency Guard
// Precondition shared by every binary money operation
// ============================================================================

use crate::domain::Currency;
use crate::interfaces::HasCurrency;
use crate::numeric::{MoneyError, MoneyResult};
use smallvec::SmallVec;

/// Check that all `values` carry the same currency.
///
/// Zero or one value always passes. On mismatch the error lists each
/// distinct currency once, in the order it was first seen.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let a = MoneyAmountFixed::new(1, "EUR");
/// let b = MoneyAmountFixed::new(2, "USD");
/// let err = ensure_same_currency([&a, &b]).unwrap_err();
/// assert!(err.to_string().ends_with("EUR, USD."));
/// ```
pub fn ensure_same_currency<I>(values: I) -> MoneyResult<()>
where
    I: IntoIterator,
    I::Item: HasCurrency,
{
    let values: SmallVec<[I::Item; 2]> = values.into_iter().collect();

    // Binary operations make two the common case, kept inline
    let mut distinct: SmallVec<[&Currency; 2]> = SmallVec::new();
    for value in &values {
        let currency = value.currency();
        if !distinct.contains(&currency) {
            distinct.push(currency);
        }
    }

    if distinct.len() > 1 {
        return Err(MoneyError::CurrencyMismatch {
            currencies: distinct.into_iter().cloned().collect(),
        });
    }

    Ok(())
}
