// ============================================================================
// Engine Module
// Contains the calculators and the guards they share
// ============================================================================

mod decimal_calculator;
mod fixed_point_calculator;

pub mod currency_guard;

pub use currency_guard::ensure_same_currency;
pub use decimal_calculator::DecimalCalculator;
pub use fixed_point_calculator::FixedPointCalculator;
