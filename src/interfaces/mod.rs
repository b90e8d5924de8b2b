// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod has_currency;

pub use has_currency::HasCurrency;
