// ============================================================================
// Numeric Module
// Checked arithmetic for both money representations
// ============================================================================
//
// This module provides:
// - MoneyError: the error taxonomy shared by every calculator
// - checked: overflow guard for i64 minor units
// - decimal: exact parsing, checked arithmetic and the division policy
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Overflow is reported by the operation that overflows

pub mod checked;
pub mod decimal;
mod errors;

pub use errors::{MoneyError, MoneyResult};
