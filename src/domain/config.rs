// ============================================================================
// Calculator Configuration
// Precision policy for decimal division
// ============================================================================

use rust_decimal::RoundingStrategy;

/// Largest number of fractional digits the decimal primitive can hold.
pub const MAX_DIVISION_SCALE: u32 = 28;

/// Configuration shared by both calculators.
///
/// Addition, subtraction and multiplication are always exact. Division is
/// the only operation whose quotient may not terminate, so it is the only
/// one governed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Fractional digits kept after each division.
    /// None keeps the full 28-digit result of the decimal library.
    pub division_scale: Option<u32>,

    /// Rounding applied when `division_scale` is set
    pub rounding: RoundingStrategy,
}

impl CalculatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(division_scale: Option<u32>, rounding: RoundingStrategy) -> Self {
        Self {
            division_scale,
            rounding,
        }
    }

    /// Builder method: Round division results to `scale` fractional digits
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = Some(scale);
        self
    }

    /// Builder method: Set rounding strategy
    pub fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.division_scale {
            if scale > MAX_DIVISION_SCALE {
                return Err(format!(
                    "Division scale {} exceeds the maximum of {}",
                    scale, MAX_DIVISION_SCALE
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Library precision, no extra rounding
    pub fn exact() -> Self {
        Self::new(None, RoundingStrategy::MidpointNearestEven)
    }

    /// Division results rounded half-even to `scale` fractional digits
    pub fn rounded(scale: u32) -> Self {
        Self::exact().with_division_scale(scale)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::exact()
    }
}
