//! Configuration types.
//!
//! These types mirror the structure of the engine's YAML configuration
//! file. Every key is optional; absent keys take the engine defaults.

use serde::{Deserialize, Serialize};

use crate::money::ArithmeticContext;
use crate::validation::InputDefaults;

/// Complete engine configuration.
///
/// # Example
///
/// ```yaml
/// arithmetic:
///   rounding: half_up
///   money_scale: 2
///   factor_scale: 7
/// defaults:
///   accrual_frequency: 1
///   payment_frequency_per_year: 12
///   early_retirement_pct: "0.05"
///   late_retirement_pct: "0.02"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rounding mode and quantization scales.
    pub arithmetic: ArithmeticContext,
    /// Values for optional input fields left out of raw records.
    pub defaults: InputDefaults,
}
