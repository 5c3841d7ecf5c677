//! Annuity conversion records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parameters for converting a lump sum into level periodic payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityInput {
    /// The amount to convert.
    pub lump_sum: Decimal,
    /// Annual interest rate as a decimal fraction.
    pub rate_of_return: Decimal,
    /// Number of payments.
    pub payment_periods: u32,
    /// Payments per year.
    #[serde(default = "default_payment_frequency")]
    pub payment_frequency_per_year: u32,
}

fn default_payment_frequency() -> u32 {
    12
}

impl AnnuityInput {
    /// Checks the field-level constraints of the record.
    pub fn validate(&self) -> EngineResult<()> {
        if self.payment_periods < 1 {
            return Err(EngineError::validation(
                "payment_periods",
                "must be at least 1",
            ));
        }
        if self.payment_frequency_per_year < 1 {
            return Err(EngineError::validation(
                "payment_frequency_per_year",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// The result of an annuity conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityOutput {
    /// The level payment per period, quantized to the money scale.
    pub periodic_payment: Decimal,
    /// The factor converting the lump sum into one payment, quantized to the
    /// factor scale (or the exact period count at a zero rate).
    pub annuity_factor: Decimal,
}
