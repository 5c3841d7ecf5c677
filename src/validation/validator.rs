//! The [`Validator`]: raw records in, typed input records out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{default_early_retirement_pct, default_late_retirement_pct};
use crate::error::EngineResult;
use crate::models::{
    AnnuityInput, CommutationInput, DbAccrualInput, DcProjectionInput, RetirementAdjustmentInput,
    WithdrawalInput,
};

use super::RawRecord;
use super::fields::{
    optional_decimal, optional_integer, require_decimal, require_integer, to_count,
};

/// Values used for optional fields that a raw record leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Default `accrual_frequency` for DC projections.
    pub accrual_frequency: u32,
    /// Default `payment_frequency_per_year` for annuity conversions.
    pub payment_frequency_per_year: u32,
    /// Default `pct_per_year` for early retirement.
    pub early_retirement_pct: Decimal,
    /// Default `pct_per_year` for late retirement.
    pub late_retirement_pct: Decimal,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            accrual_frequency: 1,
            payment_frequency_per_year: 12,
            early_retirement_pct: default_early_retirement_pct(),
            late_retirement_pct: default_late_retirement_pct(),
        }
    }
}

/// Builds typed input records from raw records.
///
/// Each method reads the fields it needs, applies defaults for absent
/// optional fields, and checks the record's constraints. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    defaults: InputDefaults,
}

impl Validator {
    /// Creates a validator that fills absent optional fields from `defaults`.
    pub fn new(defaults: InputDefaults) -> Self {
        Self { defaults }
    }

    /// Returns the defaults this validator applies.
    pub fn defaults(&self) -> &InputDefaults {
        &self.defaults
    }

    /// Builds a [`DcProjectionInput`].
    ///
    /// Required: `current_balance`, `annual_salary`, `contribution_rate`,
    /// `salary_growth`, `rate_of_return`, `years`. Optional:
    /// `accrual_frequency`.
    pub fn dc_projection(&self, raw: &RawRecord) -> EngineResult<DcProjectionInput> {
        let accrual_frequency = match optional_integer(raw, "accrual_frequency")? {
            Some(value) => to_count("accrual_frequency", value, 1)?,
            None => self.defaults.accrual_frequency,
        };

        let input = DcProjectionInput {
            current_balance: require_decimal(raw, "current_balance")?,
            annual_salary: require_decimal(raw, "annual_salary")?,
            contribution_rate: require_decimal(raw, "contribution_rate")?,
            salary_growth: require_decimal(raw, "salary_growth")?,
            rate_of_return: require_decimal(raw, "rate_of_return")?,
            years: to_count("years", require_integer(raw, "years")?, 0)?,
            accrual_frequency,
        };
        input.validate()?;
        Ok(input)
    }

    /// Builds a [`DbAccrualInput`].
    ///
    /// Required: `final_salary`, `years_of_service`, `accrual_rate`.
    pub fn db_accrual(&self, raw: &RawRecord) -> EngineResult<DbAccrualInput> {
        Ok(DbAccrualInput {
            final_salary: require_decimal(raw, "final_salary")?,
            years_of_service: to_count(
                "years_of_service",
                require_integer(raw, "years_of_service")?,
                0,
            )?,
            accrual_rate: require_decimal(raw, "accrual_rate")?,
        })
    }

    /// Builds an [`AnnuityInput`].
    ///
    /// Required: `lump_sum`, `rate_of_return`, `payment_periods`. Optional:
    /// `payment_frequency_per_year`.
    pub fn annuity(&self, raw: &RawRecord) -> EngineResult<AnnuityInput> {
        let payment_frequency_per_year = match optional_integer(raw, "payment_frequency_per_year")? {
            Some(value) => to_count("payment_frequency_per_year", value, 1)?,
            None => self.defaults.payment_frequency_per_year,
        };

        let input = AnnuityInput {
            lump_sum: require_decimal(raw, "lump_sum")?,
            rate_of_return: require_decimal(raw, "rate_of_return")?,
            payment_periods: to_count(
                "payment_periods",
                require_integer(raw, "payment_periods")?,
                1,
            )?,
            payment_frequency_per_year,
        };
        input.validate()?;
        Ok(input)
    }

    /// Builds a [`CommutationInput`].
    ///
    /// Required: `annuity_payment`, `commutation_pct`.
    pub fn commutation(&self, raw: &RawRecord) -> EngineResult<CommutationInput> {
        Ok(CommutationInput {
            annuity_payment: require_decimal(raw, "annuity_payment")?,
            commutation_pct: require_decimal(raw, "commutation_pct")?,
        })
    }

    /// Builds a [`WithdrawalInput`].
    ///
    /// Required: `balance`, `withdrawal_amt`.
    pub fn withdrawal(&self, raw: &RawRecord) -> EngineResult<WithdrawalInput> {
        Ok(WithdrawalInput {
            balance: require_decimal(raw, "balance")?,
            withdrawal_amt: require_decimal(raw, "withdrawal_amt")?,
        })
    }

    /// Builds a [`RetirementAdjustmentInput`] for an early retirement.
    ///
    /// Required: `annual_pension`, `years_early`. Optional: `pct_per_year`.
    /// Negative `years_early` is accepted.
    pub fn early_retirement(&self, raw: &RawRecord) -> EngineResult<RetirementAdjustmentInput> {
        self.retirement_adjustment(raw, "years_early", self.defaults.early_retirement_pct)
    }

    /// Builds a [`RetirementAdjustmentInput`] for a late retirement.
    ///
    /// Required: `annual_pension`, `years_late`. Optional: `pct_per_year`.
    /// Negative `years_late` is accepted.
    pub fn late_retirement(&self, raw: &RawRecord) -> EngineResult<RetirementAdjustmentInput> {
        self.retirement_adjustment(raw, "years_late", self.defaults.late_retirement_pct)
    }

    fn retirement_adjustment(
        &self,
        raw: &RawRecord,
        years_field: &str,
        default_pct: Decimal,
    ) -> EngineResult<RetirementAdjustmentInput> {
        Ok(RetirementAdjustmentInput {
            annual_pension: require_decimal(raw, "annual_pension")?,
            years: require_integer(raw, years_field)?,
            pct_per_year: optional_decimal(raw, "pct_per_year")?.unwrap_or(default_pct),
        })
    }
}
