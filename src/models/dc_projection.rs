//! Defined-contribution projection records.
//!
//! This module defines the [`DcProjectionInput`] parameters and the
//! year-by-year [`DcProjectionOutput`] produced by
//! [`project_dc_account`](crate::calculation::project_dc_account).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parameters for projecting a defined-contribution account.
///
/// Rates are decimal fractions (`0.08` means 8%).
///
/// # Example
///
/// ```
/// use pension_engine::models::DcProjectionInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = DcProjectionInput {
///     current_balance: Decimal::from_str("10000.00").unwrap(),
///     annual_salary: Decimal::from_str("40000.00").unwrap(),
///     contribution_rate: Decimal::from_str("0.10").unwrap(),
///     salary_growth: Decimal::from_str("0.02").unwrap(),
///     rate_of_return: Decimal::from_str("0.05").unwrap(),
///     years: 1,
///     accrual_frequency: 1,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcProjectionInput {
    /// The account balance at the start of the projection.
    pub current_balance: Decimal,
    /// The salary for the first projected year.
    pub annual_salary: Decimal,
    /// Share of salary contributed each year, between 0 and 1 inclusive.
    pub contribution_rate: Decimal,
    /// Annual salary growth; may be negative.
    pub salary_growth: Decimal,
    /// Annual investment return; may be negative.
    pub rate_of_return: Decimal,
    /// Number of years to project.
    pub years: u32,
    /// Contribution accruals per year. Not used by the annual formula.
    #[serde(default = "default_accrual_frequency")]
    pub accrual_frequency: u32,
}

fn default_accrual_frequency() -> u32 {
    1
}

impl DcProjectionInput {
    /// Checks the field-level constraints of the record.
    pub fn validate(&self) -> EngineResult<()> {
        if self.current_balance.is_sign_negative() && !self.current_balance.is_zero() {
            return Err(EngineError::validation(
                "current_balance",
                "must not be negative",
            ));
        }
        if self.annual_salary.is_sign_negative() && !self.annual_salary.is_zero() {
            return Err(EngineError::validation(
                "annual_salary",
                "must not be negative",
            ));
        }
        if self.contribution_rate < Decimal::ZERO || self.contribution_rate > Decimal::ONE {
            return Err(EngineError::validation(
                "contribution_rate",
                "must be between 0 and 1 (decimal)",
            ));
        }
        if self.accrual_frequency < 1 {
            return Err(EngineError::validation(
                "accrual_frequency",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One simulated year of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBalance {
    /// The 1-based year index.
    pub year: u32,
    /// The salary earned in this year.
    pub salary: Decimal,
    /// The contribution paid in this year.
    pub contribution: Decimal,
    /// The balance at the end of this year, after growth.
    pub balance: Decimal,
}

/// The result of a defined-contribution projection.
///
/// `final_balance` equals the balance of the last entry in
/// `annual_balances`, or `initial_balance` when no years were projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcProjectionOutput {
    /// The starting balance, quantized.
    pub initial_balance: Decimal,
    /// One entry per projected year, in increasing year order.
    pub annual_balances: Vec<YearBalance>,
    /// The balance after the last projected year.
    pub final_balance: Decimal,
}
