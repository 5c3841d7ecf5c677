//! Defined-benefit accrual records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for a defined-benefit accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbAccrualInput {
    /// The salary the benefit is based on.
    pub final_salary: Decimal,
    /// Completed years of service. Unsigned, so never negative.
    pub years_of_service: u32,
    /// Share of final salary accrued per year of service.
    pub accrual_rate: Decimal,
}

/// The result of a defined-benefit accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbAccrualOutput {
    /// The pension accrued per year of service.
    pub annual_accrual: Decimal,
    /// `annual_accrual` multiplied by the years of service.
    pub total_pension: Decimal,
}
