//! Defined-benefit accrual.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{DbAccrualInput, DbAccrualOutput};
use crate::money::ArithmeticContext;

/// Computes the annual and total defined-benefit pension.
///
/// `annual_accrual = final_salary x accrual_rate` and
/// `total_pension = annual_accrual x years_of_service`, each quantized to
/// the money scale. The total is built from the already-rounded accrual.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::project_db_accrual;
/// use pension_engine::models::DbAccrualInput;
/// use pension_engine::money::ArithmeticContext;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = DbAccrualInput {
///     final_salary: Decimal::from_str("50000.00").unwrap(),
///     years_of_service: 20,
///     accrual_rate: Decimal::from_str("0.02").unwrap(),
/// };
///
/// let output = project_db_accrual(&input, &ArithmeticContext::default()).unwrap();
/// assert_eq!(output.annual_accrual, Decimal::from_str("1000.00").unwrap());
/// assert_eq!(output.total_pension, Decimal::from_str("20000.00").unwrap());
/// ```
pub fn project_db_accrual(
    input: &DbAccrualInput,
    ctx: &ArithmeticContext,
) -> EngineResult<DbAccrualOutput> {
    debug!(
        years_of_service = input.years_of_service,
        accrual_rate = %input.accrual_rate,
        "Computing defined-benefit accrual"
    );

    let annual_accrual = ctx
        .money(input.final_salary)
        .checked_scale(input.accrual_rate)?;
    let total_pension = annual_accrual.checked_scale(Decimal::from(input.years_of_service))?;

    Ok(DbAccrualOutput {
        annual_accrual: annual_accrual.quantize(),
        total_pension: total_pension.quantize(),
    })
}
