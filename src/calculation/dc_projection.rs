//! Defined-contribution account projection.
//!
//! This module projects an account balance year by year from salary
//! contributions and investment growth, rounding to cents after every step.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DcProjectionInput, DcProjectionOutput, YearBalance};
use crate::money::ArithmeticContext;

/// Projects a defined-contribution account over `input.years` years.
///
/// For each year, starting at year 1:
///
/// 1. `contribution = salary x contribution_rate`
/// 2. `balance = balance + contribution`
/// 3. `balance = balance x (1 + rate_of_return)`
/// 4. the year's salary, contribution and balance are recorded
/// 5. `salary = salary x (1 + salary_growth)`, effective from the next year
///
/// Each step is quantized to the money scale before the next one runs.
/// Negative growth rates compound like any other rate.
///
/// # Errors
///
/// Returns [`EngineError::Arithmetic`] if a value leaves the representable
/// range.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::project_dc_account;
/// use pension_engine::models::DcProjectionInput;
/// use pension_engine::money::ArithmeticContext;
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
///
/// let output = project_dc_account(&input, &ArithmeticContext::default()).unwrap();
/// assert_eq!(output.annual_balances[0].contribution, Decimal::from_str("4000.00").unwrap());
/// assert_eq!(output.final_balance, Decimal::from_str("14700.00").unwrap());
/// ```
pub fn project_dc_account(
    input: &DcProjectionInput,
    ctx: &ArithmeticContext,
) -> EngineResult<DcProjectionOutput> {
    debug!(
        years = input.years,
        contribution_rate = %input.contribution_rate,
        rate_of_return = %input.rate_of_return,
        salary_growth = %input.salary_growth,
        "Projecting defined-contribution account"
    );

    let return_factor = one_plus(input.rate_of_return, "rate_of_return")?;
    let salary_factor = one_plus(input.salary_growth, "salary_growth")?;

    let opening = ctx.money(input.current_balance);
    let mut balance = opening;
    let mut salary = ctx.money(input.annual_salary);
    let mut annual_balances = Vec::new();

    for year in 1..=input.years {
        let contribution = salary.checked_scale(input.contribution_rate)?;
        balance = balance.checked_add(contribution)?;
        balance = balance.checked_scale(return_factor)?;

        annual_balances.push(YearBalance {
            year,
            salary: salary.quantize(),
            contribution: contribution.quantize(),
            balance: balance.quantize(),
        });

        // The grown salary is only needed if another year follows.
        if year < input.years {
            salary = salary.checked_scale(salary_factor)?;
        }
    }

    Ok(DcProjectionOutput {
        initial_balance: opening.quantize(),
        annual_balances,
        final_balance: balance.quantize(),
    })
}

/// Returns `1 + rate`.
fn one_plus(rate: Decimal, field: &str) -> EngineResult<Decimal> {
    Decimal::ONE
        .checked_add(rate)
        .ok_or_else(|| EngineError::arithmetic(format!("1 + {} is out of range", field)))
}
