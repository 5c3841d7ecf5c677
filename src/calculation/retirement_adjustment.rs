//! Early and late retirement adjustments.
//!
//! An early retirement reduces the pension by a compounded percentage for
//! every year before normal retirement; a late retirement increases it for
//! every year after. The year counts are signed: a negative count inverts
//! the factor. Whether negative counts should be rejected is a product
//! decision that has not been made, so they are accepted here.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::money::{ArithmeticContext, checked_powi};

/// Returns the default early-retirement reduction per year (5%).
pub fn default_early_retirement_pct() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the default late-retirement increase per year (2%).
pub fn default_late_retirement_pct() -> Decimal {
    Decimal::new(2, 2)
}

/// Reduces a pension for retiring `years_early` years early.
///
/// `adjusted = annual_pension x (1 - pct_per_year)^years_early`, quantized
/// to the money scale.
///
/// # Errors
///
/// Returns [`EngineError::Arithmetic`] when `pct_per_year` is exactly 1
/// and `years_early` is negative (a division by zero), or when the result
/// is out of range.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::{default_early_retirement_pct, early_retirement_adjustment};
/// use pension_engine::money::ArithmeticContext;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let adjusted = early_retirement_adjustment(
///     Decimal::from_str("10000.00").unwrap(),
///     2,
///     default_early_retirement_pct(),
///     &ArithmeticContext::default(),
/// )
/// .unwrap();
/// assert_eq!(adjusted, Decimal::from_str("9025.00").unwrap());
/// ```
pub fn early_retirement_adjustment(
    annual_pension: Decimal,
    years_early: i64,
    pct_per_year: Decimal,
    ctx: &ArithmeticContext,
) -> EngineResult<Decimal> {
    debug!(years_early, pct_per_year = %pct_per_year, "Applying early retirement adjustment");

    let base = Decimal::ONE
        .checked_sub(pct_per_year)
        .ok_or_else(|| EngineError::arithmetic("1 - pct_per_year is out of range"))?;
    apply_yearly_factor(annual_pension, base, years_early, ctx)
}

/// Increases a pension for retiring `years_late` years late.
///
/// `adjusted = annual_pension x (1 + pct_per_year)^years_late`, quantized
/// to the money scale.
///
/// # Errors
///
/// Returns [`EngineError::Arithmetic`] when `pct_per_year` is exactly -1
/// and `years_late` is negative, or when the result is out of range.
pub fn late_retirement_adjustment(
    annual_pension: Decimal,
    years_late: i64,
    pct_per_year: Decimal,
    ctx: &ArithmeticContext,
) -> EngineResult<Decimal> {
    debug!(years_late, pct_per_year = %pct_per_year, "Applying late retirement adjustment");

    let base = Decimal::ONE
        .checked_add(pct_per_year)
        .ok_or_else(|| EngineError::arithmetic("1 + pct_per_year is out of range"))?;
    apply_yearly_factor(annual_pension, base, years_late, ctx)
}

fn apply_yearly_factor(
    annual_pension: Decimal,
    base: Decimal,
    years: i64,
    ctx: &ArithmeticContext,
) -> EngineResult<Decimal> {
    let factor = checked_powi(base, years)?;
    let adjusted = ctx.money(annual_pension).checked_scale(factor)?;
    Ok(adjusted.quantize())
}
