//! Lump-sum to annuity conversion.
//!
//! The annuity factor is kept at the context's factor scale (7 places by
//! default) because it is a multiplier; the payment it produces is a money
//! amount and is kept at the money scale.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AnnuityInput, AnnuityOutput};
use crate::money::{ArithmeticContext, checked_powi};

/// Converts a lump sum into a level periodic payment.
///
/// With the per-period rate `r = rate_of_return / payment_frequency_per_year`
/// and `n = payment_periods`:
///
/// - if `r == 0` the factor is exactly `n` and the payment is
///   `lump_sum / n`;
/// - otherwise the factor is `r / (1 - (1 + r)^-n)`, quantized to the factor
///   scale, and the payment is `lump_sum x factor`.
///
/// # Errors
///
/// Returns [`EngineError::Arithmetic`] when the formula would divide by an
/// exact zero, which only happens for inputs that fail validation (no
/// periods, no payments per year) or for a per-period rate of `-1` or
/// below that zeroes the discount term.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::annuity_conversion;
/// use pension_engine::models::AnnuityInput;
/// use pension_engine::money::ArithmeticContext;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = AnnuityInput {
///     lump_sum: Decimal::from_str("100000.00").unwrap(),
///     rate_of_return: Decimal::from_str("0.05").unwrap(),
///     payment_periods: 240,
///     payment_frequency_per_year: 12,
/// };
///
/// let output = annuity_conversion(&input, &ArithmeticContext::default()).unwrap();
/// assert_eq!(output.annuity_factor, Decimal::from_str("0.0065996").unwrap());
/// assert_eq!(output.periodic_payment, Decimal::from_str("659.96").unwrap());
/// ```
pub fn annuity_conversion(
    input: &AnnuityInput,
    ctx: &ArithmeticContext,
) -> EngineResult<AnnuityOutput> {
    debug!(
        payment_periods = input.payment_periods,
        payment_frequency_per_year = input.payment_frequency_per_year,
        rate_of_return = %input.rate_of_return,
        "Converting lump sum to annuity"
    );

    let frequency = Decimal::from(input.payment_frequency_per_year);
    if frequency.is_zero() {
        return Err(EngineError::arithmetic(
            "division by zero (payment_frequency_per_year is 0)",
        ));
    }
    let periodic_rate = input
        .rate_of_return
        .checked_div(frequency)
        .ok_or_else(|| EngineError::arithmetic("periodic rate is out of range"))?;

    let lump_sum = ctx.money(input.lump_sum);
    let periods = Decimal::from(input.payment_periods);

    if periodic_rate.is_zero() {
        let periodic_payment = lump_sum.checked_div(ctx.money(periods))?;
        return Ok(AnnuityOutput {
            periodic_payment: periodic_payment.quantize(),
            annuity_factor: periods,
        });
    }

    let growth = Decimal::ONE
        .checked_add(periodic_rate)
        .ok_or_else(|| EngineError::arithmetic("1 + periodic rate is out of range"))?;
    let discount = checked_powi(growth, -i64::from(input.payment_periods))?;
    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(EngineError::arithmetic(format!(
            "division by zero (annuity denominator for {} periods at {})",
            input.payment_periods, periodic_rate
        )));
    }
    let raw_factor = periodic_rate
        .checked_div(denominator)
        .ok_or_else(|| EngineError::arithmetic("annuity factor is out of range"))?;
    let annuity_factor = ctx.quantize_factor(raw_factor);
    let periodic_payment = lump_sum.checked_scale(annuity_factor)?;

    Ok(AnnuityOutput {
        periodic_payment: periodic_payment.quantize(),
        annuity_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(lump_sum: &str, rate: &str, periods: u32, frequency: u32) -> AnnuityInput {
        AnnuityInput {
            lump_sum: dec(lump_sum),
            rate_of_return: dec(rate),
            payment_periods: periods,
            payment_frequency_per_year: frequency,
        }
    }

    fn convert(input: &AnnuityInput) -> EngineResult<AnnuityOutput> {
        annuity_conversion(input, &ArithmeticContext::default())
    }

    #[test]
    fn test_monthly_annuity_over_twenty_years() {
        let output = convert(&create_input("100000.00", "0.05", 240, 12)).unwrap();
        assert_eq!(output.annuity_factor, dec("0.0065996"));
        assert_eq!(output.annuity_factor.to_string(), "0.0065996");
        assert_eq!(output.periodic_payment, dec("659.96"));
    }

    #[test]
    fn test_annual_annuity() {
        let output = convert(&create_input("50000.00", "0.04", 10, 1)).unwrap();
        assert_eq!(output.annuity_factor, dec("0.1232909"));
        assert_eq!(output.periodic_payment, dec("6164.55"));
    }

    #[test]
    fn test_zero_rate_uses_straight_line() {
        let output = convert(&create_input("100.00", "0", 3, 12)).unwrap();
        assert_eq!(output.annuity_factor, dec("3"));
        assert_eq!(output.periodic_payment, dec("33.33"));
    }

    #[test]
    fn test_zero_rate_factor_is_exact_period_count() {
        let output = convert(&create_input("12000.00", "0.00", 12, 12)).unwrap();
        assert_eq!(output.annuity_factor, Decimal::from(12));
        assert_eq!(output.periodic_payment, dec("1000.00"));
    }

    #[test]
    fn test_single_period_pays_back_with_interest() {
        // r = 0.12, n = 1: factor = 0.12 / (1 - 1/1.12) = 1.12
        let output = convert(&create_input("1000.00", "0.12", 1, 1)).unwrap();
        assert_eq!(output.annuity_factor, dec("1.1200000"));
        assert_eq!(output.periodic_payment, dec("1120.00"));
    }

    #[test]
    fn test_negative_rate_is_computed() {
        let output = convert(&create_input("1000.00", "-0.10", 2, 1)).unwrap();
        // factor = -0.1 / (1 - 0.9^-2) = 0.4263158 (rounded)
        assert_eq!(output.annuity_factor, dec("0.4263158"));
        assert_eq!(output.periodic_payment, dec("426.32"));
    }

    #[test]
    fn test_zero_periods_at_zero_rate_is_division_by_zero() {
        let err = convert(&create_input("100.00", "0", 0, 12)).unwrap_err();
        assert!(matches!(err, EngineError::Arithmetic { .. }));
    }

    #[test]
    fn test_zero_periods_at_nonzero_rate_is_division_by_zero() {
        let err = convert(&create_input("100.00", "0.05", 0, 12)).unwrap_err();
        assert!(matches!(err, EngineError::Arithmetic { .. }));
    }

    #[test]
    fn test_zero_frequency_is_division_by_zero() {
        let err = convert(&create_input("100.00", "0.05", 12, 0)).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn test_total_loss_rate_is_division_by_zero() {
        let err = convert(&create_input("100.00", "-1", 5, 1)).unwrap_err();
        assert!(matches!(err, EngineError::Arithmetic { .. }));
    }
}
