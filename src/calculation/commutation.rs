//! Commutation of an annuity payment into a lump sum.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::money::ArithmeticContext;

/// Returns the fixed discount rate used for commutation (5%).
///
/// The rate is not caller-supplied.
pub fn commutation_discount_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Converts a share of an annuity payment into a lump sum.
///
/// `lump = (annuity_payment x commutation_pct) / 0.05`, quantized to the
/// money scale. A `commutation_pct` of zero or below returns exactly `0.00`
/// without evaluating the formula.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::commutation;
/// use pension_engine::money::ArithmeticContext;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ctx = ArithmeticContext::default();
/// let payment = Decimal::from_str("1000.00").unwrap();
///
/// let lump = commutation(payment, Decimal::from_str("0.10").unwrap(), &ctx).unwrap();
/// assert_eq!(lump, Decimal::from_str("2000.00").unwrap());
///
/// let none = commutation(payment, Decimal::from_str("-0.10").unwrap(), &ctx).unwrap();
/// assert_eq!(none.to_string(), "0.00");
/// ```
pub fn commutation(
    annuity_payment: Decimal,
    commutation_pct: Decimal,
    ctx: &ArithmeticContext,
) -> EngineResult<Decimal> {
    debug!(
        annuity_payment = %annuity_payment,
        commutation_pct = %commutation_pct,
        "Commuting annuity payment"
    );

    if commutation_pct <= Decimal::ZERO {
        return Ok(ctx.quantize_money(Decimal::ZERO));
    }

    let lump = annuity_payment
        .checked_mul(commutation_pct)
        .and_then(|commuted| commuted.checked_div(commutation_discount_rate()))
        .ok_or_else(|| {
            EngineError::arithmetic(format!(
                "commutation of {} at {} is out of range",
                annuity_payment, commutation_pct
            ))
        })?;

    Ok(ctx.quantize_money(lump))
}
