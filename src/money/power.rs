//! Integer exponentiation for decimal factors.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Raises `base` to an integer power using checked arithmetic.
///
/// Negative exponents invert the base first, so `0` raised to a negative
/// power is a division by zero. Any base raised to `0` is `1`. Results too
/// large to represent are reported as arithmetic errors; results too small
/// to represent underflow towards zero.
///
/// # Example
///
/// ```
/// use pension_engine::money::checked_powi;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let factor = checked_powi(Decimal::from_str("0.95").unwrap(), 2).unwrap();
/// assert_eq!(factor, Decimal::from_str("0.9025").unwrap());
///
/// let inverse = checked_powi(Decimal::from_str("2").unwrap(), -2).unwrap();
/// assert_eq!(inverse, Decimal::from_str("0.25").unwrap());
/// ```
pub fn checked_powi(base: Decimal, exponent: i64) -> EngineResult<Decimal> {
    if exponent == 0 {
        return Ok(Decimal::ONE);
    }

    let mut factor = if exponent < 0 {
        if base.is_zero() {
            return Err(EngineError::arithmetic(format!(
                "division by zero (0 raised to {})",
                exponent
            )));
        }
        Decimal::ONE
            .checked_div(base)
            .ok_or_else(|| out_of_range(base, exponent))?
    } else {
        base
    };

    let mut remaining = exponent.unsigned_abs();
    let mut result = Decimal::ONE;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result
                .checked_mul(factor)
                .ok_or_else(|| out_of_range(base, exponent))?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor
                .checked_mul(factor)
                .ok_or_else(|| out_of_range(base, exponent))?;
        }
    }
    Ok(result)
}

fn out_of_range(base: Decimal, exponent: i64) -> EngineError {
    EngineError::arithmetic(format!("{} raised to {} is out of range", base, exponent))
}
