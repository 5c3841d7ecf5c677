//! Withdrawals from an account balance.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::money::ArithmeticContext;

/// Applies a withdrawal to a balance, flooring the result at zero.
///
/// A withdrawal larger than the balance empties the account; it is not an
/// error. The result is quantized to the money scale.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::apply_withdrawal;
/// use pension_engine::money::ArithmeticContext;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ctx = ArithmeticContext::default();
/// let balance = Decimal::from_str("100.00").unwrap();
///
/// let left = apply_withdrawal(balance, Decimal::from_str("250.00").unwrap(), &ctx).unwrap();
/// assert_eq!(left.to_string(), "0.00");
/// ```
pub fn apply_withdrawal(
    balance: Decimal,
    withdrawal_amt: Decimal,
    ctx: &ArithmeticContext,
) -> EngineResult<Decimal> {
    debug!(balance = %balance, withdrawal_amt = %withdrawal_amt, "Applying withdrawal");

    let remaining = balance.checked_sub(withdrawal_amt).ok_or_else(|| {
        EngineError::arithmetic(format!(
            "withdrawal of {} from {} is out of range",
            withdrawal_amt, balance
        ))
    })?;

    Ok(ctx.quantize_money(remaining.max(Decimal::ZERO)))
}
