//! Exact decimal money arithmetic.
//!
//! Every monetary quantity in the engine is a [`Money`] value bound to an
//! explicit [`ArithmeticContext`]. The context fixes the rounding mode and
//! the number of decimal places kept for reportable amounts and for
//! intermediate factors. There is no process-wide rounding state: two
//! contexts can be used side by side without interfering.
//!
//! # Example
//!
//! ```
//! use pension_engine::money::ArithmeticContext;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let ctx = ArithmeticContext::default();
//! let balance = ctx.money(Decimal::from_str("10000.00").unwrap());
//! let contribution = ctx.money(Decimal::from_str("4000.005").unwrap());
//!
//! let total = balance.checked_add(contribution).unwrap();
//! assert_eq!(total.to_string(), "14000.01");
//! ```

mod amount;
mod context;
mod power;

pub use amount::Money;
pub use context::{
    ArithmeticContext, DEFAULT_FACTOR_SCALE, DEFAULT_MONEY_SCALE, MAX_SCALE, RoundingMode,
};
pub(crate) use context::parse_decimal;
pub use power::checked_powi;
