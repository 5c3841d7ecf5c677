//! Calculation logic for the pension calculation engine.
//!
//! This module contains the pure actuarial functions: defined-contribution
//! projection, defined-benefit accrual, annuity conversion, commutation,
//! withdrawal, and early/late retirement adjustment. Every function takes
//! the [`ArithmeticContext`](crate::money::ArithmeticContext) it rounds
//! under and returns quantized results.

mod annuity;
mod commutation;
mod db_accrual;
mod dc_projection;
mod retirement_adjustment;
mod withdrawal;

pub use annuity::annuity_conversion;
pub use commutation::{commutation, commutation_discount_rate};
pub use db_accrual::project_db_accrual;
pub use dc_projection::project_dc_account;
pub use retirement_adjustment::{
    default_early_retirement_pct, default_late_retirement_pct, early_retirement_adjustment,
    late_retirement_adjustment,
};
pub use withdrawal::apply_withdrawal;
