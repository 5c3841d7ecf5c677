//! Input and output records for the pension calculation engine.
//!
//! Each calculation consumes one immutable input record and produces one
//! immutable output record. Input records carry a `validate` method that
//! enforces their field-level constraints.

mod annuity;
mod db_accrual;
mod dc_projection;
mod scalar_inputs;

pub use annuity::{AnnuityInput, AnnuityOutput};
pub use db_accrual::{DbAccrualInput, DbAccrualOutput};
pub use dc_projection::{DcProjectionInput, DcProjectionOutput, YearBalance};
pub use scalar_inputs::{CommutationInput, RetirementAdjustmentInput, WithdrawalInput};
