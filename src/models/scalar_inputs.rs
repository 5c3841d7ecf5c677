//! Input records for the single-value operations: commutation, withdrawal,
//! and early/late retirement adjustment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for commuting part of an annuity into a lump sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommutationInput {
    /// The periodic annuity payment.
    pub annuity_payment: Decimal,
    /// Share of the payment to commute.
    pub commutation_pct: Decimal,
}

/// Parameters for a withdrawal from an account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalInput {
    /// The balance before the withdrawal.
    pub balance: Decimal,
    /// The amount requested.
    pub withdrawal_amt: Decimal,
}

/// Parameters for adjusting a pension for early or late retirement.
///
/// `years` is signed; a negative count inverts the adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementAdjustmentInput {
    /// The unadjusted annual pension.
    pub annual_pension: Decimal,
    /// Years retired before (early) or after (late) normal retirement.
    pub years: i64,
    /// Adjustment applied per year, compounded.
    pub pct_per_year: Decimal,
}
