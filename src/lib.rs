//! Deterministic pension actuarial calculations.
//!
//! This crate projects defined-contribution balances, computes
//! defined-benefit accruals, converts lump sums to level annuity payments,
//! and applies commutation, withdrawal, and early/late retirement
//! adjustments. All arithmetic is exact decimal arithmetic with explicit
//! half-up quantization to cents at every reportable step, so results are
//! reproducible to the cent.
//!
//! Raw inputs enter through [`validation::Validator`], which produces the
//! typed records the [`calculation`] functions accept. [`batch`] runs DC
//! projections over many rows with per-row failure isolation.
//!
//! # Example
//!
//! ```
//! use pension_engine::calculation::project_dc_account;
//! use pension_engine::money::ArithmeticContext;
//! use pension_engine::validation::{RawRecord, Validator};
//! use serde_json::json;
//!
//! let raw: RawRecord = serde_json::from_value(json!({
//!     "current_balance": "10000.00",
//!     "annual_salary": "40000.00",
//!     "contribution_rate": "0.10",
//!     "salary_growth": "0.02",
//!     "rate_of_return": "0.05",
//!     "years": 1
//! }))
//! .unwrap();
//!
//! let input = Validator::default().dc_projection(&raw).unwrap();
//! let output = project_dc_account(&input, &ArithmeticContext::default()).unwrap();
//! assert_eq!(output.final_balance.to_string(), "14700.00");
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod validation;
