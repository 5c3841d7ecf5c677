//! Batch defined-contribution projections.
//!
//! A batch is independent repeated invocation: every raw row is validated
//! and projected on its own, and a failure in one row is recorded against
//! that row without affecting any other. The report always holds exactly
//! one entry per input row, in input order, keyed by a 1-based row index.
//!
//! # Example
//!
//! ```
//! use pension_engine::batch::read_csv_rows;
//! use pension_engine::batch::run_dc_batch;
//! use pension_engine::money::ArithmeticContext;
//! use pension_engine::validation::Validator;
//!
//! let csv = "current_balance,annual_salary,years,contribution_rate,salary_growth,rate_of_return\n\
//!            10000.00,40000.00,1,0.10,0.02,0.05\n\
//!            10000.00,40000.00,-1,0.10,0.02,0.05\n";
//!
//! let rows = read_csv_rows(csv.as_bytes()).unwrap();
//! let report = run_dc_batch(rows, &Validator::default(), &ArithmeticContext::default());
//!
//! assert_eq!(report.count, 2);
//! assert!(report.results[0].is_success());
//! assert!(!report.results[1].is_success());
//! ```

mod csv_rows;
mod report;
mod runner;

pub use csv_rows::read_csv_rows;
pub use report::{BatchEntry, BatchReport};
pub use runner::{run_dc_batch, run_dc_batch_csv};
