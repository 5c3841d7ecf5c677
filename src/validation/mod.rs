//! Validation of raw, loosely-typed input into typed input records.
//!
//! Collaborating layers hand the engine raw records: JSON objects decoded
//! from a request body, or CSV rows whose cells are all strings. The
//! [`Validator`] is the single place where those records are converted into
//! the typed inputs in [`crate::models`]. Conversion either succeeds
//! completely or fails with [`EngineError::Validation`](crate::error::EngineError::Validation)
//! naming the offending field; no calculation runs on a partially valid
//! record.
//!
//! # Accepted shapes
//!
//! | Field type | Accepted                                                  |
//! |------------|-----------------------------------------------------------|
//! | decimal    | JSON number, or string holding a plain/scientific decimal |
//! | integer    | JSON integer, or string holding an integer                |
//!
//! A missing key and an explicit `null` both count as absent. Absent
//! optional fields take their default; absent required fields fail. Every
//! other shape (booleans, arrays, objects, empty strings, fractional values
//! for integer fields) fails.
//!
//! # Example
//!
//! ```
//! use pension_engine::validation::{RawRecord, Validator};
//! use serde_json::json;
//!
//! let raw: RawRecord = serde_json::from_value(json!({
//!     "final_salary": "50000.00",
//!     "years_of_service": 20,
//!     "accrual_rate": 0.02
//! }))
//! .unwrap();
//!
//! let input = Validator::default().db_accrual(&raw).unwrap();
//! assert_eq!(input.years_of_service, 20);
//! ```

mod fields;
mod validator;

pub use validator::{InputDefaults, Validator};

/// A raw input record keyed by field name.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
