//! Batch runner with per-row failure isolation.

use std::io::Read;

use tracing::{info, warn};

use crate::calculation::project_dc_account;
use crate::error::{EngineError, EngineResult, ErrorKind};
use crate::money::ArithmeticContext;
use crate::validation::{RawRecord, Validator};

use super::csv_rows::read_csv_rows;
use super::report::{BatchEntry, BatchReport};

/// Validates and projects every row, collecting one entry per row.
///
/// Errors are caught at the row boundary: a row that fails validation or
/// projection becomes a [`BatchEntry::Failed`] and the next row is
/// processed as if nothing happened.
pub fn run_dc_batch<I>(rows: I, validator: &Validator, ctx: &ArithmeticContext) -> BatchReport
where
    I: IntoIterator<Item = RawRecord>,
{
    let results: Vec<BatchEntry> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| project_row(index + 1, row, validator, ctx))
        .collect();

    let report = BatchReport {
        count: results.len(),
        results,
    };
    info!(
        rows = report.count,
        failed = report.failures(),
        "Batch projection completed"
    );
    report
}

/// Reads rows from a headered CSV and runs them as a batch.
///
/// # Errors
///
/// Returns [`EngineError::CsvRead`] if the CSV itself cannot be read. Row
/// failures never fail the batch.
pub fn run_dc_batch_csv<R: Read>(
    reader: R,
    validator: &Validator,
    ctx: &ArithmeticContext,
) -> EngineResult<BatchReport> {
    let rows = read_csv_rows(reader)?;
    Ok(run_dc_batch(rows, validator, ctx))
}

fn project_row(
    row_index: usize,
    row: RawRecord,
    validator: &Validator,
    ctx: &ArithmeticContext,
) -> BatchEntry {
    let outcome = validator
        .dc_projection(&row)
        .and_then(|input| project_dc_account(&input, ctx));

    match outcome {
        Ok(result) => BatchEntry::Projected { row_index, result },
        Err(err) => {
            warn!(row_index, error = %err, "Batch row failed");
            BatchEntry::Failed {
                row_index,
                row,
                error: describe(&err),
            }
        }
    }
}

fn describe(err: &EngineError) -> String {
    match err.kind() {
        ErrorKind::Validation => format!("invalid input: {}", err),
        _ => format!("projection failed: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(value: Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    fn dc_row(years: Value) -> RawRecord {
        record(json!({
            "current_balance": "10000.00",
            "annual_salary": "40000.00",
            "contribution_rate": "0.10",
            "salary_growth": "0.02",
            "rate_of_return": "0.05",
            "years": years
        }))
    }

    fn run(rows: Vec<RawRecord>) -> BatchReport {
        run_dc_batch(rows, &Validator::default(), &ArithmeticContext::default())
    }

    #[test]
    fn test_empty_batch() {
        let report = run(vec![]);
        assert_eq!(report.count, 0);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_failed_row_does_not_affect_neighbours() {
        let report = run(vec![dc_row(json!(1)), dc_row(json!("abc")), dc_row(json!(1))]);

        assert_eq!(report.count, 3);
        assert_eq!(report.failures(), 1);
        let indices: Vec<usize> = report.results.iter().map(BatchEntry::row_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        for entry in [&report.results[0], &report.results[2]] {
            match entry {
                BatchEntry::Projected { result, .. } => {
                    assert_eq!(result.final_balance, dec("14700.00"));
                }
                other => panic!("expected a projection, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validation_failure_keeps_raw_row() {
        let row = dc_row(json!(-3));
        let report = run(vec![row.clone()]);

        match &report.results[0] {
            BatchEntry::Failed {
                row_index,
                row: kept,
                error,
            } => {
                assert_eq!(*row_index, 1);
                assert_eq!(kept, &row);
                assert!(error.starts_with("invalid input:"));
                assert!(error.contains("years"));
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_arithmetic_failure_is_reported_as_projection_failure() {
        let mut row = dc_row(json!(40));
        row.insert("current_balance".to_string(), json!("1000000000000.00"));
        row.insert("rate_of_return".to_string(), json!("100"));
        let report = run(vec![row]);

        match &report.results[0] {
            BatchEntry::Failed { error, .. } => {
                assert!(error.starts_with("projection failed:"));
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_batch() {
        let csv = "current_balance,annual_salary,years,contribution_rate,salary_growth,rate_of_return\n\
                   10000.00,40000.00,1,0.10,0.02,0.05\n\
                   10000.00,40000.00,,0.10,0.02,0.05\n";
        let report = run_dc_batch_csv(
            csv.as_bytes(),
            &Validator::default(),
            &ArithmeticContext::default(),
        )
        .unwrap();

        assert_eq!(report.count, 2);
        assert!(report.results[0].is_success());
        match &report.results[1] {
            BatchEntry::Failed { row, error, .. } => {
                assert_eq!(row["years"], "");
                assert!(error.contains("years"));
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }
}
