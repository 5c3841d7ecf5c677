//! Batch report types.

use serde::Serialize;

use crate::models::DcProjectionOutput;
use crate::validation::RawRecord;

/// The outcome for one input row.
///
/// Serializes as `{row_index, result}` on success and
/// `{row_index, row, error}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    /// The row was projected.
    Projected {
        /// The 1-based position of the row in the input.
        row_index: usize,
        /// The projection result.
        result: DcProjectionOutput,
    },
    /// The row could not be validated or projected.
    Failed {
        /// The 1-based position of the row in the input.
        row_index: usize,
        /// The raw row as it was received.
        row: RawRecord,
        /// Why the row failed.
        error: String,
    },
}

impl BatchEntry {
    /// Returns the 1-based row index.
    pub fn row_index(&self) -> usize {
        match self {
            BatchEntry::Projected { row_index, .. } | BatchEntry::Failed { row_index, .. } => {
                *row_index
            }
        }
    }

    /// Returns true if the row was projected.
    pub fn is_success(&self) -> bool {
        matches!(self, BatchEntry::Projected { .. })
    }
}

/// The result of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Number of rows processed.
    pub count: usize,
    /// One entry per row, in input order.
    pub results: Vec<BatchEntry>,
}

impl BatchReport {
    /// Returns the number of rows that failed.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|entry| !entry.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn projected(row_index: usize) -> BatchEntry {
        BatchEntry::Projected {
            row_index,
            result: DcProjectionOutput {
                initial_balance: Decimal::new(100, 2),
                annual_balances: vec![],
                final_balance: Decimal::new(100, 2),
            },
        }
    }

    fn failed(row_index: usize) -> BatchEntry {
        BatchEntry::Failed {
            row_index,
            row: serde_json::from_value(json!({"years": "x"})).unwrap(),
            error: "invalid input: bad years".to_string(),
        }
    }

    #[test]
    fn test_success_serializes_row_index_and_result() {
        let json = serde_json::to_value(projected(1)).unwrap();
        assert_eq!(json["row_index"], 1);
        assert_eq!(json["result"]["final_balance"], "1.00");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_serializes_row_and_error() {
        let json = serde_json::to_value(failed(2)).unwrap();
        assert_eq!(json["row_index"], 2);
        assert_eq!(json["row"]["years"], "x");
        assert_eq!(json["error"], "invalid input: bad years");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_report_counts_failures() {
        let report = BatchReport {
            count: 3,
            results: vec![projected(1), failed(2), projected(3)],
        };
        assert_eq!(report.failures(), 1);
        assert_eq!(report.results[1].row_index(), 2);
    }
}
