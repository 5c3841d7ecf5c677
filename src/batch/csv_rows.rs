//! CSV row source for batch projections.

use std::io::Read;

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::validation::RawRecord;

/// Reads a headered CSV into raw records of string cells.
///
/// Columns are matched by header name, so their order does not matter and
/// extra columns are carried along untouched. Cells are trimmed. Rows with
/// too few cells simply lack the trailing fields, which the validator then
/// reports as missing. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns [`EngineError::CsvRead`] if the underlying reader fails or the
/// CSV cannot be tokenized.
pub fn read_csv_rows<R: Read>(reader: R) -> EngineResult<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .byte_headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| String::from_utf8_lossy(header).into_owned())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record.map_err(csv_error)?;
        let row: RawRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| {
                (
                    header.clone(),
                    Value::String(String::from_utf8_lossy(cell).into_owned()),
                )
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn csv_error(error: csv::Error) -> EngineError {
    EngineError::CsvRead {
        message: error.to_string(),
    }
}
