//! CSV export display
//!
//! Renders the `/export` CSV as a table for quick inspection.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::{ClientError, ClientResult};

/// Parse CSV text and format it as a table
///
/// Returns the table and the number of data rows.
pub fn format_csv_table(csv_text: &str) -> ClientResult<(String, usize)> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut builder = Builder::default();

    let headers = reader
        .headers()
        .map_err(|e| ClientError::Json(format!("Invalid CSV export: {}", e)))?
        .clone();
    builder.push_record(headers.iter().map(String::from));

    let mut count = 0;
    for record in reader.records() {
        let record = record.map_err(|e| ClientError::Json(format!("Invalid CSV export: {}", e)))?;
        builder.push_record(record.iter().map(String::from));
        count += 1;
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    Ok((format!("{}\n", table), count))
}
