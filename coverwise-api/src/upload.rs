//! Client-side gate on transaction files before they leave the machine:
//! a .csv extension, a readable header row, and at least one data row.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// What the gate learned about the file, for logging and confirmation output.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvPreview {
    pub columns: Vec<String>,
    pub row_count: usize,
}

/// Validate a CSV on disk. The extension check runs before any I/O.
pub fn validate_csv(path: &Path) -> Result<CsvPreview> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        bail!("only CSV files are allowed: {}", path.display());
    }

    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    validate_csv_bytes(&data)
}

/// Validate in-memory CSV content.
pub fn validate_csv_bytes(data: &[u8]) -> Result<CsvPreview> {
    if data.is_empty() {
        bail!("file is empty");
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let columns: Vec<String> = rdr
        .headers()
        .context("unreadable CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if columns.iter().all(|c| c.is_empty()) {
        bail!("CSV header row is empty");
    }

    let mut row_count = 0usize;
    for record in rdr.records() {
        record.context("malformed CSV row")?;
        row_count += 1;
    }
    if row_count == 0 {
        bail!("CSV has a header but no transactions");
    }

    Ok(CsvPreview { columns, row_count })
}
