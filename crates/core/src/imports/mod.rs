//! Bulk CSV import for seeding a portfolio.
//!
//! Accepted format: a header row naming `symbol` and `quantity` columns
//! (case-insensitive), optionally `unit_cost`. Rows with malformed cells
//! are collected as per-row errors; they never abort the import.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::HoldingInput;

/// How the importer treats existing holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Each row goes through add-or-increment semantics.
    Append,
    /// All holdings are deleted first, then rows are inserted.
    Replace,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Rows parsed out of a CSV document plus per-row parse errors.
#[derive(Debug, Default)]
pub struct ParsedImport {
    pub rows: Vec<HoldingInput>,
    pub errors: Vec<String>,
}

/// Parse CSV text into holding inputs.
///
/// Fails outright only when the header row is unusable (no `symbol` or
/// `quantity` column); individual bad rows are reported in
/// `ParsedImport::errors`.
pub fn parse_holdings_csv(csv_text: &str) -> Result<ParsedImport> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::invalid_input(format!("Unreadable CSV header: {}", e)))?
        .clone();

    let find_column = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| {
            let h = h.trim().to_lowercase();
            names.iter().any(|n| h == *n)
        })
    };

    let symbol_idx = find_column(&["symbol", "ticker"]).ok_or_else(|| {
        Error::Validation(ValidationError::MissingField("symbol column".to_string()))
    })?;
    let quantity_idx = find_column(&["quantity", "qty", "shares"]).ok_or_else(|| {
        Error::Validation(ValidationError::MissingField("quantity column".to_string()))
    })?;
    let unit_cost_idx = find_column(&["unit_cost", "unitcost", "cost", "avg_cost"]);

    let mut parsed = ParsedImport::default();

    for (i, record) in reader.records().enumerate() {
        // Header is row 1; data starts at row 2.
        let row_num = i + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                parsed.errors.push(format!("Row {}: {}", row_num, e));
                continue;
            }
        };

        // Skip fully blank lines.
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let symbol = record.get(symbol_idx).unwrap_or("").trim();
        if symbol.is_empty() {
            parsed.errors.push(format!("Row {}: missing symbol", row_num));
            continue;
        }

        let quantity_cell = record.get(quantity_idx).unwrap_or("").trim();
        let quantity = match Decimal::from_str(quantity_cell) {
            Ok(q) => q,
            Err(e) => {
                parsed.errors.push(format!(
                    "Row {}: invalid quantity '{}': {}",
                    row_num, quantity_cell, e
                ));
                continue;
            }
        };

        let unit_cost = match unit_cost_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            Some(cell) => match Decimal::from_str(cell) {
                Ok(c) => Some(c),
                Err(e) => {
                    parsed.errors.push(format!(
                        "Row {}: invalid unit cost '{}': {}",
                        row_num, cell, e
                    ));
                    continue;
                }
            },
            None => None,
        };

        parsed.rows.push(HoldingInput {
            symbol: symbol.to_uppercase(),
            quantity,
            unit_cost,
        });
    }

    Ok(parsed)
}
