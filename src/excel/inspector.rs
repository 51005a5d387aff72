//! Cell inspector
//!
//! Shared leaf routine of every extraction step: read one cell's resolved
//! value and formula text, and flag broken references into a per-block
//! accumulator.

use calamine::{CellErrorType, Data, DataType};
use std::collections::HashSet;

use super::workbook::WorksheetPair;
use crate::types::RefError;

/// Convert a 1-based column index to Excel column letters (1→A, 26→Z, 27→AA).
pub fn column_letter(col: u32) -> String {
    let mut letters = String::new();
    let mut num = col;

    while num > 0 {
        let remainder = ((num - 1) % 26) as u8;
        letters.insert(0, (b'A' + remainder) as char);
        num = (num - 1) / 26;
    }

    letters
}

/// A1-style address for a 1-based row/column pair.
pub fn cell_address(row: u32, col: u32) -> String {
    format!("{}{}", column_letter(col), row)
}

/// Excel display literal for an error-typed cell.
fn error_literal(error: &CellErrorType) -> &'static str {
    match error {
        CellErrorType::Div0 => "#DIV/0!",
        CellErrorType::NA => "#N/A",
        CellErrorType::Name => "#NAME?",
        CellErrorType::Null => "#NULL!",
        CellErrorType::Num => "#NUM!",
        CellErrorType::Ref => "#REF!",
        CellErrorType::Value => "#VALUE!",
        CellErrorType::GettingData => "#GETTING_DATA",
    }
}

/// Render a resolved value the way the worksheet displays it.
fn display_value(value: &Data) -> String {
    match value {
        Data::Error(error) => error_literal(error).to_string(),
        other => other.to_string(),
    }
}

/// Reference errors collected while parsing one month block.
///
/// Each distinct cell address is recorded at most once, no matter how many
/// extraction steps inspect it.
#[derive(Debug, Default)]
pub struct RefErrorLog {
    errors: Vec<RefError>,
    seen: HashSet<String>,
}

impl RefErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, cell: String, value: Option<String>, formula: Option<String>) {
        if self.seen.insert(cell.clone()) {
            self.errors.push(RefError {
                cell,
                value,
                formula,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order they were first recorded.
    pub fn into_errors(self) -> Vec<RefError> {
        self.errors
    }
}

/// Resolved value and normalized formula text of a single cell.
#[derive(Debug, Clone)]
pub struct CellReading {
    pub value: Option<Data>,
    pub formula: Option<String>,
}

/// Read one cell through both views, recording reference errors as a side
/// effect on `log`.
///
/// Formula text is normalized to start with `=` (calamine strips it). A cell
/// is flagged when its resolved value is text containing `#REF`, its formula
/// contains `#REF` (both case-insensitive), or the cell itself is
/// error-typed. An error-typed cell with no formula text keeps its error
/// literal in the formula field.
pub fn inspect_cell(
    sheet: &WorksheetPair,
    row: u32,
    col: u32,
    log: &mut RefErrorLog,
) -> CellReading {
    let value = sheet
        .value_at(row, col)
        .filter(|data| !matches!(data, Data::Empty))
        .cloned();

    let mut formula = sheet.formula_at(row, col).map(|text| {
        if text.starts_with('=') {
            text.to_string()
        } else {
            format!("={text}")
        }
    });

    if formula.is_none() {
        if let Some(Data::Error(error)) = &value {
            formula = Some(error_literal(error).to_string());
        }
    }

    let mut has_ref_error = false;
    if let Some(Data::String(text)) = &value {
        if text.to_uppercase().contains("#REF") {
            has_ref_error = true;
        }
    }
    if let Some(text) = &formula {
        if text.to_uppercase().contains("#REF") {
            has_ref_error = true;
        }
    }
    if matches!(value, Some(Data::Error(_))) {
        has_ref_error = true;
    }

    if has_ref_error {
        log.record(
            cell_address(row, col),
            value.as_ref().map(display_value),
            formula.clone(),
        );
    }

    CellReading { value, formula }
}

/// Coerce a resolved value into a number.
///
/// Numeric cells pass through; text cells are parsed after trimming;
/// anything unparseable degrades to `None`, never to zero.
pub fn to_number(value: Option<&Data>) -> Option<f64> {
    match value? {
        Data::Float(number) => Some(*number),
        Data::Int(number) => Some(*number as f64),
        Data::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a resolved value into an ISO calendar date string.
pub fn to_iso_date(value: Option<&Data>) -> Option<String> {
    let date: chrono::NaiveDate = value?.as_date()?;
    Some(date.format("%Y-%m-%d").to_string())
}
