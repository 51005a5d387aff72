//! Month block location and parsing
//!
//! The planner sheet repeats a fixed layout for every month: a start row
//! (date in column A, section header flag in column F), a legend row four
//! rows down naming the bucket columns, a status row, a due-date window,
//! and a variable-length list of account rows. The offsets below mirror
//! that worksheet's conventions exactly and are deliberately not
//! generalized.

use calamine::Data;
use indexmap::IndexMap;
use std::collections::HashMap;

use super::inspector::{column_letter, inspect_cell, to_iso_date, to_number, RefErrorLog};
use super::workbook::WorksheetPair;
use crate::error::{SeedError, SeedResult};
use crate::types::{AccountAllocation, MonthRecord, ScalarFormulas, SourceRows};

/// True when `row` begins a month block: a date-typed cell in column A
/// plus a non-empty text flag in column F.
fn is_block_start(sheet: &WorksheetPair, row: u32) -> bool {
    let has_date = matches!(
        sheet.value_at(row, 1),
        Some(Data::DateTime(_)) | Some(Data::DateTimeIso(_))
    );
    let has_flag = matches!(
        sheet.value_at(row, 6),
        Some(Data::String(flag)) if !flag.is_empty()
    );
    has_date && has_flag
}

/// Sheet rows that start a month block, top to bottom. Single scan.
pub fn month_starts(sheet: &WorksheetPair) -> impl Iterator<Item = u32> + '_ {
    (1..=sheet.max_row()).filter(move |&row| is_block_start(sheet, row))
}

/// Read the legend row and return column index → bucket name, in column
/// order.
///
/// Repeated header text must not collide: the second and later occurrences
/// are suffixed with their column letter, e.g. "Misc" and "Misc (G)".
fn extract_bucket_columns(sheet: &WorksheetPair, legend_row: u32) -> IndexMap<u32, String> {
    let mut columns = IndexMap::new();
    let mut occurrences: HashMap<String, u32> = HashMap::new();

    for col in 4..=13 {
        // legend spans D through M
        let Some(Data::String(header)) = sheet.value_at(legend_row, col) else {
            continue;
        };
        let base = header.trim();
        if base.is_empty() {
            continue;
        }

        let count = occurrences.entry(base.to_string()).or_insert(0);
        let name = if *count == 0 {
            base.to_string()
        } else {
            format!("{} ({})", base, column_letter(col))
        };
        *count += 1;

        columns.insert(col, name);
    }

    columns
}

/// One status string per bucket from the row below the block start.
/// Blank or non-text cells default to "Pending".
fn extract_statuses(
    sheet: &WorksheetPair,
    status_row: u32,
    bucket_cols: &IndexMap<u32, String>,
) -> IndexMap<String, String> {
    let mut statuses = IndexMap::new();

    for (&col, bucket) in bucket_cols {
        let status = match sheet.value_at(status_row, col) {
            Some(Data::String(raw)) if !raw.trim().is_empty() => raw.trim().to_string(),
            _ => "Pending".to_string(),
        };
        statuses.insert(bucket.clone(), status);
    }

    statuses
}

/// First date found per bucket in the four rows below start+2, as an ISO
/// date, or None when the window holds no date.
///
/// Every inspected cell participates in reference-error detection. The
/// savings legend column (D) conventionally stores its due date one column
/// to the right, so column E is searched as a fallback for it.
fn extract_due_dates(
    sheet: &WorksheetPair,
    start_row: u32,
    bucket_cols: &IndexMap<u32, String>,
    log: &mut RefErrorLog,
) -> IndexMap<String, Option<String>> {
    let mut due_dates = IndexMap::new();

    for (&col, bucket) in bucket_cols {
        let mut candidates = vec![col];
        if col == 4 {
            candidates.push(5);
        }

        let mut found = None;
        'candidates: for candidate in candidates {
            for row in start_row + 2..=start_row + 5 {
                let reading = inspect_cell(sheet, row, candidate, log);
                if let Some(iso) = to_iso_date(reading.value.as_ref()) {
                    found = Some(iso);
                    break 'candidates;
                }
            }
        }

        due_dates.insert(bucket.clone(), found);
    }

    due_dates
}

/// Walk account rows from start+5 until the sheet ends or the next block
/// begins. Returns the accounts plus the last row consumed.
///
/// Rows with a blank name column are skipped but still advance the cursor;
/// they do not terminate the block.
fn extract_accounts(
    sheet: &WorksheetPair,
    start_row: u32,
    bucket_cols: &IndexMap<u32, String>,
    log: &mut RefErrorLog,
) -> (Vec<AccountAllocation>, u32) {
    let mut accounts = Vec::new();
    let mut row = start_row + 5; // first account row
    let mut last_row = start_row + 4;
    let max_row = sheet.max_row();

    while row <= max_row && !is_block_start(sheet, row) {
        let name_reading = inspect_cell(sheet, row, 5, log);
        let name = match &name_reading.value {
            Some(Data::String(text)) if !text.trim().is_empty() => text.trim().to_string(),
            _ => {
                row += 1;
                continue;
            }
        };

        let remaining = inspect_cell(sheet, row, 1, log);
        let fixed = inspect_cell(sheet, row, 2, log);
        let savings = inspect_cell(sheet, row, 4, log);

        let mut bucket_allocations = IndexMap::new();
        let mut bucket_formulas = IndexMap::new();
        for (&col, bucket) in bucket_cols {
            if col == 5 {
                // column E holds the account name, never an allocation
                continue;
            }
            let reading = inspect_cell(sheet, row, col, log);
            bucket_allocations.insert(bucket.clone(), to_number(reading.value.as_ref()));
            bucket_formulas.insert(bucket.clone(), reading.formula);
        }

        accounts.push(AccountAllocation {
            name,
            remaining_cash: to_number(remaining.value.as_ref()),
            fixed_balance: to_number(fixed.value.as_ref()),
            savings_transfer: to_number(savings.value.as_ref()),
            bucket_allocations,
            formulas: ScalarFormulas {
                remaining_cash: remaining.formula,
                fixed_balance: fixed.formula,
                savings_transfer: savings.formula,
            },
            bucket_formulas,
        });

        last_row = row;
        row += 1;
    }

    (accounts, last_row)
}

/// Parse one month block starting at `start_row` into a `MonthRecord`.
///
/// Reference errors found by every sub-step land in a single deduplicated
/// list on the record.
pub fn parse_month_block(sheet: &WorksheetPair, start_row: u32) -> SeedResult<MonthRecord> {
    let month_start = to_iso_date(sheet.value_at(start_row, 1)).ok_or_else(|| {
        SeedError::Validation(format!(
            "Row {start_row} does not contain a valid month start date"
        ))
    })?;

    let mut log = RefErrorLog::new();

    let bucket_cols = extract_bucket_columns(sheet, start_row + 4); // legend row
    let statuses = extract_statuses(sheet, start_row + 1, &bucket_cols);
    let due_dates = extract_due_dates(sheet, start_row, &bucket_cols, &mut log);
    let (accounts, end_row) = extract_accounts(sheet, start_row, &bucket_cols, &mut log);

    let fixed_factor = inspect_cell(sheet, start_row + 2, 2, &mut log);
    let inflow = inspect_cell(sheet, start_row + 3, 1, &mut log);

    Ok(MonthRecord {
        month_start,
        fixed_factor: to_number(fixed_factor.value.as_ref()),
        inflow_total: to_number(inflow.value.as_ref()),
        inflow_formula: inflow.formula,
        fixed_factor_formula: fixed_factor.formula,
        status_by_bucket: statuses,
        due_dates,
        bucket_order: bucket_cols.values().cloned().collect(),
        accounts,
        source_rows: SourceRows {
            start: start_row,
            end: end_row,
        },
        ref_errors: log.into_errors(),
    })
}
