//! Dual-view worksheet loader
//!
//! The exporter needs both the cached computed value and the raw formula
//! text for every cell. One calamine reader provides both: `worksheet_range`
//! carries the values the spreadsheet application last calculated, and
//! `worksheet_formula` carries the formula source text.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

use crate::error::{SeedError, SeedResult};

/// Value and formula views of a single worksheet, held in memory for the
/// duration of the run.
#[derive(Debug)]
pub struct WorksheetPair {
    values: Range<Data>,
    formulas: Range<String>,
}

impl WorksheetPair {
    /// Open `path` and capture both views of the named sheet.
    ///
    /// Fails fast when the workbook file is missing or the sheet name does
    /// not match exactly; the sheet error lists every available name.
    pub fn load<P: AsRef<Path>>(path: P, sheet_name: &str) -> SeedResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SeedError::WorkbookNotFound(path.to_path_buf()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let available = workbook.sheet_names().to_vec();
        if !available.iter().any(|name| name == sheet_name) {
            return Err(SeedError::SheetNotFound {
                name: sheet_name.to_string(),
                available,
            });
        }

        let values = workbook.worksheet_range(sheet_name)?;
        let formulas = workbook.worksheet_formula(sheet_name)?;

        Ok(Self { values, formulas })
    }

    /// Cached value of a cell, or `None` when outside the populated range.
    ///
    /// Rows and columns are 1-based, matching the worksheet's own
    /// addressing; conversion to calamine's 0-based absolute coordinates
    /// happens only here.
    pub fn value_at(&self, row: u32, col: u32) -> Option<&Data> {
        self.values.get_value((row - 1, col - 1))
    }

    /// Raw formula text of a cell (without any leading `=`), 1-based.
    pub fn formula_at(&self, row: u32, col: u32) -> Option<&str> {
        self.formulas
            .get_value((row - 1, col - 1))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Last populated sheet row, 1-based. Zero for an empty sheet.
    pub fn max_row(&self) -> u32 {
        self.values.end().map_or(0, |(row, _col)| row + 1)
    }
}
