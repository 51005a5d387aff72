//! Planner worksheet reading
//!
//! This module walks the repeating month blocks of the planning sheet:
//! - Workbook: one calamine reader exposing cached values and raw formulas
//! - Inspector: single-cell reads with reference-error detection
//! - Blocks: block location and the fixed-offset field extraction

mod blocks;
mod inspector;
mod workbook;

pub use blocks::{month_starts, parse_month_block};
pub use inspector::{cell_address, column_letter, inspect_cell, CellReading, RefErrorLog};
pub use workbook::WorksheetPair;
