use indexmap::IndexMap;
use serde::Serialize;

//==============================================================================
// Month export records
//==============================================================================
//
// Field declaration order is the JSON field order of the seed file, so the
// structs below double as the output schema.

/// Formula text behind the three fixed scalar columns of an account row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScalarFormulas {
    pub remaining_cash: Option<String>,
    pub fixed_balance: Option<String>,
    pub savings_transfer: Option<String>,
}

/// One row inside a month block: an account and its allocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountAllocation {
    pub name: String,
    pub remaining_cash: Option<f64>,
    pub fixed_balance: Option<f64>,
    pub savings_transfer: Option<f64>,
    /// Allocated amount per bucket, in legend column order.
    pub bucket_allocations: IndexMap<String, Option<f64>>,
    pub formulas: ScalarFormulas,
    /// Formula text per bucket; same key set as `bucket_allocations`.
    pub bucket_formulas: IndexMap<String, Option<String>>,
}

/// Sheet row span a month block was read from (1-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRows {
    pub start: u32,
    pub end: u32,
}

/// A cell whose value or formula carries a broken reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefError {
    /// A1-style cell address, e.g. "D12".
    pub cell: String,
    pub value: Option<String>,
    pub formula: Option<String>,
}

/// One repeating month block of the planner sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRecord {
    /// First-of-month ISO date taken from the block's start row.
    pub month_start: String,
    pub fixed_factor: Option<f64>,
    pub inflow_total: Option<f64>,
    pub inflow_formula: Option<String>,
    pub fixed_factor_formula: Option<String>,
    pub status_by_bucket: IndexMap<String, String>,
    pub due_dates: IndexMap<String, Option<String>>,
    /// Bucket names in legend column order; callers rely on it for rendering.
    pub bucket_order: Vec<String>,
    pub accounts: Vec<AccountAllocation>,
    pub source_rows: SourceRows,
    pub ref_errors: Vec<RefError>,
}

impl MonthRecord {
    /// Number of cells in this block flagged with reference errors.
    pub fn ref_error_count(&self) -> usize {
        self.ref_errors.len()
    }
}
