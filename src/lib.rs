//! Planseed - planner worksheet exporter and task checklist reader
//!
//! Two small utilities for the expense-sharing app:
//!
//! - `export` walks the repeating month blocks of the planning worksheet
//!   and serializes them into JSON seed data, reading cached values and
//!   raw formula text side by side so broken references can be surfaced.
//! - `tasks` reads the project checklist and prints heading-delimited
//!   task sections with simple filtering.
//!
//! # Example
//!
//! ```no_run
//! use planseed::excel::{month_starts, parse_month_block, WorksheetPair};
//!
//! let sheet = WorksheetPair::load("docs/Copy of Expense Shares.xlsx", "Planned Expenses")?;
//! let starts: Vec<u32> = month_starts(&sheet).collect();
//!
//! for start_row in starts {
//!     let month = parse_month_block(&sheet, start_row)?;
//!     println!("{}: {} account(s)", month.month_start, month.accounts.len());
//! }
//! # Ok::<(), planseed::SeedError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod tasks;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SeedError, SeedResult};
pub use types::{AccountAllocation, MonthRecord, RefError, ScalarFormulas, SourceRows};
