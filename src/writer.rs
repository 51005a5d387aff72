//! Seed file writer

use std::fs;
use std::path::Path;

use crate::error::SeedResult;
use crate::types::MonthRecord;

/// Write the month records as an indented JSON array.
///
/// Parent directories are created as needed. Output is UTF-8 with
/// non-ASCII characters kept verbatim. Field order is fixed by the record
/// structs and map order by insertion, so re-exporting an unchanged
/// workbook produces byte-identical output.
pub fn write_seed_file(path: &Path, months: &[MonthRecord]) -> SeedResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(months)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MonthRecord, SourceRows};
    use indexmap::IndexMap;
    use tempfile::TempDir;

    fn sample_month() -> MonthRecord {
        let mut statuses = IndexMap::new();
        statuses.insert("Café".to_string(), "Pending".to_string());

        MonthRecord {
            month_start: "2025-03-01".to_string(),
            fixed_factor: Some(0.5),
            inflow_total: None,
            inflow_formula: None,
            fixed_factor_formula: None,
            status_by_bucket: statuses,
            due_dates: IndexMap::new(),
            bucket_order: vec!["Café".to_string()],
            accounts: Vec::new(),
            source_rows: SourceRows { start: 2, end: 6 },
            ref_errors: Vec::new(),
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data/seeds/planned-expenses.json");

        write_seed_file(&path, &[sample_month()]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_keeps_non_ascii_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");

        write_seed_file(&path, &[sample_month()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Café"));
        assert!(!content.contains("\\u00e9"));
    }

    #[test]
    fn test_write_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");

        write_seed_file(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
