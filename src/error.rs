use std::path::PathBuf;
use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("Worksheet '{name}' not found. Available: {available:?}")]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Tasks file not found at {}", .0.display())]
    TasksFileNotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
