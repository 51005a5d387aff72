//! Task checklist reading
//!
//! `docs/tasks.md` keeps the project checklist as `### Task N – Title`
//! headings with bullet details underneath. This module splits the file
//! into sections and supports the listing filters of the `tasks`
//! subcommand.

use colored::Colorize;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{SeedError, SeedResult};

/// Heading pattern for actionable items, e.g. "### Task 3 – Wire the API".
const TASK_HEADING_PATTERN: &str = r"^###\s+(Task\s+\d+\s+–\s+.+)$";

/// One heading-delimited section of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSection {
    pub title: String,
    pub details: Vec<String>,
}

impl TaskSection {
    pub fn is_completed(&self) -> bool {
        self.title.contains("*(Completed)*")
    }

    pub fn is_in_progress(&self) -> bool {
        self.title.contains("*(In Progress)*")
    }

    /// True when the query appears in the title or any detail line,
    /// case-insensitively.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .details
                .iter()
                .any(|line| line.to_lowercase().contains(&query))
    }
}

/// Split checklist text into heading-delimited sections.
///
/// Lines before the first heading are ignored; blank lines inside a
/// section are dropped. Detail lines are stored trimmed.
pub fn parse_tasks(content: &str) -> SeedResult<Vec<TaskSection>> {
    let heading = Regex::new(TASK_HEADING_PATTERN)
        .map_err(|e| SeedError::Parse(format!("Invalid task heading pattern: {e}")))?;

    let mut sections: Vec<TaskSection> = Vec::new();
    let mut current: Option<TaskSection> = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(captures) = heading.captures(line) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(TaskSection {
                title: captures[1].to_string(),
                details: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            if !line.is_empty() {
                section.details.push(line.to_string());
            }
        }
    }
    if let Some(section) = current {
        sections.push(section);
    }

    Ok(sections)
}

/// Read and parse the checklist file, failing fast when it is missing.
pub fn load_tasks(path: &Path) -> SeedResult<Vec<TaskSection>> {
    if !path.exists() {
        return Err(SeedError::TasksFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_tasks(&content)
}

/// Apply the listing filters in order: completed, search, next.
pub fn filter_tasks(
    tasks: Vec<TaskSection>,
    include_completed: bool,
    search: Option<&str>,
    next_only: bool,
) -> Vec<TaskSection> {
    let mut tasks: Vec<TaskSection> = tasks
        .into_iter()
        .filter(|task| include_completed || !task.is_completed())
        .collect();

    if let Some(query) = search {
        tasks.retain(|task| task.matches(query));
    }

    if next_only {
        tasks.truncate(1);
    }

    tasks
}

/// Render one task: the title line, then each detail as an indented
/// bullet. In-progress tasks get a highlighted title.
pub fn format_task(task: &TaskSection) -> String {
    let title = if task.is_in_progress() {
        task.title.yellow().bold().to_string()
    } else {
        task.title.clone()
    };

    let details = if task.details.is_empty() {
        "  (No details provided.)".to_string()
    } else {
        task.details
            .iter()
            .map(|item| format!("  - {}", item.trim_start_matches(['-', ' ']).trim()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("{title}\n{details}\n")
}
