//! Tasks command tests
//!
//! Exercise the command handler directly against checklist files written
//! to temp directories.

use planseed::cli::commands;
use planseed::tasks::{filter_tasks, load_tasks};
use planseed::SeedError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CHECKLIST: &str = "\
# Project checklist

### Task 1 – Seed the budget planner

- Export planner months
- Load them into the app

### Task 2 – Clean up old imports *(Completed)*

- Remove stale seed files

### Task 3 – Review allocations

- Compare bucket totals against the budget
";

fn write_checklist(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("tasks.md");
    fs::write(&path, CHECKLIST).unwrap();
    path
}

#[test]
fn test_completed_hidden_by_default() {
    let dir = TempDir::new().unwrap();
    let tasks = load_tasks(&write_checklist(&dir)).unwrap();

    let visible = filter_tasks(tasks, false, None, false);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "Task 1 – Seed the budget planner");
    assert_eq!(visible[1].title, "Task 3 – Review allocations");
}

#[test]
fn test_include_completed_restores_original_order() {
    let dir = TempDir::new().unwrap();
    let tasks = load_tasks(&write_checklist(&dir)).unwrap();

    let visible = filter_tasks(tasks, true, None, false);
    assert_eq!(visible.len(), 3);
    assert!(visible[1].is_completed());
}

#[test]
fn test_next_yields_first_incomplete() {
    let dir = TempDir::new().unwrap();
    let tasks = load_tasks(&write_checklist(&dir)).unwrap();

    let visible = filter_tasks(tasks, false, None, true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Task 1 – Seed the budget planner");
}

#[test]
fn test_search_spans_title_and_body() {
    let dir = TempDir::new().unwrap();
    let path = write_checklist(&dir);

    // "budget" appears in task 1's title and task 3's body
    let tasks = load_tasks(&path).unwrap();
    let visible = filter_tasks(tasks, false, Some("BUDGET"), false);
    assert_eq!(visible.len(), 2);

    let tasks = load_tasks(&path).unwrap();
    let visible = filter_tasks(tasks, false, Some("stale seed"), false);
    assert!(visible.is_empty(), "completed tasks are filtered before search");
}

#[test]
fn test_command_succeeds_on_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write_checklist(&dir);

    let result = commands::tasks(path, false, false, None);
    assert!(result.is_ok());
}

#[test]
fn test_command_fails_on_missing_file() {
    let result = commands::tasks(PathBuf::from("missing/tasks.md"), false, false, None);
    assert!(matches!(result, Err(SeedError::TasksFileNotFound(_))));
}

#[test]
fn test_command_with_unmatched_search() {
    let dir = TempDir::new().unwrap();
    let path = write_checklist(&dir);

    // Prints "No tasks found." and succeeds
    let result = commands::tasks(path, false, false, Some("nonexistent".to_string()));
    assert!(result.is_ok());
}
