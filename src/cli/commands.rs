use colored::Colorize;
use std::path::PathBuf;

use crate::error::SeedResult;
use crate::excel::{month_starts, parse_month_block, WorksheetPair};
use crate::tasks::{filter_tasks, format_task, load_tasks};
use crate::types::MonthRecord;
use crate::writer;

/// Execute the export command
pub fn export(
    workbook: PathBuf,
    sheet: String,
    output: PathBuf,
    limit_months: Option<usize>,
    verbose: bool,
) -> SeedResult<()> {
    println!("{}", "📊 Planseed - Worksheet Export".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Sheet:    {}\n", sheet);

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let pair = WorksheetPair::load(&workbook, &sheet)?;

    let mut months: Vec<MonthRecord> = Vec::new();
    for start_row in month_starts(&pair) {
        let month = parse_month_block(&pair, start_row)?;

        if verbose {
            println!(
                "   📅 {}: {} account(s), rows {}..{}",
                month.month_start.bright_blue(),
                month.accounts.len(),
                month.source_rows.start,
                month.source_rows.end
            );
        }

        months.push(month);
        if let Some(limit) = limit_months {
            if months.len() >= limit {
                break;
            }
        }
    }

    if verbose {
        println!("{}", "💾 Writing seed file...".cyan());
    }

    writer::write_seed_file(&output, &months)?;

    println!("Exported {} month(s) to {}", months.len(), output.display());

    let ref_count: usize = months.iter().map(MonthRecord::ref_error_count).sum();
    if ref_count > 0 {
        println!(
            "{}",
            format!("Detected {ref_count} cell(s) containing #REF! or Excel errors.").yellow()
        );
    }

    Ok(())
}

/// Execute the tasks command
pub fn tasks(
    file: PathBuf,
    next: bool,
    include_completed: bool,
    search: Option<String>,
) -> SeedResult<()> {
    let tasks = load_tasks(&file)?;
    let tasks = filter_tasks(tasks, include_completed, search.as_deref(), next);

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for task in &tasks {
        println!("{}", format_task(task));
    }

    Ok(())
}
