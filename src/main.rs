use clap::{Parser, Subcommand};
use colored::Colorize;
use planseed::cli;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "planseed")]
#[command(about = "Planner worksheet exporter and task checklist reader")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export the planner worksheet into JSON seed data.

Walks the repeating month blocks of the planning sheet and writes an array
of months, each with metadata (fixed factor, due dates, statuses) and a
list of per-account allocations. Broken cell references (#REF!) are
collected into each month's ref_errors list instead of aborting the
export.

EXAMPLES:
  planseed export
  planseed export --workbook docs/shares.xlsx --sheet 'Planned Expenses'
  planseed export --limit-months 3 --output /tmp/seed.json")]
    /// Export the planner worksheet into JSON seed data
    Export {
        /// Path to the Excel workbook
        #[arg(long, default_value = "docs/Copy of Expense Shares.xlsx")]
        workbook: PathBuf,

        /// Worksheet name containing the monthly planner
        #[arg(long, default_value = "Planned Expenses")]
        sheet: String,

        /// Path to write JSON output
        #[arg(long, default_value = "data/seeds/planned-expenses.json")]
        output: PathBuf,

        /// Optional limit of months to export (starting from the top)
        #[arg(long)]
        limit_months: Option<usize>,

        /// Show per-month progress
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "List tasks defined in the checklist file.

Recognises '### Task N – Title' headings and prints each task with its
bullet details. Completed tasks (marked *(Completed)* in the title) are
hidden unless --include-completed is set.

EXAMPLES:
  planseed tasks
  planseed tasks --next
  planseed tasks --search budget --include-completed")]
    /// List tasks from the checklist file
    Tasks {
        /// Path to the tasks file
        #[arg(long, default_value = "docs/tasks.md")]
        file: PathBuf,

        /// Show only the next incomplete task
        #[arg(long)]
        next: bool,

        /// Include completed tasks when listing
        #[arg(long)]
        include_completed: bool,

        /// Filter tasks containing the search string (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            workbook,
            sheet,
            output,
            limit_months,
            verbose,
        } => cli::export(workbook, sheet, output, limit_months, verbose),

        Commands::Tasks {
            file,
            next,
            include_completed,
            search,
        } => cli::tasks(file, next, include_completed, search),
    };

    if let Err(error) = result {
        eprintln!("{} {error}", "error:".red().bold());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
