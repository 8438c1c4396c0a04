//! CLI tool to filter and export ticket tracker CSV dumps.
//!
//! Usage:
//!   ticket-sift --name "Benny C"
//!   ticket-sift --name "Benny C" --status "In Progress" --start 2024-01-01 --end 2024-12-31
//!
//! Reads every `*.csv` in the export directory, keeps the tickets matching
//! the filters, collapses duplicate IDs, and writes the survivors to
//! `<export>.csv`.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use ticket_sift::{TicketFilter, dedupe, io, logging};

/// Filter a directory of ticket tracker CSV exports down to one report.
///
/// Soft outcomes (no name given, no exports found, nothing matched) print
/// a message and exit cleanly without writing an output file.
#[derive(Parser)]
#[command(name = "ticket-sift")]
struct Cli {
    /// Engineer name to filter by (e.g. 'Benny C'); partial names match
    #[arg(short, long, default_value = "")]
    name: String,

    /// Ticket status to filter by
    #[arg(short, long, default_value = "Complete")]
    status: String,

    /// Start date in YYYY-MM-DD format (default: today - 366 days)
    #[arg(long)]
    start: Option<String>,

    /// End date in YYYY-MM-DD format (default: today)
    #[arg(long)]
    end: Option<String>,

    /// Directory containing the CSV exports
    #[arg(short, long, default_value = "tickets")]
    dir: PathBuf,

    /// Export file name without the extension (e.g. 'review-2025-2026')
    #[arg(short, long)]
    export: Option<String>,

    /// Show per-stage record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Trailing ~year window start for a given run date.
fn default_start(today: NaiveDate) -> String {
    (today - Days::new(366)).to_string()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // One "now" snapshot per run; both date defaults derive from it.
    let today = Local::now().date_naive();
    let start = cli.start.unwrap_or_else(|| default_start(today));
    let end = cli.end.unwrap_or_else(|| today.to_string());

    if cli.name.is_empty() {
        println!("Oops - don't forget to add your name!");
        return Ok(());
    }

    let rows = io::load_dir(&cli.dir)
        .with_context(|| format!("loading ticket exports from '{}'", cli.dir.display()))?;
    if rows.is_empty() {
        println!(
            "Oops - please add some ticket export CSVs to '{}'",
            cli.dir.display()
        );
        return Ok(());
    }

    let review = TicketFilter::new(rows)
        .assignee(&cli.name)?
        .status(&cli.status)?
        .created_between(&start, &end)?
        .into_results();

    if review.is_empty() {
        println!("No results found matching your filters.");
        return Ok(());
    }

    let report = dedupe(review)?;

    let base = cli
        .export
        .unwrap_or_else(|| format!("results_export_{start}_{end}"));
    let out_path = PathBuf::from(format!("{base}.csv"));
    io::write_csv(&out_path, &report)
        .with_context(|| format!("writing export to '{}'", out_path.display()))?;

    println!("Wrote {} tickets to {}", report.len(), out_path.display());
    Ok(())
}
