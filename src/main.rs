//! Cinema schedule command-line interface.
//!
//! Loads a showing table, then reads commands from standard input until
//! end of input:
//!
//! ```bash
//! cinema-schedule showings.csv --output-dir out/
//! GET ALL MOVIES
//! GET SCHEDULE Heat
//! ```
//!
//! Timetables go to standard output; logs go to standard error, filtered
//! by `RUST_LOG` (default: info).

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cinema_schedule::command::Session;
use cinema_schedule::ingest;
use cinema_schedule::validation;

/// Weekly showing planner for one movie at a time.
#[derive(Parser, Debug)]
#[command(name = "cinema-schedule")]
#[command(about = "Builds non-overlapping weekly showing schedules")]
struct Args {
    /// Showing table (comma-separated, with header row)
    table: PathBuf,

    /// Directory the `<MovieName>.html` documents are written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let catalog = ingest::load_catalog(&args.table)
        .with_context(|| format!("loading {}", args.table.display()))?;
    info!(
        records = catalog.len(),
        movies = catalog.movie_names().len(),
        "showing table loaded"
    );

    if let Err(findings) = validation::validate_records(catalog.records()) {
        for finding in findings {
            warn!(kind = ?finding.kind, record = finding.index, "{}", finding.message);
        }
    }

    let session = Session::new(catalog).with_output_dir(&args.output_dir);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout.lock())
        .context("processing commands")?;

    Ok(())
}
