//! Line-based command session.
//!
//! # Commands
//!
//! | Line | Effect |
//! |------|--------|
//! | `GET ALL MOVIES` | Prints distinct movie names, ascending, one per line. |
//! | `GET SCHEDULE <name>` | Prints the text timetable of `<name>` and writes `<name>.html`. |
//!
//! `GET ALL MOVIES` must be the whole line. For schedules, the first
//! `GET SCHEDULE ` found in the line is removed and the rest is taken
//! verbatim as the movie name. Unknown movies and unrecognized lines are
//! ignored without output. A document that cannot be written (for example
//! a movie name containing `/`) is logged and the session continues.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::render;
use crate::scheduler::WeeklyPlanner;

const LIST_MOVIES: &str = "GET ALL MOVIES";
const GET_SCHEDULE: &str = "GET SCHEDULE ";

/// A recognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List distinct movie names.
    ListMovies,
    /// Render the weekly schedule of a movie.
    Schedule(String),
}

impl Command {
    /// Parses one input line. Returns `None` for unrecognized lines.
    pub fn parse(line: &str) -> Option<Self> {
        if line == LIST_MOVIES {
            return Some(Command::ListMovies);
        }
        line.contains(GET_SCHEDULE)
            .then(|| Command::Schedule(line.replacen(GET_SCHEDULE, "", 1)))
    }
}

/// Executes commands against a catalog.
///
/// Text output goes to the writer given to [`Session::execute`]; HTML
/// documents are written into the output directory.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    planner: WeeklyPlanner,
    output_dir: PathBuf,
}

impl Session {
    /// Creates a session writing documents into the current directory.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            planner: WeeklyPlanner::new(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Sets the directory HTML documents are written into.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the weekly planner.
    pub fn with_planner(mut self, planner: WeeklyPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// The catalog being queried.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Path of the HTML document for a movie.
    pub fn document_path(&self, movie_name: &str) -> PathBuf {
        self.output_dir.join(format!("{movie_name}.html"))
    }

    /// Reads commands line by line until end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Some(command) => self.execute(&command, out)?,
                None => debug!(line = %line, "ignoring unrecognized line"),
            }
        }
        Ok(())
    }

    /// Executes one command.
    ///
    /// Only failures writing to `out` are returned. A document that cannot
    /// be written is logged and skipped, so the session keeps going.
    pub fn execute<W: Write>(&self, command: &Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::ListMovies => {
                for name in self.catalog.movie_names() {
                    writeln!(out, "{name}")?;
                }
            }
            Command::Schedule(movie_name) => {
                let Some(week) = self.catalog.weekly_schedule(&self.planner, movie_name) else {
                    debug!(movie = %movie_name, "unknown movie, nothing to render");
                    return Ok(());
                };

                out.write_all(render::render_week(&week).as_bytes())?;
                out.flush()?;

                let path = self.document_path(movie_name);
                if let Err(err) = write_document(&path, &render::render_document(&week)) {
                    warn!(
                        movie = %movie_name,
                        path = %path.display(),
                        error = %err,
                        "could not write schedule document"
                    );
                    return Ok(());
                }
                info!(
                    movie = %movie_name,
                    showings = week.showing_count(),
                    path = %path.display(),
                    "wrote schedule document"
                );
            }
        }
        Ok(())
    }
}

fn write_document(path: &Path, html: &str) -> io::Result<()> {
    fs::write(path, html)
}
