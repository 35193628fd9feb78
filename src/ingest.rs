//! Showing table ingestion.
//!
//! # Format
//!
//! A header row of comma-separated column names, then one comma-separated
//! row per showing. There is no quoting: a comma always separates fields.
//! Columns may appear in any order and extra columns are ignored, but
//! these must be present:
//!
//! `MovieName, CinemaName, Day, StartingTime, FinishingTime, Price`
//!
//! Trailing `\r` is stripped and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{ClockTime, Day, ParseDayError, ParseTimeError, ShowingRecord};

/// Required header columns.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "MovieName",
    "CinemaName",
    "Day",
    "StartingTime",
    "FinishingTime",
    "Price",
];

/// Errors raised while reading a showing table.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read showing table: {0}")]
    Io(#[from] std::io::Error),

    #[error("showing table has no header row")]
    MissingHeader,

    #[error("header is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("line {line}: expected {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    Day {
        line: usize,
        #[source]
        source: ParseDayError,
    },

    #[error("line {line}: {source}")]
    Time {
        line: usize,
        #[source]
        source: ParseTimeError,
    },
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    movie: usize,
    cinema: usize,
    day: usize,
    start: usize,
    finish: usize,
    price: usize,
    width: usize,
}

impl ColumnMap {
    fn from_header(line: &str) -> Result<Self, IngestError> {
        let names: Vec<&str> = line.split(',').map(str::trim).collect();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or(IngestError::MissingColumn(column))
        };

        Ok(Self {
            movie: find("MovieName")?,
            cinema: find("CinemaName")?,
            day: find("Day")?,
            start: find("StartingTime")?,
            finish: find("FinishingTime")?,
            price: find("Price")?,
            width: names.len(),
        })
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<ShowingRecord, IngestError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < self.width {
            return Err(IngestError::ShortRow {
                line: line_no,
                expected: self.width,
                found: fields.len(),
            });
        }

        let day: Day = fields[self.day]
            .trim()
            .parse()
            .map_err(|source| IngestError::Day { line: line_no, source })?;
        let time = |idx: usize| {
            fields[idx]
                .parse::<ClockTime>()
                .map_err(|source| IngestError::Time { line: line_no, source })
        };

        Ok(ShowingRecord::new(
            fields[self.movie],
            fields[self.cinema],
            day,
            time(self.start)?,
            time(self.finish)?,
        )
        .with_price(fields[self.price]))
    }
}

/// Reads every showing from a delimited table.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ShowingRecord>, IngestError> {
    let mut lines = reader.lines().enumerate();

    let columns = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                let line = line.trim_end_matches('\r');
                if !line.trim().is_empty() {
                    break ColumnMap::from_header(line)?;
                }
            }
            None => return Err(IngestError::MissingHeader),
        }
    };

    let mut records = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        records.push(columns.parse_row(idx + 1, line)?);
    }

    Ok(records)
}

/// Loads a showing table from disk into a [`Catalog`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, IngestError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_records(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "loaded showing table");
    Ok(Catalog::new(records))
}
