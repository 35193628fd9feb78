//! Read-only showing catalog.
//!
//! Holds every ingested showing. Loaded once, then queried by the command
//! session; it is never mutated after construction.

use crate::models::{ShowingRecord, WeeklySchedule};
use crate::scheduler::WeeklyPlanner;

/// The ingested showing records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ShowingRecord>,
}

impl Catalog {
    /// Creates a catalog from records.
    pub fn new(records: Vec<ShowingRecord>) -> Self {
        Self { records }
    }

    /// All records, in input order.
    pub fn records(&self) -> &[ShowingRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct movie names, ascending.
    pub fn movie_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.movie_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Whether any record has exactly this movie name.
    pub fn contains_movie(&self, movie_name: &str) -> bool {
        self.records.iter().any(|r| r.movie_name == movie_name)
    }

    /// Resolves the week of a movie, or `None` if the movie is unknown.
    pub fn weekly_schedule(&self, planner: &WeeklyPlanner, movie_name: &str) -> Option<WeeklySchedule> {
        self.contains_movie(movie_name)
            .then(|| planner.plan(&self.records, movie_name))
    }
}
