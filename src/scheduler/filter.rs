//! Schedule filter: one movie, one day.

use crate::models::{Day, ShowingRecord};

/// Collects the showings of `movie_name` on `day`, in input order.
///
/// Movie names match exactly (case-sensitive).
pub fn showings_of_day(records: &[ShowingRecord], movie_name: &str, day: Day) -> Vec<ShowingRecord> {
    records
        .iter()
        .filter(|r| r.movie_name == movie_name && r.day == day)
        .cloned()
        .collect()
}
