//! Weekly planner.
//!
//! Runs the schedule filter and conflict resolver once per day of the week
//! for one movie. The resulting [`WeeklySchedule`] feeds both renderers, so
//! conflict resolution happens exactly once per query.

use tracing::debug;

use super::{filter, ConflictResolver};
use crate::models::{Day, ShowingRecord, WeeklySchedule};

/// Builds the resolved week of one movie.
#[derive(Debug, Clone, Default)]
pub struct WeeklyPlanner {
    resolver: ConflictResolver,
}

impl WeeklyPlanner {
    /// Creates a planner with the default resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the resolver.
    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resolves each day of the week for `movie_name`.
    ///
    /// Days without showings stay empty.
    pub fn plan(&self, records: &[ShowingRecord], movie_name: &str) -> WeeklySchedule {
        let mut week = WeeklySchedule::new(movie_name);

        for day in Day::WEEK {
            let candidates = filter::showings_of_day(records, movie_name, day);
            let candidate_count = candidates.len();
            let resolved = self.resolver.resolve(candidates);
            debug!(
                movie = movie_name,
                %day,
                candidates = candidate_count,
                selected = resolved.len(),
                "resolved day"
            );
            week.set_day(day, resolved);
        }

        week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(cinema: &str, day: Day, start: &str, finish: &str, price: &str) -> ShowingRecord {
        ShowingRecord::new(
            "M",
            cinema,
            day,
            start.parse().unwrap(),
            finish.parse().unwrap(),
        )
        .with_price(price)
    }

    #[test]
    fn test_plan_resolves_each_day() {
        let records = vec![
            make("CinemaA", Day::Monday, "10:00", "12:00", "8"),
            make("CinemaB", Day::Monday, "11:00", "13:00", "9"),
            make("CinemaC", Day::Friday, "20:00", "22:00", "8"),
        ];
        let week = WeeklyPlanner::new().plan(&records, "M");

        assert_eq!(week.movie_name, "M");
        assert_eq!(week.day(Day::Monday).len(), 1);
        assert_eq!(week.day(Day::Monday).showings[0].cinema_name, "CinemaA");
        assert_eq!(week.day(Day::Friday).len(), 1);
        assert!(week.day(Day::Saturday).is_empty());
        assert_eq!(week.showing_count(), 2);
    }

    #[test]
    fn test_plan_ignores_other_movies() {
        let mut other = make("X", Day::Monday, "10:00", "12:00", "8");
        other.movie_name = "Other".into();
        let week = WeeklyPlanner::new().plan(&[other], "M");
        assert_eq!(week.showing_count(), 0);
    }
}
