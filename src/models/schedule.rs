//! Resolved schedule models.
//!
//! A [`Schedule`] holds the showings of one movie on one day. After
//! conflict resolution it is chronologically ordered and free of
//! interference. A [`WeeklySchedule`] bundles the seven resolved days of
//! one movie and is the single input of both renderers.

use serde::{Deserialize, Serialize};

use super::{Day, ShowingRecord};

/// The showings of one movie on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Showings, in chronological order once resolved.
    pub showings: Vec<ShowingRecord>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the schedule has no showings.
    pub fn is_empty(&self) -> bool {
        self.showings.is_empty()
    }

    /// Number of showings.
    pub fn len(&self) -> usize {
        self.showings.len()
    }

    /// Iterates showings in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShowingRecord> {
        self.showings.iter()
    }
}

impl From<Vec<ShowingRecord>> for Schedule {
    fn from(showings: Vec<ShowingRecord>) -> Self {
        Self { showings }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ShowingRecord;
    type IntoIter = std::slice::Iter<'a, ShowingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.showings.iter()
    }
}

/// The seven resolved day schedules of one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Movie title.
    pub movie_name: String,
    /// Resolved schedules indexed by [`Day::index`].
    pub days: [Schedule; 7],
}

impl WeeklySchedule {
    /// Creates a weekly schedule with seven empty days.
    pub fn new(movie_name: impl Into<String>) -> Self {
        Self {
            movie_name: movie_name.into(),
            days: Default::default(),
        }
    }

    /// Resolved schedule of a day.
    #[inline]
    pub fn day(&self, day: Day) -> &Schedule {
        &self.days[day.index()]
    }

    /// Replaces the schedule of a day.
    pub fn set_day(&mut self, day: Day, schedule: Schedule) {
        self.days[day.index()] = schedule;
    }

    /// The schedule drawn above `day` in the timetable.
    ///
    /// The week does not wrap into an earlier week: the first day is
    /// compared against itself.
    pub fn previous_day(&self, day: Day) -> &Schedule {
        match day.index() {
            0 => self.day(day),
            i => &self.days[i - 1],
        }
    }

    /// Iterates `(day, schedule)` in timetable order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &Schedule)> {
        Day::WEEK.into_iter().zip(self.days.iter())
    }

    /// Total number of selected showings across the week.
    pub fn showing_count(&self) -> usize {
        self.days.iter().map(Schedule::len).sum()
    }
}
