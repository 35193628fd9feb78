//! Day-of-week model.
//!
//! The timetable week starts on Saturday and ends on Friday. The order is
//! fixed: it drives both the row order of the rendered timetable and the
//! vertical position of each day in the HTML layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the timetable week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Error returned when a day name is not one of the seven known names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day name: {0:?}")]
pub struct ParseDayError(pub String);

impl Day {
    /// All days in timetable order (Saturday first).
    pub const WEEK: [Day; 7] = [
        Day::Saturday,
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// 0-based position in the timetable week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name, as it appears in the input table.
    pub fn name(self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    /// Exact, case-sensitive match on the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::WEEK
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}
