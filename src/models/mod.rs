//! Showing domain models.
//!
//! Provides the core data types: the fixed timetable week, times of day
//! with their half-hour slots, showing records, and resolved schedules.
//!
//! # Domain Mappings
//!
//! | cinema-schedule | Input table column |
//! |-----------------|--------------------|
//! | `ShowingRecord::movie_name` | `MovieName` |
//! | `ShowingRecord::cinema_name` | `CinemaName` |
//! | `ShowingRecord::day` | `Day` |
//! | `ShowingRecord::starting_time` | `StartingTime` |
//! | `ShowingRecord::finishing_time` | `FinishingTime` |
//! | `ShowingRecord::price` | `Price` |

mod day;
mod schedule;
mod showing;
mod time;

pub use day::{Day, ParseDayError};
pub use schedule::{Schedule, WeeklySchedule};
pub use showing::ShowingRecord;
pub use time::{ClockTime, ParseTimeError, Slot};
