//! Time-of-day and half-hour slot model.
//!
//! # Time Model
//! Showing times are `HH:MM`, 24-hour. For arithmetic and overlap checks
//! they are mapped onto a half-hour index ([`Slot`]):
//!
//! ```text
//! slot = hour * 2 + minute / 30
//! ```
//!
//! `00:00` is end-of-day, not start-of-day: it maps to slot 48 (24 hours),
//! the largest slot. The visible timetable runs `08:00 … 23:30, 00:00`
//! and slots increase strictly across that range.
//!
//! # Two orders
//! [`ClockTime`] itself orders like its zero-padded text (`"00:00"` first).
//! That order is what the resolver sorts on. Slot order, where `"00:00"` is
//! last, is what interference and geometry use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slot of `00:00` read as end-of-day.
const END_OF_DAY_SLOT: u32 = 48;

/// A time-of-day, `HH:MM` 24-hour.
///
/// The derived ordering compares `(hour, minute)`, which is exactly the
/// lexicographic order of the `HH:MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

/// Error returned for text that is not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day {0:?}, expected HH:MM")]
pub struct ParseTimeError(pub String);

/// Half-hour index of a time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u32);

impl ClockTime {
    /// First time shown on the timetable.
    pub const DAY_START: ClockTime = ClockTime { hour: 8, minute: 0 };
    /// End-of-day marker.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Creates a time, returning `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Whether this time is the `00:00` end-of-day marker.
    #[inline]
    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// Half-hour slot of this time. `00:00` maps to end-of-day.
    pub fn slot(&self) -> Slot {
        if self.is_midnight() {
            return Slot(END_OF_DAY_SLOT);
        }
        Slot(u32::from(self.hour) * 2 + u32::from(self.minute) / 30)
    }

    /// Whether the minute falls on a half-hour boundary.
    #[inline]
    pub fn on_half_hour(&self) -> bool {
        self.minute == 0 || self.minute == 30
    }
}

impl Slot {
    /// Slot index in half-hours.
    #[inline]
    pub fn half_hours(self) -> u32 {
        self.0
    }

    /// Slot expressed in hours (`23:30` → 23.5, `00:00` → 24.0).
    #[inline]
    pub fn hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Signed number of half-hours from `origin` to `self`.
    #[inline]
    pub fn since(self, origin: Slot) -> i32 {
        self.0 as i32 - origin.0 as i32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u8 = hour.parse().map_err(|_| err())?;
        let minute: u8 = minute.parse().map_err(|_| err())?;
        ClockTime::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
