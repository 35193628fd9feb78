//! Showing record model.
//!
//! A showing is one screening of a movie at a cinema on a given day,
//! within a `[starting_time, finishing_time)` window.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Day, Slot};

/// One scheduled screening.
///
/// # Price
/// `price` is kept as the source text. It is only ever used as a sort
/// tie-breaker and is compared lexicographically, so `"10" < "9"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowingRecord {
    /// Movie title.
    pub movie_name: String,
    /// Cinema the showing takes place in.
    pub cinema_name: String,
    /// Day of the week.
    pub day: Day,
    /// Start of the showing.
    pub starting_time: ClockTime,
    /// End of the showing. `00:00` means end-of-day.
    pub finishing_time: ClockTime,
    /// Ticket price, as text.
    pub price: String,
}

impl ShowingRecord {
    /// Creates a showing with an empty price.
    pub fn new(
        movie_name: impl Into<String>,
        cinema_name: impl Into<String>,
        day: Day,
        starting_time: ClockTime,
        finishing_time: ClockTime,
    ) -> Self {
        Self {
            movie_name: movie_name.into(),
            cinema_name: cinema_name.into(),
            day,
            starting_time,
            finishing_time,
            price: String::new(),
        }
    }

    /// Sets the price text.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Slot of the starting time.
    #[inline]
    pub fn start_slot(&self) -> Slot {
        self.starting_time.slot()
    }

    /// Slot of the finishing time.
    #[inline]
    pub fn finish_slot(&self) -> Slot {
        self.finishing_time.slot()
    }

    /// Duration in half-hours. Negative for inverted windows.
    #[inline]
    pub fn duration_half_hours(&self) -> i32 {
        self.finish_slot().since(self.start_slot())
    }
}
