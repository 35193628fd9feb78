//! Character-grid coordinates.
//!
//! The text canvas is [`TOTAL_COLUMNS`] wide. Columns are 1-based: the day
//! label takes columns 1..=10, column 11 is `08:00`, and each half-hour
//! after that advances by [`HALF_HOUR_COLUMNS`]. `00:00` (end-of-day)
//! lands on column 171.

use crate::models::{ClockTime, ShowingRecord};

/// Width reserved for the day label.
pub const DAY_TITLE_WIDTH: usize = 10;
/// Columns per half-hour.
pub const HALF_HOUR_COLUMNS: i32 = 5;
/// Total canvas width.
pub const TOTAL_COLUMNS: i32 = 175;
/// Column of the first visible time (`08:00`).
pub const ORIGIN_COLUMN: i32 = DAY_TITLE_WIDTH as i32 + 1;

/// Canvas column of a time.
#[inline]
pub fn column(time: ClockTime) -> i32 {
    ORIGIN_COLUMN + time.slot().since(ClockTime::DAY_START.slot()) * HALF_HOUR_COLUMNS
}

/// Inner width of a showing box: its span minus one border column.
#[inline]
pub fn block_length(start: ClockTime, finish: ClockTime) -> i32 {
    finish.slot().since(start.slot()) * HALF_HOUR_COLUMNS - 1
}

/// Start and finish columns of a showing.
#[inline]
pub fn span(showing: &ShowingRecord) -> (i32, i32) {
    (column(showing.starting_time), column(showing.finishing_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_column_anchors() {
        assert_eq!(column(t("08:00")), 11);
        assert_eq!(column(t("08:30")), 16);
        assert_eq!(column(t("10:00")), 31);
        assert_eq!(column(t("00:00")), 171);
        assert!(column(t("00:00")) < TOTAL_COLUMNS);
    }

    #[test]
    fn test_column_monotonic() {
        let mut times: Vec<ClockTime> = (16..48)
            .map(|s| ClockTime::new((s / 2) as u8, ((s % 2) * 30) as u8).unwrap())
            .collect();
        times.push(ClockTime::MIDNIGHT);

        for pair in times.windows(2) {
            assert!(column(pair[0]) < column(pair[1]));
        }
    }

    #[test]
    fn test_block_length() {
        assert_eq!(block_length(t("10:00"), t("12:00")), 19);
        assert_eq!(block_length(t("10:00"), t("10:30")), 4);
        assert_eq!(block_length(t("22:00"), t("00:00")), 19);
    }

    #[test]
    fn test_box_closes_on_finish_column() {
        let (start, finish) = (t("13:30"), t("15:00"));
        assert_eq!(column(start) + block_length(start, finish) + 1, column(finish));
    }
}
