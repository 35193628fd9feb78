//! Character-grid timetable.
//!
//! Layout of a rendered week:
//!
//! ```text
//!           08:00               10:00  ...               00:00     <- hour header
//!           +-------------------+                                  <- boundary row
//! Saturday  |Rex                |                                  <- day row
//!           +-------------------+---------+                        <- boundary row
//! Sunday    |Lux                |Astra    |
//! ...
//! ```
//!
//! A boundary row marks the edges (`+`) and interiors (`-`) of every box
//! in the day rows directly above and below it. The row above Saturday
//! uses Saturday alone, and the row below Friday uses Friday alone.

use super::grid::{self, DAY_TITLE_WIDTH, ORIGIN_COLUMN, TOTAL_COLUMNS};
use crate::models::{ClockTime, Day, Schedule, WeeklySchedule};

/// Hour labels of the header row, one every two hours.
const HOUR_LABELS: [&str; 9] = [
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00", "00:00",
];

/// Renders the whole week, one line per row, each terminated by `\n`.
pub fn render_week(week: &WeeklySchedule) -> String {
    let mut out = String::new();
    push_line(&mut out, &hour_header());

    for (day, schedule) in week.iter() {
        push_line(&mut out, &boundary_row(schedule, week.previous_day(day)));
        push_line(&mut out, &day_row(day, schedule));
    }

    let last = week.day(Day::Friday);
    push_line(&mut out, &boundary_row(last, last));
    out
}

/// Header row with a label starting on the column of each labelled time.
pub fn hour_header() -> String {
    let mut row = " ".repeat(DAY_TITLE_WIDTH);
    let mut cursor = ORIGIN_COLUMN;
    for label in HOUR_LABELS {
        // Labels are valid times by construction.
        let col = label.parse::<ClockTime>().map(grid::column).unwrap_or(cursor);
        pad(&mut row, col - cursor);
        row.push_str(label);
        cursor = col + label.len() as i32;
    }
    row
}

/// Boundary row for the union of two resolved schedules.
///
/// Scans columns `1..TOTAL_COLUMNS`: `+` on any start or finish column,
/// `-` strictly inside a showing, blank otherwise. A trailing blank
/// completes the canvas width.
pub fn boundary_row(today: &Schedule, yesterday: &Schedule) -> String {
    let spans: Vec<(i32, i32)> = today.iter().chain(yesterday.iter()).map(grid::span).collect();

    let mut row = String::with_capacity(TOTAL_COLUMNS as usize);
    for col in 1..TOTAL_COLUMNS {
        let ch = if spans.iter().any(|&(s, f)| col == s || col == f) {
            '+'
        } else if spans.iter().any(|&(s, f)| col > s && col < f) {
            '-'
        } else {
            ' '
        };
        row.push(ch);
    }
    row.push(' ');
    row
}

/// Day row: the day name, then one box per showing.
///
/// A box opens with `|` on its start column (shared with the previous box
/// when they touch), holds the cinema name, and closes with `|` on its
/// finish column. A name longer than its box is printed whole and pushes
/// the rest of the row right; the cursor stays positional.
pub fn day_row(day: Day, schedule: &Schedule) -> String {
    let mut row = String::with_capacity(TOTAL_COLUMNS as usize);
    row.push_str(&format!("{:<width$}", day.name(), width = DAY_TITLE_WIDTH));

    let mut cursor = ORIGIN_COLUMN;
    for showing in schedule {
        let tile = grid::block_length(showing.starting_time, showing.finishing_time);
        let start = grid::column(showing.starting_time);

        pad(&mut row, start - cursor);
        if start + 1 != cursor {
            row.push('|');
        }

        let name = &showing.cinema_name;
        let name_len = name.chars().count() as i32;
        row.push_str(name);
        pad(&mut row, tile - name_len);
        row.push('|');

        cursor = start + tile + 2;
    }

    pad(&mut row, TOTAL_COLUMNS - cursor + 1);
    row
}

fn pad(row: &mut String, count: i32) {
    if count > 0 {
        row.extend(std::iter::repeat(' ').take(count as usize));
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowingRecord;

    fn make(cinema: &str, day: Day, start: &str, finish: &str) -> ShowingRecord {
        ShowingRecord::new(
            "M",
            cinema,
            day,
            start.parse().unwrap(),
            finish.parse().unwrap(),
        )
    }

    fn width(s: &str) -> usize {
        s.chars().count()
    }

    /// Character at a 1-based column.
    fn at(row: &str, col: i32) -> char {
        row.chars().nth((col - 1) as usize).unwrap()
    }

    #[test]
    fn test_hour_header_alignment() {
        let header = hour_header();
        assert_eq!(width(&header), TOTAL_COLUMNS as usize);
        assert!(header.starts_with("          08:00               10:00"));
        assert!(header.ends_with("               00:00"));
        assert_eq!(&header[30..35], "10:00");
        assert_eq!(&header[170..175], "00:00");
    }

    #[test]
    fn test_empty_day_row() {
        let row = day_row(Day::Wednesday, &Schedule::new());
        assert_eq!(width(&row), TOTAL_COLUMNS as usize);
        assert!(row.starts_with("Wednesday "));
        assert!(row[10..].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_single_box() {
        let schedule = Schedule::from(vec![make("Rex", Day::Monday, "10:00", "12:00")]);
        let row = day_row(Day::Monday, &schedule);

        assert_eq!(width(&row), TOTAL_COLUMNS as usize);
        assert_eq!(at(&row, 31), '|');
        assert_eq!(&row[31..34], "Rex");
        assert_eq!(at(&row, 51), '|');
        assert_eq!(at(&row, 52), ' ');
    }

    #[test]
    fn test_adjacent_boxes_share_border() {
        let schedule = Schedule::from(vec![
            make("A", Day::Monday, "10:00", "11:00"),
            make("B", Day::Monday, "11:00", "12:00"),
        ]);
        let row = day_row(Day::Monday, &schedule);

        assert_eq!(width(&row), TOTAL_COLUMNS as usize);
        assert_eq!(&row[30..51], "|A        |B        |");
    }

    #[test]
    fn test_long_name_is_printed_whole() {
        let schedule = Schedule::from(vec![
            make("CinemaParadiso", Day::Monday, "10:00", "11:00"),
            make("Rex", Day::Monday, "12:00", "13:00"),
        ]);
        let row = day_row(Day::Monday, &schedule);

        assert_eq!(&row[30..46], "|CinemaParadiso|");
        // later boxes keep their positional offsets, shifted by the overflow
        assert_eq!(&row[55..60], "|Rex ");
        assert_eq!(width(&row), TOTAL_COLUMNS as usize + 5);
    }

    #[test]
    fn test_midnight_box_fits_canvas() {
        let schedule = Schedule::from(vec![make("Late", Day::Friday, "22:00", "00:00")]);
        let row = day_row(Day::Friday, &schedule);
        assert_eq!(width(&row), TOTAL_COLUMNS as usize);
        assert_eq!(at(&row, 151), '|');
        assert_eq!(at(&row, 171), '|');
    }

    #[test]
    fn test_boundary_row_marks() {
        let today = Schedule::from(vec![make("A", Day::Monday, "10:00", "11:00")]);
        let yesterday = Schedule::from(vec![make("B", Day::Sunday, "10:30", "12:00")]);
        let row = boundary_row(&today, &yesterday);

        assert_eq!(width(&row), TOTAL_COLUMNS as usize);
        assert_eq!(at(&row, 30), ' ');
        assert_eq!(at(&row, 31), '+');
        assert_eq!(at(&row, 32), '-');
        assert_eq!(at(&row, 36), '+');
        assert_eq!(at(&row, 41), '+');
        assert_eq!(at(&row, 45), '-');
        assert_eq!(at(&row, 51), '+');
        assert_eq!(at(&row, 52), ' ');
        assert_eq!(at(&row, 175), ' ');
    }

    #[test]
    fn test_empty_boundary_row() {
        let row = boundary_row(&Schedule::new(), &Schedule::new());
        assert_eq!(row, " ".repeat(TOTAL_COLUMNS as usize));
    }

    #[test]
    fn test_render_week_shape() {
        let mut week = WeeklySchedule::new("M");
        week.set_day(
            Day::Saturday,
            vec![make("Rex", Day::Saturday, "08:00", "10:00")].into(),
        );
        week.set_day(
            Day::Friday,
            vec![make("Lux", Day::Friday, "20:00", "22:00")].into(),
        );

        let out = render_week(&week);
        let lines: Vec<&str> = out.lines().collect();

        // header + 7 * (boundary + day) + closing boundary
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| width(l) == TOTAL_COLUMNS as usize));
        assert!(out.ends_with('\n'));

        // Saturday compares against itself above its row
        assert_eq!(at(lines[1], 11), '+');
        assert_eq!(at(lines[1], 31), '+');
        assert!(lines[2].starts_with("Saturday  |Rex"));
        // Sunday boundary still shows Saturday's box
        assert_eq!(at(lines[3], 11), '+');
        // Monday boundary sees neither
        assert_eq!(lines[5].trim(), "");
        // closing boundary shows Friday's box
        assert_eq!(at(lines[15], 131), '+');
        assert_eq!(at(lines[15], 151), '+');
        assert_eq!(at(lines[15], 140), '-');
    }
}
