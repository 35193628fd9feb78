//! Absolutely positioned HTML timetable.
//!
//! # Pixel Model
//!
//! Independent of the text grid. Each half-hour is 50px wide and the
//! `08:00` origin sits at `left = 100px`. Day rows are 50px apart starting
//! at `top = 60px`.
//!
//! ```text
//! width = (slot(finish) - slot(start)) * 50
//! left  = (slot(start) - slot(08:00)) * 50 + 100
//! top   = 60 + day_index * 50
//! ```
//!
//! The document carries fixed axis labels and gridlines plus one box per
//! selected showing. Boxes show only the cinema name.

use crate::models::{ClockTime, Day, ShowingRecord, WeeklySchedule};

/// Pixels per half-hour.
pub const HALF_HOUR_PX: i32 = 50;
/// Left offset of the `08:00` origin.
pub const ORIGIN_LEFT_PX: i32 = 100;
/// Top offset of the first day row.
pub const ORIGIN_TOP_PX: i32 = 60;
/// Vertical distance between day rows.
pub const DAY_ROW_PX: i32 = 50;
/// Stylesheet referenced by every document.
pub const STYLESHEET: &str = "./style.css";

const TIME_LABELS: [&str; 9] = [
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00", "00:00",
];
const TIME_LABEL_STEP_PX: i32 = 200;
const GRIDLINE_COUNT: i32 = 17;
const GRIDLINE_STEP_PX: i32 = 100;

/// Position and size of a showing box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
}

/// Box width of a showing.
#[inline]
pub fn width(showing: &ShowingRecord) -> i32 {
    showing.duration_half_hours() * HALF_HOUR_PX
}

/// Box left offset of a showing.
#[inline]
pub fn left(showing: &ShowingRecord) -> i32 {
    showing.start_slot().since(ClockTime::DAY_START.slot()) * HALF_HOUR_PX + ORIGIN_LEFT_PX
}

/// Row top offset of a day.
#[inline]
pub fn top(day: Day) -> i32 {
    ORIGIN_TOP_PX + day.index() as i32 * DAY_ROW_PX
}

/// Full geometry of a showing, placed on the row of its own day.
pub fn geometry(showing: &ShowingRecord) -> BoxGeometry {
    BoxGeometry {
        left: left(showing),
        top: top(showing.day),
        width: width(showing),
    }
}

/// Renders the HTML document for a resolved week.
///
/// # Example
/// ```
/// use cinema_schedule::models::WeeklySchedule;
/// use cinema_schedule::render::layout;
///
/// let html = layout::render_document(&WeeklySchedule::new("Heat"));
/// assert!(html.starts_with("<html lang=\"en\">"));
/// assert!(html.contains("./style.css"));
/// ```
pub fn render_document(week: &WeeklySchedule) -> String {
    let mut html = String::new();
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("<title></title>\n");
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET}\" />\n"));
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    for (i, label) in TIME_LABELS.iter().enumerate() {
        let left = ORIGIN_LEFT_PX + i as i32 * TIME_LABEL_STEP_PX;
        html.push_str(&format!(
            "<div class=\"time-box\" style=\"left: {left}px;\"><p>{label}</p></div>\n"
        ));
    }

    for i in 0..GRIDLINE_COUNT {
        let left = ORIGIN_LEFT_PX + i * GRIDLINE_STEP_PX;
        html.push_str(&format!(
            "<div class=\"vertical-line\" style=\"left: {left}px;\"></div>\n"
        ));
    }

    for day in Day::WEEK {
        html.push_str(&format!(
            "<div class=\"day-box\" style=\"top: {}px;\">{}</div>\n",
            top(day),
            day
        ));
    }

    for (_, schedule) in week.iter() {
        for showing in schedule {
            html.push_str(&record_box(showing));
            html.push('\n');
        }
    }

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// One positioned showing box.
pub fn record_box(showing: &ShowingRecord) -> String {
    let g = geometry(showing);
    format!(
        "<div class=\"record-box\" style=\"width: {}px; left: {}px; top: {}px;\">{}</div>",
        g.width,
        g.left,
        g.top,
        escape_html(&showing.cinema_name)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(cinema: &str, day: Day, start: &str, finish: &str) -> ShowingRecord {
        ShowingRecord::new(
            "M",
            cinema,
            day,
            start.parse().unwrap(),
            finish.parse().unwrap(),
        )
    }

    #[test]
    fn test_geometry_at_origin() {
        let g = geometry(&make("Rex", Day::Saturday, "08:00", "10:00"));
        assert_eq!(g.left, 100);
        assert_eq!(g.top, 60);
        // four half-hours
        assert_eq!(g.width, 200);
    }

    #[test]
    fn test_geometry_late_showing() {
        let g = geometry(&make("Rex", Day::Friday, "22:00", "00:00"));
        assert_eq!(g.left, 1500);
        assert_eq!(g.top, 360);
        assert_eq!(g.width, 200);
    }

    #[test]
    fn test_left_matches_axis_labels() {
        // 10:00 label sits at 300px; a 10:00 showing starts there too.
        let s = make("Rex", Day::Monday, "10:00", "11:30");
        assert_eq!(left(&s), 300);
        assert_eq!(width(&s), 150);
        assert_eq!(top(Day::Monday), 160);
    }

    #[test]
    fn test_document_fixed_structure() {
        let html = render_document(&WeeklySchedule::new("M"));
        assert_eq!(html.matches("class=\"time-box\"").count(), 9);
        assert_eq!(html.matches("class=\"vertical-line\"").count(), 17);
        assert_eq!(html.matches("class=\"day-box\"").count(), 7);
        assert_eq!(html.matches("class=\"record-box\"").count(), 0);
        assert!(html.contains("style=\"left: 1700px;\"><p>00:00</p>"));
        assert!(html.contains("<div class=\"vertical-line\" style=\"left: 1700px;\"></div>"));
        assert!(html.contains("<div class=\"day-box\" style=\"top: 360px;\">Friday</div>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_document_boxes_per_showing() {
        let mut week = WeeklySchedule::new("M");
        week.set_day(
            Day::Saturday,
            vec![
                make("Rex", Day::Saturday, "08:00", "10:00"),
                make("Lux", Day::Saturday, "12:00", "14:00"),
            ]
            .into(),
        );
        week.set_day(
            Day::Tuesday,
            vec![make("Astra", Day::Tuesday, "18:00", "20:30")].into(),
        );

        let html = render_document(&week);
        assert_eq!(html.matches("class=\"record-box\"").count(), 3);
        assert!(html.contains(
            "<div class=\"record-box\" style=\"width: 200px; left: 100px; top: 60px;\">Rex</div>"
        ));
        assert!(html.contains(
            "<div class=\"record-box\" style=\"width: 250px; left: 1100px; top: 210px;\">Astra</div>"
        ));
        assert!(!html.contains(">M<"));
    }

    #[test]
    fn test_cinema_name_is_escaped() {
        let html = record_box(&make("Tom & <Jerry>", Day::Sunday, "10:00", "11:00"));
        assert!(html.contains(">Tom &amp; &lt;Jerry&gt;</div>"));
    }
}
