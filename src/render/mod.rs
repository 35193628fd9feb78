//! Timetable renderers.
//!
//! Both renderers are stateless functions of a resolved
//! [`WeeklySchedule`](crate::models::WeeklySchedule):
//!
//! - **`text`**: a fixed-width character grid (175 columns) for the
//!   terminal, built on the column mapping in **`grid`**.
//! - **`layout`**: an HTML document with absolutely positioned boxes.

pub mod grid;
pub mod layout;
pub mod text;

pub use layout::render_document;
pub use text::render_week;
