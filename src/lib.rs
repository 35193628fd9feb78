//! Weekly cinema showing planner.
//!
//! Reads a table of showings (movie, cinema, day, time window, price) and,
//! for one movie, selects a non-overlapping set of showings per day and
//! renders the week as a character-grid timetable and an HTML layout.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `ClockTime`, `Slot`,
//!   `ShowingRecord`, `Schedule`, `WeeklySchedule`
//! - **`scheduler`**: Filtering, ordering policy, greedy conflict
//!   resolution, weekly planning
//! - **`render`**: Text-grid and HTML renderers
//! - **`ingest`**: Delimited showing-table reader
//! - **`catalog`**: Read-only record set
//! - **`command`**: Line command session (`GET ALL MOVIES`, `GET SCHEDULE`)
//! - **`validation`**: Advisory record checks
//!
//! # Example
//!
//! ```
//! use cinema_schedule::catalog::Catalog;
//! use cinema_schedule::models::{Day, ShowingRecord};
//! use cinema_schedule::render;
//! use cinema_schedule::scheduler::WeeklyPlanner;
//!
//! let catalog = Catalog::new(vec![
//!     ShowingRecord::new("M", "CinemaA", Day::Monday,
//!         "10:00".parse().unwrap(), "12:00".parse().unwrap()).with_price("8"),
//!     ShowingRecord::new("M", "CinemaB", Day::Monday,
//!         "11:00".parse().unwrap(), "13:00".parse().unwrap()).with_price("9"),
//! ]);
//!
//! let week = catalog.weekly_schedule(&WeeklyPlanner::new(), "M").unwrap();
//! assert_eq!(week.day(Day::Monday).len(), 1);
//!
//! let text = render::render_week(&week);
//! assert!(text.contains("|CinemaA"));
//! ```

pub mod catalog;
pub mod command;
pub mod ingest;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
