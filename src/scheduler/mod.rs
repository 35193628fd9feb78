//! Showing selection: filter, ordering policy, greedy conflict resolution.
//!
//! # Algorithm
//!
//! For one movie and one day, the candidate showings are ordered by
//! starting time (ties broken by price text, then cinema name) and walked
//! once, keeping each showing that does not interfere with the one kept
//! just before it. The weekly planner repeats this for the seven days.
//!
//! # Determinism
//!
//! Sorting is stable and every key is a total order, so the same input
//! always yields the same selection.

pub mod filter;
mod ordering;
mod resolver;
mod weekly;

pub use ordering::{OrderingPolicy, SortKey};
pub use resolver::{interferes, ConflictResolver};
pub use weekly::WeeklyPlanner;
