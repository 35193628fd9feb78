//! Greedy conflict resolver.
//!
//! # Algorithm
//!
//! 1. Order candidates by the [`OrderingPolicy`] (starting time, then
//!    price text, then cinema name).
//! 2. Keep the first candidate.
//! 3. Walk the rest in order; keep a candidate only if it does not
//!    [interfere](interferes) with the most recently kept showing.
//!
//! The result is chronologically ordered and no adjacent pair interferes.
//! Every dropped candidate interferes with the showing that was last kept
//! when it was visited.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::trace;

use super::OrderingPolicy;
use crate::models::{Schedule, ShowingRecord};

/// Whether `candidate` interferes with the already kept showing `kept`.
///
/// Holds when either:
/// - `candidate` starts strictly inside `kept`
///   (`kept.start < candidate.start < kept.finish`), or
/// - both cover exactly the same window.
///
/// This is not a general interval intersection: a candidate with the
/// same start but a different finish does not interfere, and neither does
/// one that starts exactly when `kept` finishes. Times compare in slot
/// order, so a `00:00` finish lies after every other time.
pub fn interferes(kept: &ShowingRecord, candidate: &ShowingRecord) -> bool {
    let (kept_start, kept_finish) = (kept.start_slot(), kept.finish_slot());
    let (cand_start, cand_finish) = (candidate.start_slot(), candidate.finish_slot());

    if kept_start < cand_start && kept_finish > cand_start {
        return true;
    }
    kept_start == cand_start && kept_finish == cand_finish
}

/// Selects a non-interfering subset of one day's showings.
///
/// # Example
/// ```
/// use cinema_schedule::models::{Day, ShowingRecord};
/// use cinema_schedule::scheduler::ConflictResolver;
///
/// let a = ShowingRecord::new("M", "CinemaA", Day::Monday,
///     "10:00".parse().unwrap(), "12:00".parse().unwrap()).with_price("8");
/// let b = ShowingRecord::new("M", "CinemaB", Day::Monday,
///     "11:00".parse().unwrap(), "13:00".parse().unwrap()).with_price("9");
///
/// let resolved = ConflictResolver::new().resolve(vec![b, a]);
/// assert_eq!(resolved.len(), 1);
/// assert_eq!(resolved.showings[0].cinema_name, "CinemaA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    policy: OrderingPolicy,
}

impl ConflictResolver {
    /// Creates a resolver with the default ordering policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ordering policy.
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The ordering policy in use.
    pub fn policy(&self) -> &OrderingPolicy {
        &self.policy
    }

    /// Resolves candidates into a chronologically ordered schedule.
    ///
    /// Empty input yields an empty schedule.
    pub fn resolve(&self, mut candidates: Vec<ShowingRecord>) -> Schedule {
        self.policy.sort(&mut candidates);

        let mut chosen: Vec<ShowingRecord> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Some(last) = chosen.last().filter(|last| interferes(last, &candidate)) {
                trace!(
                    cinema = %candidate.cinema_name,
                    start = %candidate.starting_time,
                    blocked_by = %last.cinema_name,
                    "dropping interfering showing"
                );
                continue;
            }
            chosen.push(candidate);
        }

        Schedule::from(chosen)
    }
}
