//! Ordering policy for candidate showings.
//!
//! Candidates are ordered by a chain of sort keys evaluated sequentially:
//! the next key is consulted only on ties. The chain can also be built
//! from a list of successive stable sort passes, where the *last* pass
//! dominates; [`OrderingPolicy::from_stable_passes`] reverses the passes
//! into the equivalent key chain.
//!
//! # Text comparison
//! Every key compares source text order. Prices are never parsed, so
//! `"10"` sorts before `"9"`. Starting times compare as `HH:MM` text,
//! which agrees with time order for every valid starting time.

use std::cmp::Ordering;

use crate::models::ShowingRecord;

/// A single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Cinema name, lexicographic.
    CinemaName,
    /// Price text, lexicographic.
    Price,
    /// Starting time, `HH:MM` text order.
    StartingTime,
}

impl SortKey {
    /// Key name.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::CinemaName => "CinemaName",
            SortKey::Price => "Price",
            SortKey::StartingTime => "StartingTime",
        }
    }

    /// Compares two showings on this key alone.
    pub fn compare(&self, a: &ShowingRecord, b: &ShowingRecord) -> Ordering {
        match self {
            SortKey::CinemaName => a.cinema_name.cmp(&b.cinema_name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::StartingTime => a.starting_time.cmp(&b.starting_time),
        }
    }
}

/// A sequential multi-key ordering.
///
/// # Example
/// ```
/// use cinema_schedule::scheduler::{OrderingPolicy, SortKey};
///
/// let policy = OrderingPolicy::from_stable_passes(&[
///     SortKey::CinemaName,
///     SortKey::Price,
///     SortKey::StartingTime,
/// ]);
/// assert_eq!(policy, OrderingPolicy::default());
/// assert_eq!(policy.keys()[0], SortKey::StartingTime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPolicy {
    keys: Vec<SortKey>,
}

impl OrderingPolicy {
    /// Creates an empty policy (keeps input order).
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Appends a key; earlier keys take precedence.
    pub fn with_key(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Builds the key chain equivalent to applying `passes` as successive
    /// stable sorts, first to last.
    pub fn from_stable_passes(passes: &[SortKey]) -> Self {
        Self {
            keys: passes.iter().rev().copied().collect(),
        }
    }

    /// Keys in precedence order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Compares two showings key by key.
    pub fn compare(&self, a: &ShowingRecord, b: &ShowingRecord) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable-sorts showings in place.
    pub fn sort(&self, showings: &mut [ShowingRecord]) {
        showings.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for OrderingPolicy {
    /// Starting time, then price, then cinema name.
    fn default() -> Self {
        Self::new()
            .with_key(SortKey::StartingTime)
            .with_key(SortKey::Price)
            .with_key(SortKey::CinemaName)
    }
}
