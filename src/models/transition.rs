//! Location transitions and the travel-time table.
//!
//! A [`LocationTransition`] is an undirected travel cost between two
//! locations. [`TransitionTable`] indexes a list of them by the ordered
//! `(from, to)` pair, storing both directions.
//!
//! Absence of an entry means the locations are not connected: travel between
//! them is impossible, not free.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Undirected travel cost between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTransition {
    /// One endpoint.
    pub from: String,
    /// Other endpoint.
    pub to: String,
    /// Travel time in minutes.
    pub duration_min: i64,
}

impl LocationTransition {
    /// Creates a transition between `from` and `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>, duration_min: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration_min,
        }
    }
}

/// Symmetric location-to-location travel-time lookup.
///
/// Maps (from, to) → minutes. Built once from a transition list and
/// immutable afterwards.
///
/// # Example
///
/// ```
/// use u_itinerary::models::{LocationTransition, TransitionTable};
///
/// let table = TransitionTable::from_transitions(&[LocationTransition::new("A", "D", 10)]);
/// assert_eq!(table.lookup("A", "D"), Some(10));
/// assert_eq!(table.lookup("D", "A"), Some(10));
/// assert_eq!(table.lookup("A", "B"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    routes: HashMap<(String, String), i64>,
}

impl TransitionTable {
    /// Creates an empty table (no location is reachable from any other).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a transition list.
    ///
    /// Both directions are inserted for every transition. A later transition
    /// for the same pair overwrites an earlier one.
    pub fn from_transitions(transitions: &[LocationTransition]) -> Self {
        let mut table = Self::new();
        for t in transitions {
            table.insert(&t.from, &t.to, t.duration_min);
        }
        table
    }

    fn insert(&mut self, from: &str, to: &str, duration_min: i64) {
        self.routes
            .insert((from.to_string(), to.to_string()), duration_min);
        self.routes
            .insert((to.to_string(), from.to_string()), duration_min);
    }

    /// Travel time from `from` to `to`, or `None` if no route is known.
    pub fn lookup(&self, from: &str, to: &str) -> Option<i64> {
        self.routes.get(&(from.to_string(), to.to_string())).copied()
    }

    /// Whether `location` appears as an endpoint of any transition.
    pub fn contains_location(&self, location: &str) -> bool {
        self.routes.keys().any(|(from, _)| from == location)
    }

    /// Number of stored directed routes (twice the distinct pairs).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LocationTransition> {
        vec![
            LocationTransition::new("A", "B", 15),
            LocationTransition::new("A", "C", 20),
            LocationTransition::new("B", "C", 5),
        ]
    }

    #[test]
    fn test_symmetric_lookup() {
        let table = TransitionTable::from_transitions(&sample());
        for t in sample() {
            assert_eq!(table.lookup(&t.from, &t.to), Some(t.duration_min));
            assert_eq!(table.lookup(&t.to, &t.from), Some(t.duration_min));
        }
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_missing_route_is_none() {
        let table = TransitionTable::from_transitions(&sample());
        assert_eq!(table.lookup("A", "Z"), None);
        assert_eq!(table.lookup("Z", "A"), None);
        // Self-transitions are not implied
        assert_eq!(table.lookup("A", "A"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let table = TransitionTable::from_transitions(&[
            LocationTransition::new("A", "B", 15),
            LocationTransition::new("B", "A", 40),
        ]);
        assert_eq!(table.lookup("A", "B"), Some(40));
        assert_eq!(table.lookup("B", "A"), Some(40));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_zero_duration_is_a_route() {
        let table = TransitionTable::from_transitions(&[LocationTransition::new("A", "B", 0)]);
        assert_eq!(table.lookup("A", "B"), Some(0));
    }

    #[test]
    fn test_contains_location() {
        let table = TransitionTable::from_transitions(&sample());
        assert!(table.contains_location("C"));
        assert!(!table.contains_location("D"));
        assert!(TransitionTable::new().is_empty());
    }
}
