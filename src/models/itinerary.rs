//! Itinerary (scheduling result) model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Event;

/// Result of one scheduling pass.
///
/// `event_ids` is in selection order, which is not necessarily time order
/// once a displacement has happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Number of selected events.
    pub max_events: usize,
    /// Selected event IDs in selection order.
    pub event_ids: Vec<i64>,
    /// Sum of the selected events' priorities.
    pub total_value: i64,
}

impl Itinerary {
    /// Builds the result from the selected events.
    pub fn from_selection(selection: &[&Event]) -> Self {
        Self {
            max_events: selection.len(),
            event_ids: selection.iter().map(|e| e.id).collect(),
            total_value: selection.iter().map(|e| i64::from(e.priority)).sum(),
        }
    }

    /// Whether no event was selected.
    pub fn is_empty(&self) -> bool {
        self.event_ids.is_empty()
    }

    /// Whether the event with `id` was selected.
    pub fn contains(&self, id: i64) -> bool {
        self.event_ids.contains(&id)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.event_ids.iter().map(|id| id.to_string()).collect();
        writeln!(f, "Maximum attendable events: {}", self.max_events)?;
        writeln!(f, "Attendable event IDs: {}", ids.join(", "))?;
        write!(f, "Total value: {}", self.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection() {
        let a = Event::new(1, 600, 720, "A").with_priority(50);
        let b = Event::new(6, 780, 840, "D").with_priority(80);
        let it = Itinerary::from_selection(&[&a, &b]);
        assert_eq!(it.max_events, 2);
        assert_eq!(it.event_ids, vec![1, 6]);
        assert_eq!(it.total_value, 130);
        assert!(it.contains(6));
        assert!(!it.contains(2));
    }

    #[test]
    fn test_empty() {
        let it = Itinerary::from_selection(&[]);
        assert!(it.is_empty());
        assert_eq!(it, Itinerary::default());
    }

    #[test]
    fn test_display() {
        let it = Itinerary {
            max_events: 3,
            event_ids: vec![1, 6, 4],
            total_value: 200,
        };
        let text = it.to_string();
        assert!(text.contains("Maximum attendable events: 3"));
        assert!(text.contains("Attendable event IDs: 1, 6, 4"));
        assert!(text.ends_with("Total value: 200"));
    }
}
