//! Event model.
//!
//! An event is a candidate activity with a fixed time window, a location and
//! a priority weight. Events are owned by the caller and read-only to the
//! scheduler.

use serde::{Deserialize, Serialize};

/// A time-boxed event that may be attended.
///
/// # Time Representation
/// `start_min` and `end_min` are minute offsets from midnight of a single day.
/// In JSON they are written as `"HH:MM"` (`start_time` / `end_time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: i64,
    /// Start offset (minutes from midnight).
    #[serde(rename = "start_time", with = "crate::time::clock")]
    pub start_min: i64,
    /// End offset (minutes from midnight). Expected to exceed `start_min`.
    #[serde(rename = "end_time", with = "crate::time::clock")]
    pub end_min: i64,
    /// Location identifier.
    pub location: String,
    /// Priority weight (higher = more valuable).
    pub priority: i32,
}

impl Event {
    /// Creates an event at `location` spanning `[start_min, end_min)`.
    pub fn new(id: i64, start_min: i64, end_min: i64, location: impl Into<String>) -> Self {
        Self {
            id,
            start_min,
            end_min,
            location: location.into(),
            priority: 0,
        }
    }

    /// Sets the priority weight.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Duration (end - start) in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether the two events' windows intersect.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let e = Event::new(7, 600, 720, "A").with_priority(50);
        assert_eq!(e.id, 7);
        assert_eq!(e.location, "A");
        assert_eq!(e.priority, 50);
        assert_eq!(e.duration_min(), 120);
    }

    #[test]
    fn test_overlaps() {
        let a = Event::new(1, 600, 720, "A");
        let b = Event::new(2, 690, 750, "A");
        let c = Event::new(3, 720, 780, "A");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching windows do not overlap
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_event_json() {
        let json = r#"{"id":4,"start_time":"14:30","end_time":"16:00","location":"C","priority":70}"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e, Event::new(4, 870, 960, "C").with_priority(70));
        assert_eq!(serde_json::to_string(&e).unwrap(), json);
    }
}
