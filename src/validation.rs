//! Input validation for itinerary requests.
//!
//! The scheduler itself accepts any input and never fails. This module is
//! the layer in front of it that rejects inputs whose outcome would be
//! meaningless. Detects:
//! - Duplicate event IDs
//! - Empty or inverted time windows
//! - Offsets outside the single day
//! - Negative priorities or travel durations
//! - Empty locations
//! - Event locations that no transition mentions

use crate::models::{Event, LocationTransition, TransitionTable};
use crate::time::MINUTES_PER_DAY;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two events share the same ID.
    DuplicateId,
    /// An event ends at or before its start.
    InvalidTimeWindow,
    /// An event time lies outside `00:00..=24:00`.
    OutsideDay,
    /// An event has a negative priority.
    NegativePriority,
    /// An event or transition has an empty location.
    EmptyLocation,
    /// A transition has a negative duration.
    NegativeDuration,
    /// An event location is not an endpoint of any transition.
    UnknownLocation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates events and transitions before scheduling.
///
/// Checks:
/// 1. No duplicate event IDs
/// 2. `end > start` for every event
/// 3. Both offsets within the day
/// 4. Priorities are non-negative
/// 5. Locations are non-empty (events and transitions)
/// 6. Transition durations are non-negative
/// 7. Every event location appears in some transition (skipped when there
///    are no transitions at all, since then every event is isolated)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(events: &[Event], transitions: &[LocationTransition]) -> ValidationResult {
    let mut errors = Vec::new();

    for t in transitions {
        if t.from.is_empty() || t.to.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLocation,
                format!("Transition '{}' -> '{}' has an empty endpoint", t.from, t.to),
            ));
        }
        if t.duration_min < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!(
                    "Transition '{}' -> '{}' has negative duration {}",
                    t.from, t.to, t.duration_min
                ),
            ));
        }
    }

    let table = TransitionTable::from_transitions(transitions);
    let mut ids = HashSet::new();

    for e in events {
        if !ids.insert(e.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", e.id),
            ));
        }

        if e.end_min <= e.start_min {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeWindow,
                format!(
                    "Event {} ends at {} but starts at {}",
                    e.id, e.end_min, e.start_min
                ),
            ));
        }

        for offset in [e.start_min, e.end_min] {
            if !(0..=MINUTES_PER_DAY).contains(&offset) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutsideDay,
                    format!("Event {} has offset {offset} outside the day", e.id),
                ));
            }
        }

        if e.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Event {} has negative priority {}", e.id, e.priority),
            ));
        }

        if e.location.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLocation,
                format!("Event {} has no location", e.id),
            ));
        } else if !table.is_empty() && !table.contains_location(&e.location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLocation,
                format!(
                    "Event {} is at '{}', which no transition reaches",
                    e.id, e.location
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
