//! Per-event decision records for explainability.

use serde::{Deserialize, Serialize};

/// Outcome of examining one event during a scheduling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The clock had already reached the event's start; appended as-is.
    Accepted,
    /// Replaced the most recently selected event, which had lower priority.
    Displaced {
        /// ID of the event that was removed from the selection.
        replaced: i64,
    },
    /// Appended after travelling from the current location.
    AcceptedAfterTravel {
        /// Travel time that was added to the clock.
        travel_min: i64,
    },
    /// The lookback check passed but the most recent event had equal or
    /// higher priority, so it was kept.
    KeptIncumbent {
        /// ID of the event that stayed selected.
        incumbent: i64,
    },
    /// Travel was attempted but arrival fell after the event start.
    /// The clock stays advanced by `travel_min`.
    TravelTooLong {
        /// Travel time that was added to the clock.
        travel_min: i64,
        /// Clock value after travelling (minutes from midnight).
        arrival_min: i64,
    },
    /// No acceptance path applied.
    Discarded,
}

impl Decision {
    /// Whether the examined event ended up in the selection at that point.
    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            Decision::Accepted | Decision::Displaced { .. } | Decision::AcceptedAfterTravel { .. }
        )
    }
}

/// Decision made for a specific event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDecision {
    /// Examined event.
    pub event_id: i64,
    /// What happened to it.
    pub decision: Decision,
}

impl EventDecision {
    /// Creates a decision record.
    pub fn new(event_id: i64, decision: Decision) -> Self {
        Self { event_id, decision }
    }
}
