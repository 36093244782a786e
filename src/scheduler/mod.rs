//! Greedy itinerary scheduler.
//!
//! Provides a priority-driven, single-pass scheduler that selects events
//! under travel-time constraints, plus per-event decision records.
//!
//! # Algorithm
//!
//! `PriorityScheduler` walks events in start order, accepting an event when
//! the clock allows it, displacing the most recent selection when a
//! higher-priority event is reachable from the one before it, or travelling
//! to a new location when the move is feasible. It is not optimal.

mod decision;
mod priority;

pub use decision::{Decision, EventDecision};
pub use priority::{PriorityScheduler, ScheduleRequest};
