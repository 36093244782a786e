//! Priority-driven greedy itinerary scheduler.
//!
//! # Algorithm
//!
//! 1. Sort events by start time ascending, then priority descending
//!    (stable, so remaining ties keep input order).
//! 2. Walk the sorted events once, keeping the selection, the clock and the
//!    current location. For each event, in order of precedence:
//!    - **Direct**: the clock has not passed the event start → append.
//!    - **Displacement**: at least two events are selected and the location
//!      of the second-to-last one can reach the event → replace the last
//!      selected event if it has strictly lower priority, otherwise keep it.
//!    - **Travel extension**: the event is elsewhere and reachable from the
//!      current location → advance the clock by the travel time and append
//!      if the event has not started yet.
//!    - Otherwise the event is discarded for good.
//!
//! This is a one-step lookback heuristic, not an optimal subset selection.
//!
//! # Travel feasibility
//!
//! A move is feasible when both locations are known, a route exists, and
//! `window_start - travel >= 0`. The end of the window is not consulted:
//! this is a start-of-day sanity check, not an interval fit.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::decision::{Decision, EventDecision};
use crate::models::{Event, Itinerary, LocationTransition, TransitionTable};

/// Input container for scheduling: events plus location transitions.
///
/// Deserializes from JSON:
///
/// ```
/// use u_itinerary::scheduler::ScheduleRequest;
///
/// let request = ScheduleRequest::from_json(r#"{
///     "events": [
///         {"id": 1, "start_time": "10:00", "end_time": "12:00", "location": "A", "priority": 50}
///     ],
///     "transitions": [{"from": "A", "to": "B", "duration_min": 15}]
/// }"#).unwrap();
/// assert_eq!(request.events.len(), 1);
/// assert_eq!(request.events[0].start_min, 600);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Candidate events.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Undirected location transitions.
    #[serde(default)]
    pub transitions: Vec<LocationTransition>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(events: Vec<Event>, transitions: Vec<LocationTransition>) -> Self {
        Self {
            events,
            transitions,
        }
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the event list.
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    /// Replaces the transition list.
    pub fn with_transitions(mut self, transitions: Vec<LocationTransition>) -> Self {
        self.transitions = transitions;
        self
    }

    /// Adds one event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Adds one transition.
    pub fn with_transition(mut self, transition: LocationTransition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Builds the scheduler for this request.
    pub fn scheduler(&self) -> PriorityScheduler {
        PriorityScheduler::new(
            self.events.clone(),
            TransitionTable::from_transitions(&self.transitions),
        )
    }
}

/// Working state of a single pass. Never shared between calls.
struct ScheduleState<'a> {
    selection: Vec<&'a Event>,
    current_time: i64,
    current_location: Option<&'a str>,
}

impl<'a> ScheduleState<'a> {
    fn new() -> Self {
        Self {
            selection: Vec::new(),
            current_time: 0,
            current_location: None,
        }
    }

    fn append(&mut self, evt: &'a Event) {
        self.selection.push(evt);
        self.current_time = evt.end_min;
        self.current_location = Some(evt.location.as_str());
    }

    /// Last two selected events as (second_last, last).
    fn lookback(&self) -> Option<(&'a Event, &'a Event)> {
        match self.selection.as_slice() {
            [.., second_last, last] => Some((*second_last, *last)),
            _ => None,
        }
    }
}

/// Greedy scheduler selecting events under travel constraints.
///
/// Behavior on inputs that fail [`validate_input`](crate::validation::validate_input)
/// (end before start, negative durations, ...) is unspecified, but the pass
/// always terminates and never panics.
///
/// # Example
///
/// ```
/// use u_itinerary::models::{Event, LocationTransition, TransitionTable};
/// use u_itinerary::scheduler::PriorityScheduler;
///
/// let events = vec![
///     Event::new(1, 600, 720, "A").with_priority(50),
///     Event::new(2, 600, 660, "B").with_priority(30),
///     Event::new(3, 780, 840, "D").with_priority(80),
/// ];
/// let table = TransitionTable::from_transitions(&[LocationTransition::new("A", "D", 10)]);
///
/// let itinerary = PriorityScheduler::new(events, table).schedule();
/// assert_eq!(itinerary.event_ids, vec![1, 3]);
/// assert_eq!(itinerary.total_value, 130);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    events: Vec<Event>,
    table: TransitionTable,
}

impl PriorityScheduler {
    /// Creates a scheduler. The event list is stored as given.
    pub fn new(events: Vec<Event>, table: TransitionTable) -> Self {
        Self { events, table }
    }

    /// Input events, in the order they were supplied.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Travel-time table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Runs one scheduling pass.
    pub fn schedule(&self) -> Itinerary {
        self.run(|_| {})
    }

    /// Runs one scheduling pass and records a decision per examined event,
    /// in examination order.
    pub fn schedule_traced(&self) -> (Itinerary, Vec<EventDecision>) {
        let mut decisions = Vec::with_capacity(self.events.len());
        let itinerary = self.run(|d| decisions.push(d));
        (itinerary, decisions)
    }

    /// Whether `from` can reach `to` given a window starting at
    /// `window_start`.
    ///
    /// `window_end` is accepted for symmetry with the window notion but is
    /// not checked.
    pub fn can_travel(
        &self,
        from: Option<&str>,
        to: &str,
        window_start: i64,
        window_end: i64,
    ) -> bool {
        self.feasible_travel(from, to, window_start, window_end)
            .is_some()
    }

    /// Travel time for a feasible move, `None` otherwise.
    fn feasible_travel(
        &self,
        from: Option<&str>,
        to: &str,
        window_start: i64,
        _window_end: i64,
    ) -> Option<i64> {
        let from = from.filter(|s| !s.is_empty())?;
        if to.is_empty() {
            return None;
        }
        let travel = self.table.lookup(from, to)?;
        window_start
            .checked_sub(travel)
            .is_some_and(|left| left >= 0)
            .then_some(travel)
    }

    /// Events sorted by start ascending, priority descending.
    fn sorted_events(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by(|a, b| {
            a.start_min
                .cmp(&b.start_min)
                .then_with(|| b.priority.cmp(&a.priority))
        });
        sorted
    }

    fn run(&self, mut record: impl FnMut(EventDecision)) -> Itinerary {
        let mut state = ScheduleState::new();

        for evt in self.sorted_events() {
            let decision = self.examine(&mut state, evt);
            if decision.is_selected() {
                debug!(
                    "event {} @{} {:?}, clock now {}",
                    evt.id, evt.location, decision, state.current_time
                );
            } else {
                trace!(
                    "event {} @{} {:?}, clock at {}",
                    evt.id,
                    evt.location,
                    decision,
                    state.current_time
                );
            }
            record(EventDecision::new(evt.id, decision));
        }

        let itinerary = Itinerary::from_selection(&state.selection);
        debug!(
            "selected {} of {} events, total value {}",
            itinerary.max_events,
            self.events.len(),
            itinerary.total_value
        );
        itinerary
    }

    fn examine<'a>(&self, state: &mut ScheduleState<'a>, evt: &'a Event) -> Decision {
        if state.current_time <= evt.start_min {
            state.append(evt);
            return Decision::Accepted;
        }

        if let Some((second_last, last)) = state.lookback() {
            if self.can_travel(
                Some(second_last.location.as_str()),
                &evt.location,
                second_last.end_min,
                evt.start_min,
            ) {
                if last.priority < evt.priority {
                    state.selection.pop();
                    state.append(evt);
                    return Decision::Displaced { replaced: last.id };
                }
                return Decision::KeptIncumbent { incumbent: last.id };
            }
        }

        if state.current_location != Some(evt.location.as_str()) {
            if let Some(travel_min) = self.feasible_travel(
                state.current_location,
                &evt.location,
                state.current_time,
                evt.start_min,
            ) {
                // The clock keeps the travel time even if the event is missed.
                state.current_time = state.current_time.saturating_add(travel_min);
                if state.current_time <= evt.start_min {
                    state.append(evt);
                    return Decision::AcceptedAfterTravel { travel_min };
                }
                return Decision::TravelTooLong {
                    travel_min,
                    arrival_min: state.current_time,
                };
            }
        }

        Decision::Discarded
    }
}
