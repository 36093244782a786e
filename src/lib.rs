//! Event itinerary planning for the U-Engine ecosystem.
//!
//! Selects a high-value subset of time-boxed events to attend in one day,
//! where consecutive events may be in different locations and moving between
//! locations takes a fixed travel time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Event`, `LocationTransition`,
//!   `TransitionTable`, `Itinerary`
//! - **`scheduler`**: `PriorityScheduler` (greedy pass with one-step
//!   lookback displacement), `ScheduleRequest`, decision records
//! - **`validation`**: Input checks (duplicate IDs, time windows, locations)
//! - **`time`**: `HH:MM` ↔ minute-offset conversion
//!
//! # Example
//!
//! ```
//! use u_itinerary::models::{Event, LocationTransition};
//! use u_itinerary::scheduler::ScheduleRequest;
//! use u_itinerary::validation::validate_input;
//!
//! let request = ScheduleRequest::default()
//!     .with_event(Event::new(1, 600, 720, "A").with_priority(50))
//!     .with_event(Event::new(2, 780, 840, "D").with_priority(80))
//!     .with_transition(LocationTransition::new("A", "D", 10));
//!
//! assert!(validate_input(&request.events, &request.transitions).is_ok());
//! let itinerary = request.scheduler().schedule();
//! assert_eq!(itinerary.event_ids, vec![1, 2]);
//! assert_eq!(itinerary.total_value, 130);
//! ```

pub mod models;
pub mod scheduler;
pub mod time;
pub mod validation;
