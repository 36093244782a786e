//! Itinerary domain models.
//!
//! Provides the input and output types of the scheduler: events with a
//! time window and location, undirected location transitions, the
//! travel-time table built from them, and the resulting itinerary.
//!
//! # Domain Mappings
//!
//! | u-itinerary | Conference | Field Service | Tourism |
//! |-------------|------------|---------------|---------|
//! | Event | Session | Appointment | Attraction slot |
//! | Location | Room | Customer site | Venue |
//! | Transition | Corridor walk | Drive | Transfer |
//! | Itinerary | Personal agenda | Day route | Day plan |

mod event;
mod itinerary;
mod transition;

pub use event::Event;
pub use itinerary::Itinerary;
pub use transition::{LocationTransition, TransitionTable};
