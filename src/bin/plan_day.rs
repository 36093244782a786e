//! Day planner binary.
//!
//! Validates an itinerary request, runs the priority scheduler and prints the
//! selected events.
//!
//! # Usage
//!
//! ```bash
//! # Built-in sample day
//! cargo run --bin plan-day
//!
//! # Request file (see `ScheduleRequest` for the format)
//! RUST_LOG=debug cargo run --bin plan-day -- day.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use u_itinerary::models::{Event, LocationTransition};
use u_itinerary::scheduler::ScheduleRequest;
use u_itinerary::time::parse_clock;
use u_itinerary::validation::validate_input;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LevelFilter::WARN),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let request = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read request file {path}"))?;
            ScheduleRequest::from_json(&json)
                .with_context(|| format!("failed to parse request file {path}"))?
        }
        None => {
            info!("No request file given, using the sample day");
            sample_day()?
        }
    };

    if let Err(errors) = validate_input(&request.events, &request.transitions) {
        for e in &errors {
            warn!("{e}");
        }
        bail!("request has {} validation error(s)", errors.len());
    }

    let itinerary = request.scheduler().schedule();
    println!("{itinerary}");
    Ok(())
}

fn sample_day() -> Result<ScheduleRequest> {
    let slots = [
        (1, "10:00", "12:00", "A", 50),
        (2, "10:00", "11:00", "B", 30),
        (3, "11:30", "12:30", "A", 40),
        (4, "14:30", "16:00", "C", 70),
        (5, "14:25", "15:30", "B", 60),
        (6, "13:00", "14:00", "D", 80),
    ];
    let mut request = ScheduleRequest::default();
    for (id, start, end, location, priority) in slots {
        request = request.with_event(
            Event::new(id, parse_clock(start)?, parse_clock(end)?, location)
                .with_priority(priority),
        );
    }

    Ok(request.with_transitions(vec![
        LocationTransition::new("A", "B", 15),
        LocationTransition::new("A", "C", 20),
        LocationTransition::new("A", "D", 10),
        LocationTransition::new("B", "C", 5),
        LocationTransition::new("B", "D", 25),
        LocationTransition::new("C", "D", 25),
    ]))
}
