//! Calendar normalization — raw events to canonical weekly busy blocks.
//!
//! Applies a per-event filtering pipeline and replicates each surviving
//! event's wall-clock window onto every business-week weekday it recurs on.
//! Failures are contained at event granularity: a bad event is skipped and
//! the rest of the feed still normalizes.

use log::debug;

use crate::block::{self, BusyBlockInput};
use crate::clock;
use crate::event::{self, RawCalendarEvent};

/// Normalize a parsed calendar into busy-block inputs.
///
/// The caller attaches the owning user and replaces that user's stored
/// blocks wholesale; this function performs no I/O.
pub fn normalize_events(events: &[RawCalendarEvent]) -> Vec<BusyBlockInput> {
    events.iter().flat_map(normalize_event).collect()
}

fn normalize_event(event: &RawCalendarEvent) -> Vec<BusyBlockInput> {
    if event.kind != "VEVENT" {
        debug!("skipping non-event component {:?}", event.kind);
        return Vec::new();
    }
    let (Some(start), Some(end)) = (event.start, event.end) else {
        debug!("skipping event without both start and end instants");
        return Vec::new();
    };
    if event.all_day {
        debug!("skipping all-day event starting {}", start);
        return Vec::new();
    }
    if end <= start {
        debug!("skipping inverted or zero-length event starting {}", start);
        return Vec::new();
    }

    let weekdays = event::resolve_weekdays(event);
    if weekdays.is_empty() {
        debug!("skipping event with no resolvable weekday starting {}", start);
        return Vec::new();
    }

    let start_time = clock::clock_of(start);
    let end_time = clock::clock_of(end);
    // A window whose civil end clock is not after its start clock crossed
    // midnight and cannot be modeled as a single-weekday block.
    if clock::to_minutes(&end_time) <= clock::to_minutes(&start_time) {
        debug!("skipping midnight-crossing event {}..{}", start_time, end_time);
        return Vec::new();
    }

    weekdays
        .into_iter()
        .filter(|&weekday| block::is_business_day(weekday))
        .map(|weekday| BusyBlockInput {
            weekday,
            start_time: start_time.clone(),
            end_time: end_time.clone(),
        })
        .collect()
}
