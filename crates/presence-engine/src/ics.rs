//! ICS feed adapter — raw iCalendar text to [`RawCalendarEvent`] records.
//!
//! Wraps the `ical` crate's grammar parser and the `rrule` crate's RRULE
//! parser. This module only lifts properties into the raw-event model; all
//! filtering and weekday policy lives in [`crate::normalize`]. Per-item
//! failures (unparseable timestamps, bad RRULEs, broken calendar objects)
//! skip that item and never abort the rest of the feed.

use std::io::BufReader;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;
use log::debug;
use rrule::{NWeekday, RRule, Unvalidated};

use crate::clock::CIVIL_TZ;
use crate::event::{RawCalendarEvent, RecurrenceRule, WeekdayCode, WeekdaySpec};

/// Parse an ICS feed into raw event records.
///
/// Infallible by design: unparseable calendar objects are skipped, and events
/// with unreadable timestamps surface with the corresponding instant absent
/// so the normalizer drops them.
pub fn parse_feed(text: &str) -> Vec<RawCalendarEvent> {
    let reader = ical::IcalParser::new(BufReader::new(text.as_bytes()));
    let mut events = Vec::new();

    for calendar in reader {
        let calendar = match calendar {
            Ok(calendar) => calendar,
            Err(err) => {
                debug!("skipping unparseable calendar object: {err}");
                continue;
            }
        };
        events.extend(calendar.events.iter().map(raw_event));
    }

    events
}

fn raw_event(event: &IcalEvent) -> RawCalendarEvent {
    let start = property(event, "DTSTART");
    let end = property(event, "DTEND");
    RawCalendarEvent {
        kind: "VEVENT".to_string(),
        start: start.and_then(instant_of),
        end: end.and_then(instant_of),
        all_day: start.is_some_and(is_date_only),
        recurrence: property(event, "RRULE").and_then(recurrence_of),
    }
}

fn property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a Property> {
    event.properties.iter().find(|p| p.name == name)
}

fn param<'a>(prop: &'a Property, name: &str) -> Option<&'a str> {
    prop.params
        .as_ref()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
}

/// Whether the property carries a date-only (all-day) value.
fn is_date_only(prop: &Property) -> bool {
    param(prop, "VALUE").is_some_and(|value| value.eq_ignore_ascii_case("DATE"))
}

/// Lift a DTSTART/DTEND property to an absolute instant.
///
/// Handles the three RFC 5545 forms: UTC (`...T...Z` suffix), local time with
/// a `TZID` parameter, and floating local time, which is read in the civil
/// zone. Date-only values anchor at civil midnight; the event is dropped as
/// all-day before the clock ever matters.
fn instant_of(prop: &Property) -> Option<DateTime<Utc>> {
    let value = prop.value.as_deref()?;

    if !value.contains('T') {
        let date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return CIVIL_TZ
            .from_local_datetime(&midnight)
            .single()
            .map(|local| local.with_timezone(&Utc));
    }

    if let Some(utc_value) = value.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(utc_value, "%Y%m%dT%H%M%S").ok()?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S").ok()?;
    let tz: Tz = match param(prop, "TZID") {
        Some(tzid) => tzid.parse().ok()?,
        None => CIVIL_TZ,
    };
    // Times in the DST gap or overlap have no single civil reading; skip.
    tz.from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Extract the BYDAY weekday set from an RRULE property.
///
/// `num_days_from_monday` is the descriptor's 0-based Monday-origin scale.
/// An RRULE without BYDAY (e.g. `FREQ=DAILY`) yields no descriptor, which
/// falls back to the start instant's weekday during resolution.
fn recurrence_of(prop: &Property) -> Option<RecurrenceRule> {
    let value = prop.value.as_deref()?;
    let rule: RRule<Unvalidated> = match value.parse() {
        Ok(rule) => rule,
        Err(err) => {
            debug!("skipping unparseable RRULE {value:?}: {err}");
            return None;
        }
    };

    let codes: Vec<WeekdayCode> = rule
        .get_by_weekday()
        .iter()
        .map(|day| match day {
            NWeekday::Every(weekday) | NWeekday::Nth(_, weekday) => {
                WeekdayCode::Index(weekday.num_days_from_monday() as u8)
            }
        })
        .collect();

    if codes.is_empty() {
        return None;
    }
    Some(RecurrenceRule {
        weekdays: Some(WeekdaySpec::Many(codes)),
    })
}
