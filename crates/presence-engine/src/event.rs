//! Raw calendar events and recurrence weekday resolution.
//!
//! A [`RawCalendarEvent`] is what the upstream ICS grammar parser hands the
//! normalizer: a component tag, start/end instants, an all-day marker, and an
//! optional recurrence descriptor. Recurrence weekday sets arrive in whatever
//! shape the producing parser used — a single code, an object carrying a
//! `weekday` field, or a list of either — and are coerced to one uniform list
//! before any weekday logic runs.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::clock;

/// One raw event record from a parsed calendar feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCalendarEvent {
    /// Component tag; only `"VEVENT"` records are normalized.
    pub kind: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Set for date-valued (all-day) events, which carry no clock window.
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

/// The recurrence descriptor attached to a raw event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecurrenceRule {
    /// Recurrence weekdays on the rule engine's 0-based Monday-origin scale.
    #[serde(default)]
    pub weekdays: Option<WeekdaySpec>,
}

/// Heterogeneous weekday-set shapes produced by upstream rule parsers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeekdaySpec {
    One(WeekdayCode),
    Many(Vec<WeekdayCode>),
}

/// A single weekday entry: either a bare code or an object wrapping one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeekdayCode {
    Index(u8),
    Tagged { weekday: u8 },
}

impl WeekdayCode {
    fn index(&self) -> u8 {
        match self {
            WeekdayCode::Index(index) => *index,
            WeekdayCode::Tagged { weekday } => *weekday,
        }
    }
}

impl WeekdaySpec {
    /// Coerce the scalar/object/list shapes into one uniform code list.
    pub fn codes(&self) -> Vec<u8> {
        match self {
            WeekdaySpec::One(code) => vec![code.index()],
            WeekdaySpec::Many(codes) => codes.iter().map(WeekdayCode::index).collect(),
        }
    }
}

/// Resolve the set of weekdays (Mon=1 .. Sun=7) an event's busy window
/// recurs on.
///
/// Recurrence codes are 0-based Monday-origin, so each is shifted by one onto
/// the engine's 1-based scale; codes outside 0..=6 are dropped rather than
/// wrapped, so a corrupt descriptor degrades to the fallback below. If the
/// descriptor yields nothing, a one-off event still contributes the weekday
/// its start instant naturally falls on. No start instant means no weekdays.
pub fn resolve_weekdays(event: &RawCalendarEvent) -> BTreeSet<u8> {
    if let Some(spec) = event.recurrence.as_ref().and_then(|r| r.weekdays.as_ref()) {
        let recurring: BTreeSet<u8> = spec
            .codes()
            .into_iter()
            .filter(|&code| code <= 6)
            .map(|code| code + 1)
            .collect();
        if !recurring.is_empty() {
            return recurring;
        }
    }
    event.start.map(clock::weekday_of).into_iter().collect()
}
