//! Civil-time codec for the fixed civil timezone.
//!
//! Every wall-clock derivation in the engine goes through this module:
//! absolute instants become weekday numbers and `HH:MM:SS` clock strings in
//! [`CIVIL_TZ`], clock strings move to and from the minute-of-day scale, and
//! user-facing labels are rendered in 12-hour format. All functions are pure;
//! the timezone is an immutable constant, so concurrent use needs no
//! synchronization.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// The single civil timezone all wall-clock math is evaluated in.
pub const CIVIL_TZ: Tz = chrono_tz::America::Chicago;

/// A validated clock-of-day query value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockTime {
    /// Minute-of-day offset on the `[0, 1440)` scale.
    pub minutes: f64,
    /// 12-hour display label, e.g. `"9:05am"`.
    pub label: String,
}

/// Weekday of `instant` in the civil timezone: Mon=1 .. Sun=7.
///
/// DST-aware: the same UTC instant can land on a different weekday (or hour)
/// depending on the civil offset in effect at that instant.
pub fn weekday_of(instant: DateTime<Utc>) -> u8 {
    instant
        .with_timezone(&CIVIL_TZ)
        .weekday()
        .number_from_monday() as u8
}

/// Wall-clock time of `instant` in the civil timezone as `"HH:MM:00"`.
///
/// Seconds are forced to zero; the engine works at minute precision.
pub fn clock_of(instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&CIVIL_TZ);
    format!("{:02}:{:02}:00", local.hour(), local.minute())
}

/// Convert a `"HH:MM:SS"` (or `"HH:MM"`) clock string to minutes-of-day.
///
/// Total function: a malformed or missing component contributes 0, so the
/// worst case is `0.0`, never an error.
pub fn to_minutes(clock: &str) -> f64 {
    let mut parts = clock.split(':');
    let hours = component(parts.next());
    let minutes = component(parts.next());
    let seconds = component(parts.next());
    hours * 60.0 + minutes + seconds / 60.0
}

fn component(part: Option<&str>) -> f64 {
    part.and_then(|p| p.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render a `"HH:MM:SS"` clock string as a 12-hour label: `"13:00:00"` →
/// `"1:00pm"`. Midnight is `12am`, noon is `12pm`.
pub fn to_display(clock: &str) -> String {
    let mut parts = clock.split(':');
    let hour: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minute: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let period = if hour < 12 { "am" } else { "pm" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}{}", hour12, minute, period)
}

/// Validate a caller-supplied clock-of-day parameter.
///
/// Accepts `H:MM`, `HH:MM`, or `HH:MM:SS` with hour 0–23, minute 0–59, and
/// optional seconds 0–59. Anything else returns `None`, which upstream
/// surfaces as a request validation error rather than a silent default.
pub fn parse_clock_param(raw: &str) -> Option<ClockTime> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let hour = digits(parts[0], 1..=2, 23)?;
    let minute = digits(parts[1], 2..=2, 59)?;
    let seconds = match parts.get(2) {
        Some(part) => digits(part, 2..=2, 59)?,
        None => 0,
    };
    let minutes = (hour * 60 + minute) as f64 + seconds as f64 / 60.0;
    let label = to_display(&format!("{:02}:{:02}:{:02}", hour, minute, seconds));
    Some(ClockTime { minutes, label })
}

fn digits(part: &str, width: std::ops::RangeInclusive<usize>, max: u32) -> Option<u32> {
    if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = part.parse().ok()?;
    (value <= max).then_some(value)
}
