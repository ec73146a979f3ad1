//! Tests for the civil-time codec.

use chrono::{TimeZone, Utc};
use presence_engine::clock::{
    clock_of, parse_clock_param, to_display, to_minutes, weekday_of,
};

#[test]
fn weekday_is_evaluated_in_the_civil_zone() {
    // 2026-03-03 04:00 UTC is still Monday 22:00 in America/Chicago (CST).
    let instant = Utc.with_ymd_and_hms(2026, 3, 3, 4, 0, 0).unwrap();
    assert_eq!(weekday_of(instant), 1);

    // Noon UTC the same day is Tuesday morning locally.
    let instant = Utc.with_ymd_and_hms(2026, 3, 3, 12, 0, 0).unwrap();
    assert_eq!(weekday_of(instant), 2);
}

#[test]
fn clock_of_respects_dst_offsets() {
    // 15:00 UTC on a March Monday (CST, UTC-6) is 09:00 local.
    let winter = Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap();
    assert_eq!(clock_of(winter), "09:00:00");

    // The same UTC clock in July (CDT, UTC-5) is 10:00 local.
    let summer = Utc.with_ymd_and_hms(2026, 7, 1, 15, 0, 0).unwrap();
    assert_eq!(clock_of(summer), "10:00:00");
}

#[test]
fn clock_of_forces_seconds_to_zero() {
    let instant = Utc.with_ymd_and_hms(2026, 3, 2, 15, 30, 59).unwrap();
    assert_eq!(clock_of(instant), "09:30:00");
}

#[test]
fn to_minutes_handles_full_and_short_forms() {
    assert_eq!(to_minutes("10:30:00"), 630.0);
    assert_eq!(to_minutes("09:05"), 545.0);
    assert_eq!(to_minutes("00:00:30"), 0.5);
}

#[test]
fn to_minutes_defaults_malformed_components_to_zero() {
    assert_eq!(to_minutes("bogus"), 0.0);
    assert_eq!(to_minutes(""), 0.0);
    // A bad middle component contributes zero; the rest still counts.
    assert_eq!(to_minutes("10:xx:30"), 600.5);
}

#[test]
fn to_display_covers_midnight_noon_and_pm() {
    assert_eq!(to_display("00:00:00"), "12:00am");
    assert_eq!(to_display("12:00:00"), "12:00pm");
    assert_eq!(to_display("13:00:00"), "1:00pm");
    assert_eq!(to_display("23:59:00"), "11:59pm");
    assert_eq!(to_display("09:05:00"), "9:05am");
}

#[test]
fn parse_clock_param_accepts_valid_forms() {
    let parsed = parse_clock_param("9:05").expect("H:MM should parse");
    assert_eq!(parsed.minutes, 545.0);
    assert_eq!(parsed.label, "9:05am");

    let parsed = parse_clock_param("09:05").expect("HH:MM should parse");
    assert_eq!(parsed.minutes, 545.0);

    let parsed = parse_clock_param("14:30:15").expect("HH:MM:SS should parse");
    assert_eq!(parsed.minutes, 870.25);
    assert_eq!(parsed.label, "2:30pm");

    let parsed = parse_clock_param("0:00").expect("midnight should parse");
    assert_eq!(parsed.minutes, 0.0);
    assert_eq!(parsed.label, "12:00am");
}

#[test]
fn parse_clock_param_rejects_invalid_forms() {
    assert!(parse_clock_param("25:00").is_none(), "hour out of range");
    assert!(parse_clock_param("9:60").is_none(), "minute out of range");
    assert!(parse_clock_param("9:05:60").is_none(), "seconds out of range");
    assert!(parse_clock_param("9:5").is_none(), "minute must be two digits");
    assert!(parse_clock_param("9:05:5").is_none(), "seconds must be two digits");
    assert!(parse_clock_param("12").is_none(), "missing minute");
    assert!(parse_clock_param("9:05:00:00").is_none(), "too many parts");
    assert!(parse_clock_param("ab:cd").is_none(), "non-numeric");
    assert!(parse_clock_param(" 9:05").is_none(), "leading whitespace");
    assert!(parse_clock_param("-1:00").is_none(), "negative hour");
    assert!(parse_clock_param("").is_none(), "empty string");
}
