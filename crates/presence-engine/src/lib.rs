//! # presence-engine
//!
//! Weekly calendar normalization and group free/busy classification in a
//! fixed civil timezone.
//!
//! An iCalendar feed — recurring events included — becomes a canonical set
//! of `(weekday, start, end)` busy blocks; per request, one weekday's blocks
//! are merged into disjoint intervals and every group member is classified
//! as free, busy, or unknown relative to a reference minute. All core
//! operations are pure, synchronous, and reentrant.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use presence_engine::classify::Member;
//! use presence_engine::service::{group_availability, upload_feed};
//! use presence_engine::store::MemoryStore;
//!
//! let feed = "BEGIN:VCALENDAR\r\n\
//!             VERSION:2.0\r\n\
//!             BEGIN:VEVENT\r\n\
//!             DTSTART:20260302T150000Z\r\n\
//!             DTEND:20260302T160000Z\r\n\
//!             END:VEVENT\r\n\
//!             END:VCALENDAR\r\n";
//!
//! let mut store = MemoryStore::new();
//! upload_feed(&mut store, "alice", feed).unwrap();
//!
//! // 2026-03-02 is a Monday; 15:00Z is 9:00am in America/Chicago.
//! let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 30, 0).unwrap();
//! let members = vec![Member::new("alice", Some("Alice"))];
//! let report = group_availability(&store, &members, Some("9:30"), now).unwrap();
//!
//! assert_eq!(report.busy.len(), 1);
//! assert_eq!(report.busy[0].busy_until, "10:00am");
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — civil-zone weekday/wall-clock codec and display formatting
//! - [`event`] — raw calendar events and recurrence weekday resolution
//! - [`ics`] — ICS feed text → raw event records
//! - [`normalize`] — raw events → canonical busy blocks
//! - [`merge`] — busy blocks → per-user disjoint minute intervals
//! - [`classify`] — members × intervals → free/busy/unknown
//! - [`store`] — busy-block persistence port
//! - [`service`] — upload and group-availability orchestration
//! - [`error`] — error types

pub mod block;
pub mod classify;
pub mod clock;
pub mod error;
pub mod event;
pub mod ics;
pub mod merge;
pub mod normalize;
pub mod service;
pub mod store;

pub use block::{BusyBlock, BusyBlockInput};
pub use classify::{classify, Classification, Member};
pub use error::PresenceError;
pub use event::{resolve_weekdays, RawCalendarEvent};
pub use ics::parse_feed;
pub use merge::{merge_blocks, Interval};
pub use normalize::normalize_events;
pub use service::{group_availability, upload_feed, AvailabilityReport};
pub use store::{BlockStore, MemoryStore};
