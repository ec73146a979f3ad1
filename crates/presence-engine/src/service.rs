//! Request-level orchestration: feed upload and group availability.
//!
//! Ties the pipeline together exactly as a request handler would: resolve
//! the reference minute, read from the block store, merge, classify, and
//! assemble the response payload. Stateless and reentrant; every request
//! supplies its own inputs.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::block;
use crate::classify::{self, BusyMember, Classification, FreeMember, Member, UnknownMember};
use crate::clock;
use crate::error::{PresenceError, Result};
use crate::ics;
use crate::merge;
use crate::normalize;
use crate::store::BlockStore;

/// The group-availability response payload.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    pub free: Vec<FreeMember>,
    pub busy: Vec<BusyMember>,
    pub unknown: Vec<UnknownMember>,
    /// Label of the caller-supplied query time; `null` when "now" was used.
    pub checked_time: Option<String>,
}

/// Parse and normalize a calendar feed, replacing the user's stored blocks.
///
/// Returns the number of busy blocks stored. A feed that normalizes to zero
/// blocks still counts as an upload.
pub fn upload_feed(store: &mut impl BlockStore, user_id: &str, feed_text: &str) -> Result<usize> {
    let events = ics::parse_feed(feed_text);
    let blocks = normalize::normalize_events(&events);
    let count = blocks.len();
    store.replace_busy_blocks(user_id, blocks)?;
    Ok(count)
}

/// Classify every group member as free, busy, or unknown.
///
/// `time_param` is the optional caller-supplied clock-of-day; an invalid
/// value is a request error, an absent one means the civil wall-clock minute
/// of `now`. The weekday under evaluation is always derived from `now`; on
/// weekends no blocks are fetched and every uploaded member reports free
/// with no `free_until`.
pub fn group_availability(
    store: &impl BlockStore,
    members: &[Member],
    time_param: Option<&str>,
    now: DateTime<Utc>,
) -> Result<AvailabilityReport> {
    let (reference_minutes, checked_time) = match time_param {
        Some(raw) => {
            let parsed = clock::parse_clock_param(raw)
                .ok_or_else(|| PresenceError::InvalidTimeParam(raw.to_string()))?;
            (parsed.minutes, Some(parsed.label))
        }
        None => {
            let local = now.with_timezone(&clock::CIVIL_TZ);
            ((local.hour() * 60 + local.minute()) as f64, None)
        }
    };

    let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();
    let uploaded = store.fetch_uploaded_user_ids(&user_ids)?;

    let weekday = clock::weekday_of(now);
    let intervals_by_user = if block::is_business_day(weekday) {
        let rows = store.fetch_busy_blocks(weekday, &user_ids)?;
        merge::merge_blocks(&rows)
    } else {
        // The business week has no modeled commitments on weekends.
        HashMap::new()
    };

    let Classification { free, busy, unknown } =
        classify::classify(members, &intervals_by_user, &uploaded, reference_minutes);

    Ok(AvailabilityReport {
        free,
        busy,
        unknown,
        checked_time,
    })
}
