//! Canonical weekly busy-block records.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// The modeled business week: Monday=1 through Friday=5.
pub const BUSINESS_WEEK: RangeInclusive<u8> = 1..=5;

/// A normalized busy window before it is attached to a user.
///
/// `start_time`/`end_time` are `"HH:MM:SS"` wall-clock strings in the civil
/// timezone, with `end_time > start_time` (blocks never cross midnight).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlockInput {
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

/// A persisted busy-block row, keyed by `(user_id, weekday)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    pub user_id: String,
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

impl BusyBlockInput {
    /// Attach a block to the user whose feed produced it.
    pub fn for_user(self, user_id: &str) -> BusyBlock {
        BusyBlock {
            user_id: user_id.to_string(),
            weekday: self.weekday,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Whether `weekday` (Mon=1 .. Sun=7) falls inside the modeled business week.
pub fn is_business_day(weekday: u8) -> bool {
    BUSINESS_WEEK.contains(&weekday)
}
