//! Free/busy/unknown classification of group members at a reference minute.
//!
//! A member with no uploaded calendar is `unknown` — distinct from a member
//! confirmed free. Everyone else is classified by one scan over their merged
//! intervals: a containing interval means `busy` until its end; otherwise the
//! member is `free` until the next interval's start, if any remains that day.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::clock;
use crate::merge::Interval;

/// A group member as read from the profile store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub user_id: String,
    pub display_name: Option<String>,
}

impl Member {
    pub fn new(user_id: &str, display_name: Option<&str>) -> Member {
        Member {
            user_id: user_id.to_string(),
            display_name: display_name.map(str::to_string),
        }
    }

    /// Trimmed profile display name, falling back to the raw user id.
    fn label(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.user_id.clone(),
        }
    }
}

/// A member confirmed free at the reference minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeMember {
    pub user_id: String,
    pub display_name: String,
    /// 12-hour start label of the next interval after the reference minute,
    /// absent when none remains that day.
    pub free_until: Option<String>,
}

/// A member inside a merged busy interval at the reference minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusyMember {
    pub user_id: String,
    pub display_name: String,
    /// 12-hour end label of the containing interval.
    pub busy_until: String,
}

/// A member who has never uploaded a calendar feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownMember {
    pub user_id: String,
    pub display_name: String,
}

/// Members bucketed by availability status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Classification {
    pub free: Vec<FreeMember>,
    pub busy: Vec<BusyMember>,
    pub unknown: Vec<UnknownMember>,
}

/// Classify every group member relative to `reference_minutes`.
///
/// `intervals_by_user` must hold merged (sorted, disjoint, non-adjacent)
/// intervals; a member missing from the map simply has no commitments.
/// `uploaded` gates the unknown bucket regardless of any intervals present.
pub fn classify(
    members: &[Member],
    intervals_by_user: &HashMap<String, Vec<Interval>>,
    uploaded: &HashSet<String>,
    reference_minutes: f64,
) -> Classification {
    let mut result = Classification::default();

    for member in members {
        let display_name = member.label();
        if !uploaded.contains(&member.user_id) {
            result.unknown.push(UnknownMember {
                user_id: member.user_id.clone(),
                display_name,
            });
            continue;
        }

        let intervals = intervals_by_user
            .get(&member.user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        // One pass: find the containing interval (there is at most one after
        // merging) and the earliest interval strictly after the reference.
        let mut busy_until = None;
        let mut free_until = None;
        for interval in intervals {
            if interval.start_minutes <= reference_minutes
                && reference_minutes < interval.end_minutes
            {
                busy_until = Some(clock::to_display(&interval.end_time));
            } else if free_until.is_none() && interval.start_minutes > reference_minutes {
                free_until = Some(clock::to_display(&interval.start_time));
            }
        }

        match busy_until {
            Some(busy_until) => result.busy.push(BusyMember {
                user_id: member.user_id.clone(),
                display_name,
                busy_until,
            }),
            None => result.free.push(FreeMember {
                user_id: member.user_id.clone(),
                display_name,
                free_until,
            }),
        }
    }

    result
}
