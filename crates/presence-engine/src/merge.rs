//! Busy-interval merging on the minute-of-day scale.
//!
//! Converts one weekday's busy-block rows into per-user interval lists,
//! sorts them, and coalesces overlapping or back-to-back intervals into a
//! minimal disjoint set. Back-to-back blocks merge deliberately: a person
//! walking straight from one commitment into the next has no free gap.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::block::BusyBlock;
use crate::clock;

/// A merged busy window on the `[0, 1440)` minute-of-day scale.
///
/// Carries the originating clock strings so display labels survive merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    pub start_minutes: f64,
    pub end_minutes: f64,
    pub start_time: String,
    pub end_time: String,
}

/// Merge one weekday's busy-block rows, grouped by user.
///
/// Rows whose clock strings convert to a non-finite or non-increasing minute
/// pair are discarded. Each user's output is sorted ascending by start and
/// pairwise non-overlapping and non-adjacent.
pub fn merge_blocks(blocks: &[BusyBlock]) -> HashMap<String, Vec<Interval>> {
    let mut by_user: HashMap<String, Vec<Interval>> = HashMap::new();

    for block in blocks {
        let start_minutes = clock::to_minutes(&block.start_time);
        let end_minutes = clock::to_minutes(&block.end_time);
        if !start_minutes.is_finite() || !end_minutes.is_finite() || end_minutes <= start_minutes {
            debug!(
                "discarding degenerate block {}..{} for {}",
                block.start_time, block.end_time, block.user_id
            );
            continue;
        }
        by_user
            .entry(block.user_id.clone())
            .or_default()
            .push(Interval {
                start_minutes,
                end_minutes,
                start_time: block.start_time.clone(),
                end_time: block.end_time.clone(),
            });
    }

    for intervals in by_user.values_mut() {
        *intervals = merge_intervals(std::mem::take(intervals));
    }

    by_user
}

/// Coalesce one user's intervals into a minimal sorted disjoint set.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    // Sort by start minute (then end minute for stability).
    intervals.sort_by(|a, b| {
        a.start_minutes
            .total_cmp(&b.start_minutes)
            .then(a.end_minutes.total_cmp(&b.end_minutes))
    });

    let mut merged: Vec<Interval> = Vec::new();
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start_minutes <= last.end_minutes {
                // Overlapping or back-to-back — extend the running interval.
                if interval.end_minutes > last.end_minutes {
                    last.end_minutes = interval.end_minutes;
                    last.end_time = interval.end_time;
                }
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
