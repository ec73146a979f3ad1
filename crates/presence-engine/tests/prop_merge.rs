//! Property-based tests for interval merging using proptest.
//!
//! These verify invariants that should hold for *any* block list, not just
//! the examples in `merge_tests.rs`.

use proptest::prelude::*;

use presence_engine::block::BusyBlock;
use presence_engine::merge::{merge_blocks, merge_intervals, Interval};

/// Render a minute offset as a `"HH:MM:00"` clock string.
fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

/// Generate a block with `start < end` on a whole-minute grid.
fn arb_block() -> impl Strategy<Value = BusyBlock> {
    (0u32..1439, 1u32..=120).prop_map(|(start, len)| {
        let end = (start + len).min(1440);
        BusyBlock {
            user_id: "u".to_string(),
            weekday: 1,
            start_time: clock(start),
            end_time: clock(end),
        }
    })
}

fn merged(blocks: &[BusyBlock]) -> Vec<Interval> {
    merge_blocks(blocks).remove("u").unwrap_or_default()
}

/// Whether `minute` falls inside any of the input blocks.
fn input_covers(blocks: &[BusyBlock], minute: f64) -> bool {
    blocks.iter().any(|b| {
        let start = presence_engine::clock::to_minutes(&b.start_time);
        let end = presence_engine::clock::to_minutes(&b.end_time);
        start <= minute && minute < end
    })
}

proptest! {
    #[test]
    fn output_is_sorted_disjoint_and_non_adjacent(blocks in prop::collection::vec(arb_block(), 0..40)) {
        let intervals = merged(&blocks);
        for pair in intervals.windows(2) {
            prop_assert!(
                pair[1].start_minutes > pair[0].end_minutes,
                "intervals must be strictly separated: {:?}",
                pair
            );
        }
    }

    #[test]
    fn every_interval_is_well_formed(blocks in prop::collection::vec(arb_block(), 0..40)) {
        for interval in merged(&blocks) {
            prop_assert!(interval.start_minutes < interval.end_minutes);
            prop_assert!(interval.start_minutes >= 0.0);
            prop_assert!(interval.end_minutes <= 1440.0);
        }
    }

    #[test]
    fn merging_is_idempotent(blocks in prop::collection::vec(arb_block(), 0..40)) {
        let once = merged(&blocks);
        let twice = merge_intervals(once.clone());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn minute_coverage_is_preserved(
        blocks in prop::collection::vec(arb_block(), 1..40),
        probe in 0u32..1440,
    ) {
        let minute = probe as f64;
        let in_input = input_covers(&blocks, minute);
        let in_merged = merged(&blocks)
            .iter()
            .any(|iv| iv.start_minutes <= minute && minute < iv.end_minutes);
        prop_assert_eq!(in_input, in_merged, "coverage differs at minute {}", probe);
    }

    #[test]
    fn inverted_blocks_never_survive(
        mut blocks in prop::collection::vec(arb_block(), 1..20),
    ) {
        // Invert every block; nothing should come out the other side.
        for block in &mut blocks {
            std::mem::swap(&mut block.start_time, &mut block.end_time);
        }
        prop_assert!(merged(&blocks).is_empty());
    }
}
