//! Busy-block persistence port.
//!
//! The engine never performs I/O itself; the surrounding service implements
//! [`BlockStore`] over its relational store. [`MemoryStore`] is the in-memory
//! realization used by the CLI and tests.

use std::collections::{HashMap, HashSet};

use crate::block::{BusyBlock, BusyBlockInput};
use crate::error::Result;

/// Persistence operations for busy blocks, keyed by `(user_id, weekday)`.
pub trait BlockStore {
    /// Atomically replace every stored block for `user_id`.
    ///
    /// An empty list still records the upload: the user is thereafter known,
    /// not unknown.
    fn replace_busy_blocks(&mut self, user_id: &str, blocks: Vec<BusyBlockInput>) -> Result<()>;

    /// Fetch all blocks on `weekday` belonging to any of `user_ids`.
    fn fetch_busy_blocks(&self, weekday: u8, user_ids: &[String]) -> Result<Vec<BusyBlock>>;

    /// Which of `user_ids` have ever uploaded a calendar feed.
    fn fetch_uploaded_user_ids(&self, user_ids: &[String]) -> Result<HashSet<String>>;
}

/// In-memory block store with replace-all-for-user semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blocks: HashMap<String, Vec<BusyBlockInput>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl BlockStore for MemoryStore {
    fn replace_busy_blocks(&mut self, user_id: &str, blocks: Vec<BusyBlockInput>) -> Result<()> {
        self.blocks.insert(user_id.to_string(), blocks);
        Ok(())
    }

    fn fetch_busy_blocks(&self, weekday: u8, user_ids: &[String]) -> Result<Vec<BusyBlock>> {
        let mut rows = Vec::new();
        for user_id in user_ids {
            if let Some(blocks) = self.blocks.get(user_id) {
                rows.extend(
                    blocks
                        .iter()
                        .filter(|block| block.weekday == weekday)
                        .cloned()
                        .map(|block| block.for_user(user_id)),
                );
            }
        }
        Ok(rows)
    }

    fn fetch_uploaded_user_ids(&self, user_ids: &[String]) -> Result<HashSet<String>> {
        Ok(user_ids
            .iter()
            .filter(|user_id| self.blocks.contains_key(*user_id))
            .cloned()
            .collect())
    }
}
