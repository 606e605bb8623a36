//! Ascending-distance frontier for shortest-path search.
//!
//! Entries are keyed by `(distance, sequence)` in a `BTreeMap`, so the
//! smallest distance is always first and equal distances come out in the
//! order they were inserted. Entries are never updated in place: a relaxed
//! vertex gets a fresh entry and the stale one is skipped by the caller at
//! extraction time.

use std::collections::BTreeMap;

use crate::types::{GraphError, GraphResult, VertexId, Weight};

/// A (vertex, tentative distance) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub vertex: VertexId,
    pub distance: Weight,
}

/// Extract-min container ordered by tentative distance.
#[derive(Debug, Clone, Default)]
pub struct DistanceFrontier {
    entries: BTreeMap<(Weight, u64), VertexId>,
    next_seq: u64,
}

impl DistanceFrontier {
    /// Create a new, empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry behind every entry with distance <= `distance`.
    /// Duplicate vertices are allowed.
    pub fn insert(&mut self, vertex: VertexId, distance: Weight) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((distance, seq), vertex);
        log::trace!("frontier insert ({}, {}), size {}", vertex, distance, self.entries.len());
    }

    /// Remove and return the entry with the smallest distance.
    pub fn extract_min(&mut self) -> GraphResult<FrontierEntry> {
        let ((distance, _), vertex) = self.entries.pop_first().ok_or(GraphError::Empty)?;
        Ok(FrontierEntry { vertex, distance })
    }

    /// The entry `extract_min` would return next.
    pub fn peek_min(&self) -> Option<FrontierEntry> {
        self.entries
            .iter()
            .next()
            .map(|(&(distance, _), &vertex)| FrontierEntry { vertex, distance })
    }

    /// Entries from smallest to largest distance.
    pub fn iter(&self) -> impl Iterator<Item = FrontierEntry> + '_ {
        self.entries
            .iter()
            .map(|(&(distance, _), &vertex)| FrontierEntry { vertex, distance })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
