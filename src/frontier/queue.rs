//! FIFO work-list of vertex IDs used by breadth-first traversal.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, VertexId};

/// A vertex ID with a caller-defined tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry<T> {
    pub vertex: VertexId,
    pub tag: T,
}

/// First-in, first-out queue of tagged vertex IDs.
///
/// The queue exclusively owns its entries; `pop` hands ownership back to the
/// caller.
#[derive(Debug, Clone)]
pub struct FrontierQueue<T = ()> {
    entries: VecDeque<QueueEntry<T>>,
}

impl<T> FrontierQueue<T> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Create an empty queue able to hold `capacity` entries without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry at the back.
    pub fn push(&mut self, vertex: VertexId, tag: T) {
        self.entries.push_back(QueueEntry { vertex, tag });
    }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> GraphResult<QueueEntry<T>> {
        self.entries.pop_front().ok_or(GraphError::Empty)
    }

    /// The oldest entry, without removing it.
    pub fn peek(&self) -> Option<&QueueEntry<T>> {
        self.entries.front()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for FrontierQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
