//! `EventQueue`: pending wake-ups ordered by time, then by insertion.
//!
//! # Why a `BTreeMap`
//!
//! The key `(SimTime, u64)` is unique because the sequence number is never
//! reused, so every event gets its own entry.  `BTreeMap` gives O(log n)
//! insert and O(log n) `pop_first`, and iterating keys in order is exactly
//! "earliest first, ties in scheduling order".  A `BinaryHeap` would need a
//! reversed `Ord` wrapper to get the same thing.

use std::collections::BTreeMap;

use qn_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

/// One popped event: when it fires, its tiebreaker, and what it resumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    pub wake_time:   SimTime,
    pub sequence_id: u64,
    pub payload:     T,
}

/// A priority queue of future wake-ups carrying continuation payloads `T`.
pub struct EventQueue<T> {
    inner:    BTreeMap<(SimTime, u64), T>,
    next_seq: u64,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), next_seq: 0 }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire at `wake_time` and return its sequence id.
    ///
    /// Sequence ids start at 0 and increase by one per call, across all
    /// wake times.
    pub fn schedule(&mut self, wake_time: SimTime, payload: T) -> ScheduleResult<u64> {
        if !wake_time.is_valid() {
            return Err(ScheduleError::InvalidTime(wake_time));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.insert((wake_time, seq), payload);
        Ok(seq)
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop_earliest(&mut self) -> Option<Event<T>> {
        let ((wake_time, sequence_id), payload) = self.inner.pop_first()?;
        Some(Event { wake_time, sequence_id, payload })
    }

    /// Wake time of the earliest pending event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(t, _)| t)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of events ever scheduled on this queue.
    pub fn scheduled_count(&self) -> u64 {
        self.next_seq
    }
}
