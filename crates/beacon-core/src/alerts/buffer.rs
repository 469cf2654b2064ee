//! Bounded, newest-first alert buffer.
//!
//! Holds the most recent alerts in memory. Nothing is persisted; a restart
//! starts from an empty buffer.

use std::collections::VecDeque;

use parking_lot::RwLock;
use tracing::trace;

use super::types::Alert;

/// Number of alerts retained when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Ring buffer of received alerts, newest at the front.
///
/// Insertion and trimming happen under a single write lock, so concurrent
/// writers can never push the buffer past its capacity or drop each other's
/// entries. Readers get an owned snapshot taken under the read lock.
#[derive(Debug)]
pub struct AlertBuffer {
    entries: RwLock<VecDeque<Alert>>,
    capacity: usize,
}

impl AlertBuffer {
    /// Creates an empty buffer retaining at most `capacity` alerts.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: RwLock::new(VecDeque::with_capacity(capacity)), capacity }
    }

    /// Adds an alert at the front, discarding the oldest entries beyond capacity.
    ///
    /// Returns the buffer length after the insert.
    pub fn push(&self, alert: Alert) -> usize {
        let mut entries = self.entries.write();

        entries.push_front(alert);
        if entries.len() > self.capacity {
            entries.truncate(self.capacity);
            trace!(capacity = self.capacity, "Evicted oldest alert");
        }

        entries.len()
    }

    /// Returns all retained alerts, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Alert> {
        self.entries.read().iter().cloned().collect()
    }

    /// Returns the current number of alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Maximum number of alerts retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AlertBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
