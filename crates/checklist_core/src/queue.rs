//! Deferred mutation queue.
//!
//! # Responsibility
//! - Buffer structural edits requested while a render pass reads the list.
//! - Apply them in FIFO order at the update tick.
//!
//! # Invariants
//! - Every enqueued edit runs exactly once, on the next `drain`.
//! - Edits enqueued while a drain is running wait for the following drain.

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

type Edit<T> = Box<dyn FnOnce(&mut T)>;

/// FIFO buffer of deferred edits against a `T`.
pub struct EditQueue<T> {
    pending: VecDeque<Edit<T>>,
}

impl<T> Default for EditQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> Debug for EditQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditQueue")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<T> EditQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edit to run on the next drain.
    pub fn enqueue<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut T) + 'static,
    {
        self.pending.push_back(Box::new(edit));
    }

    /// Runs every edit queued before this call against `target`.
    ///
    /// Returns the number of edits applied. The batch is detached from the
    /// queue before the first edit runs.
    pub fn drain(&mut self, target: &mut T) -> usize {
        let batch = std::mem::take(&mut self.pending);
        let applied = batch.len();
        for edit in batch {
            edit(target);
        }
        applied
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::EditQueue;

    #[test]
    fn drain_runs_in_fifo_order() {
        let mut queue = EditQueue::new();
        queue.enqueue(|log: &mut Vec<u32>| log.push(1));
        queue.enqueue(|log: &mut Vec<u32>| log.push(2));
        queue.enqueue(|log: &mut Vec<u32>| log.push(3));

        let mut log = Vec::new();
        assert_eq!(queue.drain(&mut log), 3);
        assert_eq!(log, [1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_on_empty_queue_is_noop() {
        let mut queue: EditQueue<Vec<u32>> = EditQueue::new();
        let mut log = vec![7];
        assert_eq!(queue.drain(&mut log), 0);
        assert_eq!(log, [7]);
    }

    #[test]
    fn second_drain_does_not_replay_edits() {
        let mut queue = EditQueue::new();
        queue.enqueue(|count: &mut u32| *count += 1);

        let mut count = 0;
        queue.drain(&mut count);
        queue.drain(&mut count);
        assert_eq!(count, 1);
    }
}
