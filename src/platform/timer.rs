//! Virtual-time task queue.
//!
//! Tasks are scheduled relative to the queue's clock, which only moves when
//! the host calls [`TimerQueue::advance`]. Expired tasks come back in due
//! order; tasks due at the same instant keep their scheduling order.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run `task` once `after` has elapsed.
    pub fn schedule(&mut self, after: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Entry {
            due: self.now + after,
            seq,
            task,
        });
    }

    /// Move the clock forward and take every task that is now due.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|entry| entry.due <= now);
        self.pending = pending;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }
}
