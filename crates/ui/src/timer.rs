//! One-shot deferred tasks on a virtual millisecond clock.
//!
//! `TimerQueue` is the shell's only source of "later": every delayed event is
//! an entry here, addressed by a [`TimerHandle`] that can cancel it. The queue
//! never reads a clock itself; callers pass `now_ms` in, which keeps the shell
//! deterministic under test and lets the host drive it from any time source.
//!
//! Capacity is fixed at compile time (no heap).

use heapless::Vec;

/// Cancel handle returned by [`TimerQueue::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(u64);

/// Errors returned by [`TimerQueue`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Every slot is occupied by a pending task.
    QueueFull,
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::QueueFull => write!(f, "timer queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}

#[derive(Debug, Clone, Copy)]
struct Entry<E> {
    handle: TimerHandle,
    due_ms: u64,
    event: E,
}

/// Bounded queue of pending one-shot tasks.
///
/// Entries are kept in scheduling order, so among tasks due at the same
/// instant the one scheduled first fires first.
#[derive(Debug)]
pub struct TimerQueue<E, const N: usize> {
    entries: Vec<Entry<E>, N>,
    next_id: u64,
}

impl<E: Copy, const N: usize> TimerQueue<E, N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        TimerQueue {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire `delay_ms` after `now_ms`.
    ///
    /// The due time saturates at `u64::MAX` rather than wrapping.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, event: E) -> Result<TimerHandle, TimerError> {
        let handle = TimerHandle(self.next_id);
        let entry = Entry {
            handle,
            due_ms: now_ms.saturating_add(delay_ms),
            event,
        };
        self.entries.push(entry).map_err(|_| TimerError::QueueFull)?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(handle)
    }

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Remove and return the earliest task due at or before `now_ms`.
    ///
    /// Call in a loop to drain everything that is due.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<E> {
        self.pop_due_at(now_ms).map(|(_, event)| event)
    }

    /// Like [`pop_due`](Self::pop_due), but also returns the instant the task
    /// was due, which may be earlier than `now_ms` when the host ticks late.
    pub fn pop_due_at(&mut self, now_ms: u64) -> Option<(u64, E)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by_key(|(_, e)| e.due_ms)
            .map(|(i, _)| i)?;
        let entry = self.entries.remove(pos);
        Some((entry.due_ms, entry.event))
    }

    /// Absolute time of the next task, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl<E: Copy, const N: usize> Default for TimerQueue<E, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{TimerError, TimerQueue};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ev {
        A,
        B,
        C,
    }

    #[test]
    fn test_nothing_fires_before_due() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(0, 1500, Ev::A).ok();
        assert_eq!(q.pop_due(1499), None);
        assert_eq!(q.pop_due(1500), Some(Ev::A));
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn test_pop_due_at_reports_due_time() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(2_000, 3_000, Ev::A).ok();
        assert_eq!(q.pop_due_at(5_049), Some((5_000, Ev::A)));
        assert_eq!(q.pop_due_at(5_049), None);
    }

    #[test]
    fn test_fires_earliest_first() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(0, 3000, Ev::A).ok();
        q.schedule(0, 1500, Ev::B).ok();
        assert_eq!(q.pop_due(5000), Some(Ev::B));
        assert_eq!(q.pop_due(5000), Some(Ev::A));
        assert_eq!(q.pop_due(5000), None);
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(0, 100, Ev::C).ok();
        q.schedule(0, 100, Ev::A).ok();
        q.schedule(0, 100, Ev::B).ok();
        assert_eq!(q.pop_due(100), Some(Ev::C));
        assert_eq!(q.pop_due(100), Some(Ev::A));
        assert_eq!(q.pop_due(100), Some(Ev::B));
    }

    #[test]
    fn test_cancel_removes_task() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        let h = q.schedule(0, 10, Ev::A);
        assert!(h.is_ok());
        if let Ok(h) = h {
            assert!(q.is_pending(h));
            assert!(q.cancel(h));
            assert!(!q.is_pending(h));
            assert!(!q.cancel(h), "second cancel is a no-op");
        }
        assert_eq!(q.pop_due(100), None);
    }

    #[test]
    fn test_cancel_after_fire_returns_false() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        if let Ok(h) = q.schedule(0, 10, Ev::A) {
            assert_eq!(q.pop_due(10), Some(Ev::A));
            assert!(!q.cancel(h));
        }
    }

    #[test]
    fn test_queue_full() {
        let mut q: TimerQueue<Ev, 2> = TimerQueue::new();
        assert!(q.schedule(0, 1, Ev::A).is_ok());
        assert!(q.schedule(0, 1, Ev::B).is_ok());
        assert_eq!(q.schedule(0, 1, Ev::C), Err(TimerError::QueueFull));
        assert_eq!(q.pending(), 2);
    }

    #[test]
    fn test_cancel_all() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(0, 1, Ev::A).ok();
        q.schedule(0, 2, Ev::B).ok();
        assert_eq!(q.cancel_all(), 2);
        assert_eq!(q.pending(), 0);
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn test_next_deadline_is_minimum() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(1000, 3000, Ev::A).ok();
        q.schedule(1000, 500, Ev::B).ok();
        assert_eq!(q.next_deadline(), Some(1500));
    }

    #[test]
    fn test_due_time_saturates() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        q.schedule(u64::MAX - 1, 10, Ev::A).ok();
        assert_eq!(q.next_deadline(), Some(u64::MAX));
        assert_eq!(q.pop_due(u64::MAX), Some(Ev::A));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut q: TimerQueue<Ev, 4> = TimerQueue::new();
        let a = q.schedule(0, 1, Ev::A);
        let b = q.schedule(0, 1, Ev::A);
        assert_ne!(a, b);
    }
}
