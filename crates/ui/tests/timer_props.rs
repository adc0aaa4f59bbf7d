//! Property tests for the deferred-task queue.

use ui::timer::TimerQueue;

proptest::proptest! {
    /// Whatever order tasks are scheduled in, they fire in due-time order and
    /// every task fires exactly once.
    #[test]
    fn fires_in_due_order(delays in proptest::collection::vec(0u64..10_000, 0..8)) {
        let mut q: TimerQueue<usize, 8> = TimerQueue::new();
        for (i, d) in delays.iter().enumerate() {
            assert!(q.schedule(0, *d, i).is_ok());
        }
        let mut fired = Vec::new();
        while let Some(i) = q.pop_due(u64::MAX) {
            fired.push(i);
        }
        assert_eq!(fired.len(), delays.len());
        for pair in fired.windows(2) {
            assert!(delays[pair[0]] <= delays[pair[1]]);
        }
    }

    /// Cancelled tasks never fire; the rest still do.
    #[test]
    fn cancelled_tasks_never_fire(
        delays in proptest::collection::vec(0u64..10_000, 1..8),
        mask in proptest::collection::vec(proptest::bool::ANY, 8),
    ) {
        let mut q: TimerQueue<usize, 8> = TimerQueue::new();
        let mut handles = Vec::new();
        for (i, d) in delays.iter().enumerate() {
            handles.push(q.schedule(0, *d, i).ok());
        }
        let mut kept = Vec::new();
        for (i, h) in handles.iter().enumerate() {
            if mask[i] {
                if let Some(h) = h {
                    assert!(q.cancel(*h));
                }
            } else {
                kept.push(i);
            }
        }
        let mut fired = Vec::new();
        while let Some(i) = q.pop_due(u64::MAX) {
            fired.push(i);
        }
        fired.sort_unstable();
        assert_eq!(fired, kept);
    }

    /// A task never fires before its due time.
    #[test]
    fn never_fires_early(now in 0u64..1_000_000, delay in 1u64..1_000_000) {
        let mut q: TimerQueue<(), 1> = TimerQueue::new();
        assert!(q.schedule(now, delay, ()).is_ok());
        assert_eq!(q.pop_due(now + delay - 1), None);
        assert_eq!(q.pop_due(now + delay), Some(()));
    }
}
