//! Scoped periodic tasks.
//!
//! Each interval is owned by an [`IntervalHandle`]. Dropping the handle cancels the
//! interval on the spot, so a torn-down carousel can never receive another tick.

use std::{cell::Cell, rc::Rc};

use log::debug;

/// Upper bound on ticks reported for one interval in a single `due` call. A host that
/// stalled for longer than this skips the backlog instead of replaying it.
const MAX_CATCH_UP_TICKS: u32 = 64;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IntervalId(u32);

#[derive(Debug)]
struct Entry {
    id: IntervalId,
    period_ms: u64,
    next_due_ms: u64,
    live: Rc<Cell<bool>>,
}

#[derive(Debug, Default)]
pub struct IntervalScheduler {
    entries: Vec<Entry>,
    next_id: u32,
}

/// Keeps an interval alive. The interval stops when this is dropped.
#[derive(Debug)]
#[must_use = "dropping the handle cancels the interval"]
pub struct IntervalHandle {
    id: IntervalId,
    period_ms: u64,
    live: Rc<Cell<bool>>,
}

impl IntervalHandle {
    pub const fn id(&self) -> IntervalId {
        self.id
    }

    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an interval whose first tick is due one period after `now_ms`.
    pub fn start(&mut self, period_ms: u64, now_ms: u64) -> IntervalHandle {
        let period_ms = period_ms.max(1);
        let id = IntervalId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let live = Rc::new(Cell::new(true));
        self.entries.push(Entry {
            id,
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
            live: Rc::clone(&live),
        });
        debug!("scheduler: start id={} period_ms={}", id.0, period_ms);

        IntervalHandle {
            id,
            period_ms,
            live,
        }
    }

    /// Collects the intervals due at `now_ms`, once per elapsed period, in start order.
    /// Cancelled intervals are purged first and never reported.
    pub fn due(&mut self, now_ms: u64) -> Vec<IntervalId> {
        self.purge();

        let mut fired = Vec::new();
        for entry in &mut self.entries {
            let mut ticks = 0u32;
            while entry.next_due_ms <= now_ms && ticks < MAX_CATCH_UP_TICKS {
                fired.push(entry.id);
                entry.next_due_ms = entry.next_due_ms.saturating_add(entry.period_ms);
                ticks += 1;
            }
            if entry.next_due_ms <= now_ms {
                debug!(
                    "scheduler: id={} fell behind; skipping to now_ms={}",
                    entry.id.0, now_ms
                );
                entry.next_due_ms = now_ms.saturating_add(entry.period_ms);
            }
        }
        fired
    }

    /// Earliest deadline among live intervals.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.entries
            .iter()
            .filter(|entry| entry.live.get())
            .map(|entry| entry.next_due_ms)
            .min()
    }

    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.live.get()).count()
    }

    fn purge(&mut self) {
        self.entries.retain(|entry| {
            let live = entry.live.get();
            if !live {
                debug!("scheduler: drop id={}", entry.id.0);
            }
            live
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut scheduler = IntervalScheduler::new();
        let handle = scheduler.start(100, 0);

        assert!(scheduler.due(99).is_empty());
        assert_eq!(scheduler.due(100), vec![handle.id()]);
        assert!(scheduler.due(150).is_empty());
        assert_eq!(scheduler.due(350), vec![handle.id(), handle.id()]);
        assert_eq!(scheduler.next_deadline_ms(), Some(400));
    }

    #[test]
    fn dropped_handle_never_fires_again() {
        let mut scheduler = IntervalScheduler::new();
        let kept = scheduler.start(100, 0);
        let dropped = scheduler.start(100, 0);
        let dropped_id = dropped.id();

        assert_eq!(scheduler.due(100), vec![kept.id(), dropped_id]);
        drop(dropped);

        let fired = scheduler.due(1_000);
        assert!(!fired.contains(&dropped_id));
        assert_eq!(fired.len(), 9);
        assert_eq!(scheduler.live_count(), 1);
    }

    #[test]
    fn cancel_before_first_tick() {
        let mut scheduler = IntervalScheduler::new();
        let handle = scheduler.start(5_200, 0);
        drop(handle);
        assert!(scheduler.due(60_000).is_empty());
        assert_eq!(scheduler.next_deadline_ms(), None);
    }

    #[test]
    fn stalled_host_skips_backlog() {
        let mut scheduler = IntervalScheduler::new();
        let handle = scheduler.start(1, 0);

        let fired = scheduler.due(10_000);
        assert_eq!(fired.len(), MAX_CATCH_UP_TICKS as usize);
        assert_eq!(scheduler.next_deadline_ms(), Some(10_001));
        assert!(handle.is_live());
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut scheduler = IntervalScheduler::new();
        let handle = scheduler.start(0, 50);
        assert_eq!(handle.period_ms(), 1);
        assert_eq!(scheduler.due(51), vec![handle.id()]);
    }
}
