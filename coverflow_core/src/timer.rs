// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polled timer queue with explicit, cancellable handles.
//!
//! [`TimerQueue`] stands in for the host's `setTimeout`/`setInterval`. Entries
//! are scheduled against a [`HostTime`] deadline and fire only when the owner
//! calls [`pop_due`](TimerQueue::pop_due) with a time at or past that deadline.
//! This keeps all deferred work deterministic and testable without a real
//! event loop.
//!
//! Ordering: due entries fire in deadline order; entries sharing a deadline
//! fire in the order they were scheduled. A repeating entry keeps its phase:
//! it is re-armed on the period grid anchored at its first deadline. A late
//! poll fires it once, at the latest missed grid point, and skips the other
//! missed periods, the way a host interval timer does not burst after the
//! page was suspended.

use alloc::vec::Vec;
use core::fmt;

use crate::time::{Duration, HostTime};

/// Handle to a scheduled timer.
///
/// Handles are never reused within a queue, so cancelling a stale handle is
/// always a harmless no-op.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

/// Whether a timer fires once or keeps firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// Fire once, then drop out of the queue.
    Once,
    /// Fire every period until cancelled.
    Every(Duration),
}

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// Handle of the timer that fired.
    pub id: TimerId,
    /// The deadline that was reached (not the poll time).
    ///
    /// For a repeating timer polled late this is the latest missed period.
    pub deadline: HostTime,
    /// Caller-supplied payload.
    pub payload: T,
}

#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: HostTime,
    recurrence: Recurrence,
    payload: T,
}

/// A small deadline queue keyed by [`TimerId`].
///
/// Linear scans are fine here: a carousel holds at most a couple of live
/// timers.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of live timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is still live.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Counts live timers whose payload matches `pred`.
    #[must_use]
    pub fn count_matching(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.payload)).count()
    }

    /// Schedules `payload` to fire once at `deadline`.
    pub fn schedule_once(&mut self, deadline: HostTime, payload: T) -> TimerId {
        self.push(deadline, Recurrence::Once, payload)
    }

    /// Schedules `payload` to fire every `period`, first at `start + period`.
    ///
    /// A zero period is bumped to one millisecond so a single poll can never
    /// spin forever.
    pub fn schedule_every(&mut self, start: HostTime, period: Duration, payload: T) -> TimerId {
        let period = if period.is_zero() {
            Duration::from_millis(1)
        } else {
            period
        };
        self.push(start.saturating_add(period), Recurrence::Every(period), payload)
    }

    /// Cancels a timer.
    ///
    /// Returns `true` if the timer was live. Cancelling an unknown, fired, or
    /// already-cancelled handle returns `false` and changes nothing.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Removes every timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, deadline: HostTime, recurrence: Recurrence, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            recurrence,
            payload,
        });
        id
    }
}

impl<T: Copy> TimerQueue<T> {
    /// Pops the next timer due at or before `now`.
    ///
    /// One-shot timers are removed. A repeating timer fires at most once per
    /// poll: missed periods collapse into one fire and the timer is re-armed
    /// at the first grid point after `now`. Call in a loop to drain.
    pub fn pop_due(&mut self, now: HostTime) -> Option<Fired<T>> {
        let (deadline, _, i) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(i, e)| (e.latest_due(now), e.id, i))
            .min()?;

        let entry = self.entries[i];
        match entry.recurrence {
            Recurrence::Once => {
                self.entries.remove(i);
            }
            Recurrence::Every(period) => {
                self.entries[i].deadline = deadline.saturating_add(period);
            }
        }

        Some(Fired {
            id: entry.id,
            deadline,
            payload: entry.payload,
        })
    }
}

impl<T> Entry<T> {
    /// The latest point on this entry's schedule at or before `now`.
    fn latest_due(&self, now: HostTime) -> HostTime {
        match self.recurrence {
            Recurrence::Once => self.deadline,
            Recurrence::Every(period) => {
                let period_ms = period.as_millis().max(1);
                let behind = now.saturating_duration_since(self.deadline).as_millis();
                self.deadline.saturating_add(Duration(behind - behind % period_ms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn drain(q: &mut TimerQueue<char>, now: u64) -> Vec<(u64, char)> {
        let mut out = Vec::new();
        while let Some(f) = q.pop_due(HostTime(now)) {
            out.push((f.deadline.as_millis(), f.payload));
        }
        out
    }

    #[test]
    fn once_fires_at_deadline_and_is_removed() {
        let mut q = TimerQueue::new();
        let id = q.schedule_once(HostTime(600), 'a');
        assert!(q.pop_due(HostTime(599)).is_none());
        let fired = q.pop_due(HostTime(600)).unwrap();
        assert_eq!(fired.id, id);
        assert_eq!(fired.payload, 'a');
        assert!(q.is_empty());
        assert!(!q.is_scheduled(id));
    }

    #[test]
    fn repeating_fires_once_per_period_when_polled_on_time() {
        let mut q = TimerQueue::new();
        q.schedule_every(HostTime(0), Duration(4000), 't');
        assert!(drain(&mut q, 3999).is_empty());
        assert_eq!(drain(&mut q, 4000), [(4000, 't')]);
        assert_eq!(drain(&mut q, 8100), [(8000, 't')]);
        assert_eq!(q.next_deadline(), Some(HostTime(12_000)));
    }

    #[test]
    fn late_poll_collapses_missed_periods() {
        let mut q = TimerQueue::new();
        q.schedule_every(HostTime(0), Duration(4000), 't');
        assert_eq!(drain(&mut q, 12_500), [(12_000, 't')]);
        assert_eq!(q.next_deadline(), Some(HostTime(16_000)));
    }

    #[test]
    fn long_gap_fires_once_and_keeps_the_phase() {
        let mut q = TimerQueue::new();
        q.schedule_every(HostTime(100), Duration(4000), 't');
        assert_eq!(drain(&mut q, 3_600_000), [(3_596_100, 't')]);
        assert_eq!(q.next_deadline(), Some(HostTime(3_600_100)));
        assert_eq!(drain(&mut q, 3_600_100), [(3_600_100, 't')]);
    }

    #[test]
    fn late_poll_still_orders_against_one_shots() {
        let mut q = TimerQueue::new();
        q.schedule_every(HostTime(0), Duration(4000), 't');
        q.schedule_once(HostTime(600), 's');
        q.schedule_once(HostTime(9000), 'u');
        assert_eq!(drain(&mut q, 12_500), [(600, 's'), (9000, 'u'), (12_000, 't')]);
    }

    #[test]
    fn due_entries_fire_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule_once(HostTime(50), 'c');
        q.schedule_once(HostTime(10), 'a');
        q.schedule_once(HostTime(50), 'd');
        q.schedule_once(HostTime(20), 'b');
        assert_eq!(
            drain(&mut q, 100),
            [(10, 'a'), (20, 'b'), (50, 'c'), (50, 'd')]
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = TimerQueue::new();
        let id = q.schedule_every(HostTime(0), Duration(10), 'x');
        assert!(q.cancel(id));
        assert!(!q.cancel(id), "second cancel is a no-op");
        assert!(q.pop_due(HostTime(1000)).is_none());
    }

    #[test]
    fn cancelled_handle_does_not_hit_new_timer() {
        let mut q = TimerQueue::new();
        let old = q.schedule_once(HostTime(5), 'o');
        q.cancel(old);
        let new = q.schedule_once(HostTime(5), 'n');
        assert_ne!(old, new);
        assert!(!q.cancel(old));
        assert!(q.is_scheduled(new));
    }

    #[test]
    fn zero_period_is_bumped() {
        let mut q = TimerQueue::new();
        q.schedule_every(HostTime(0), Duration::ZERO, 'z');
        assert_eq!(drain(&mut q, 3), [(3, 'z')]);
        assert_eq!(q.next_deadline(), Some(HostTime(4)));
        assert_eq!(drain(&mut q, 4), [(4, 'z')]);
    }

    #[test]
    fn count_matching_filters_payloads() {
        let mut q = TimerQueue::new();
        q.schedule_once(HostTime(1), 'a');
        q.schedule_once(HostTime(2), 'b');
        q.schedule_once(HostTime(3), 'a');
        assert_eq!(q.count_matching(|p| *p == 'a'), 2);
        q.clear();
        assert_eq!(q.len(), 0);
    }
}
