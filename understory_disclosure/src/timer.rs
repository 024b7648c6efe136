// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delay timers: generation tokens, the [`Scheduler`] seam, and a
//! deterministic [`TimerQueue`].
//!
//! ## Tokens, not handles
//!
//! Every timer the controller schedules carries a [`TimerToken`]: the value
//! of the controller's generation counter at schedule time. Cancelling bumps
//! the counter. When a timer fires, the controller compares its token with
//! the one it is waiting for *before* touching any state, so a late or
//! stale callback is a silent no-op. Schedulers are therefore free to
//! deliver a cancelled token anyway; [`Scheduler::cancel`] only lets them
//! drop work early.
//!
//! ## Time
//!
//! Time is a monotonically increasing millisecond count supplied by the
//! host. [`TimerQueue`] never reads a clock; the host calls
//! [`TimerQueue::advance_to`] from its event loop (or a test advances it by
//! hand).

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Generation token identifying one scheduled show timer.
///
/// Tokens increase monotonically for a given controller; a token is only
/// honored if it is the one the controller is currently waiting for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub(crate) u64);

impl TimerToken {
    /// The raw generation value.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Schedules deferred timer callbacks on the host's event loop.
///
/// When a scheduled timer elapses, the host must pass its token to
/// [`DisclosureController::handle_timer`](crate::controller::DisclosureController::handle_timer)
/// on the same thread that delivers input events.
pub trait Scheduler {
    /// Arrange for `token` to be delivered after `delay_ms` milliseconds.
    ///
    /// A delay of `0` means "on the next tick", never synchronously from
    /// within this call.
    fn schedule(&mut self, delay_ms: u64, token: TimerToken);

    /// Best-effort removal of a scheduled timer.
    ///
    /// Delivering a cancelled token is harmless; the default does nothing.
    fn cancel(&mut self, _token: TimerToken) {}
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay_ms: u64, token: TimerToken) {
        (**self).schedule(delay_ms, token);
    }

    fn cancel(&mut self, token: TimerToken) {
        (**self).cancel(token);
    }
}

/// A timer waiting in a [`TimerQueue`].
#[derive(Copy, Clone, Debug)]
struct Entry {
    due: u64,
    /// Insertion order; keeps equal deadlines FIFO.
    seq: u64,
    token: TimerToken,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Reverse order so the earliest deadline is at the top of the heap.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A host-driven timer queue ordered by deadline.
///
/// ```
/// use understory_disclosure::timer::TimerQueue;
///
/// let mut q = TimerQueue::new();
/// assert_eq!(q.next_due(), None);
/// assert!(q.advance_to(50).is_empty());
/// assert_eq!(q.now(), 50);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: u64,
    seq: u64,
    heap: BinaryHeap<Entry>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue whose clock starts at `now`.
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Current time of the queue's clock.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Deadline of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.due)
    }

    /// Time remaining until the earliest pending timer, or zero if it is overdue.
    pub fn current_wait(&self) -> Option<u64> {
        self.next_due().map(|due| due.saturating_sub(self.now))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Move the clock to `now` and return the tokens of every timer that is
    /// due, earliest first.
    ///
    /// Time never runs backwards; an earlier `now` is treated as the current time.
    pub fn advance_to(&mut self, now: u64) -> Vec<TimerToken> {
        self.now = self.now.max(now);
        let mut due = Vec::new();
        while let Some(top) = self.heap.peek() {
            if top.due > self.now {
                break;
            }
            if let Some(e) = self.heap.pop() {
                due.push(e.token);
            }
        }
        due
    }

    /// Advance the clock by `delta` milliseconds. See [`advance_to`](Self::advance_to).
    pub fn advance_by(&mut self, delta: u64) -> Vec<TimerToken> {
        self.advance_to(self.now.saturating_add(delta))
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay_ms: u64, token: TimerToken) {
        self.heap.push(Entry {
            due: self.now.saturating_add(delay_ms),
            seq: self.seq,
            token,
        });
        self.seq += 1;
    }

    fn cancel(&mut self, token: TimerToken) {
        self.heap.retain(|e| e.token != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(100, TimerToken(1));
        q.schedule(10, TimerToken(2));
        q.schedule(100, TimerToken(3));
        assert_eq!(q.next_due(), Some(10));
        assert_eq!(q.current_wait(), Some(10));

        assert!(q.advance_to(9).is_empty());
        assert_eq!(q.advance_to(10), vec![TimerToken(2)]);
        // Equal deadlines keep insertion order.
        assert_eq!(q.advance_to(500), vec![TimerToken(1), TimerToken(3)]);
        assert!(q.is_empty());
    }

    #[test]
    fn zero_delay_waits_for_next_tick() {
        let mut q = TimerQueue::starting_at(40);
        q.schedule(0, TimerToken(7));
        // Scheduling never delivers synchronously; the entry is simply due now.
        assert_eq!(q.len(), 1);
        assert_eq!(q.current_wait(), Some(0));
        assert_eq!(q.advance_to(40), vec![TimerToken(7)]);
    }

    #[test]
    fn cancel_removes_only_matching_token() {
        let mut q = TimerQueue::new();
        q.schedule(50, TimerToken(1));
        q.schedule(60, TimerToken(2));
        q.cancel(TimerToken(1));
        assert_eq!(q.len(), 1);
        assert_eq!(q.advance_to(100), vec![TimerToken(2)]);
        // Cancelling something unknown is fine.
        q.cancel(TimerToken(42));
        assert!(q.is_empty());
    }

    #[test]
    fn clock_does_not_run_backwards() {
        let mut q = TimerQueue::new();
        let _ = q.advance_to(100);
        q.schedule(10, TimerToken(1));
        assert!(q.advance_to(50).is_empty());
        assert_eq!(q.now(), 100);
        assert_eq!(q.advance_by(10), vec![TimerToken(1)]);
        assert_eq!(q.now(), 110);
    }
}
