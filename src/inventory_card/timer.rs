//! Single-slot timers for the render pipeline.
//!
//! A [`SlotTimer`] holds at most one pending deadline. The host drives time
//! explicitly: every entry point takes `now`, nothing is sampled internally,
//! so debounce behavior is fully deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SlotTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl SlotTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Cancel-and-restart arming: trailing-edge debounce.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Arms the slot but keeps an earlier pending deadline. Used for the
    /// post-save refresh, which must not be pushed back by repeated calls.
    pub fn arm_earliest(&mut self, now: Instant) {
        let next = now + self.period;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing <= next => existing,
            _ => next,
        });
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline when it has elapsed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fires immediately if armed, regardless of the deadline.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
