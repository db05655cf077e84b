//! A cancellable debounce timer.
//!
//! The storefront's only asynchronous primitive: query keystrokes re-arm
//! a single pending deadline instead of queueing work. The owner drives
//! the timer explicitly with [`Debouncer::poll`], so there is no
//! event-loop dependency and tests pass synthetic clocks.

use std::time::{Duration, Instant};

/// Single-deadline debounce timer: last arm wins.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a timer with a fixed delay
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arm the timer; any pending deadline is replaced.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is pending
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed.
    ///
    /// Returns `true` at most once per arm; the deadline is consumed on
    /// fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The configured delay
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
