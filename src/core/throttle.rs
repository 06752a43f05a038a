//! Fixed-interval cooldown used to throttle navigation gestures.
//!
//! Activations that arrive while the cooldown runs are dropped, not queued.

use std::time::{Duration, Instant};

/// An owned cooldown timer.
#[derive(Debug, Clone)]
pub struct Cooldown {
    interval: Duration,
    /// Instant at which the cooldown expires.  `None` = never activated.
    until: Option<Instant>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            until: None,
        }
    }

    /// `true` while a previous activation still blocks new ones.
    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Try to activate.  Returns `true` and starts a new cooldown window
    /// when none is running; returns `false` (and changes nothing) otherwise.
    pub fn try_activate(&mut self, now: Instant) -> bool {
        if self.is_active(now) {
            return false;
        }
        self.until = Some(now + self.interval);
        true
    }

    pub fn reset(&mut self) {
        self.until = None;
    }
}
