//! Frame driver — one eased translation of the section stack.
//!
//! A [`Translation`] is sampled once per animation frame.  The first frame
//! pins the start time; every frame after that yields the eased position
//! for the elapsed time and whether another frame is needed.

use std::time::{Duration, Instant};

use super::easing::cubic_ease_in_out;
use super::session::SessionToken;

/// Fraction of the duration after which the destination's content is revealed.
pub const DEFAULT_BREAKPOINT: f64 = 1.0 / 3.0;

/// Result of sampling one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Position to apply, in percent.  Never above `0`.
    pub position: f64,
    pub elapsed: Duration,
    /// `true` on exactly one frame per translation: the first one at or
    /// past the breakpoint.
    pub reached_breakpoint: bool,
    /// `true` if the translation wants another frame.
    pub more: bool,
}

/// An in-flight move of the stack from one position to another.
#[derive(Debug, Clone)]
pub struct Translation {
    session: SessionToken,
    from: f64,
    to: f64,
    duration: Duration,
    /// Index of the destination section, if the target hash matched one.
    target: Option<usize>,
    breakpoint: f64,
    started_at: Option<Instant>,
    breakpoint_fired: bool,
    finished: bool,
}

impl Translation {
    pub fn new(
        session: SessionToken,
        from: i32,
        to: i32,
        duration: Duration,
        target: Option<usize>,
    ) -> Self {
        Self {
            session,
            from: f64::from(from),
            to: f64::from(to),
            duration,
            target,
            breakpoint: DEFAULT_BREAKPOINT,
            started_at: None,
            breakpoint_fired: false,
            finished: false,
        }
    }

    /// Override the breakpoint fraction (clamped to `[0, 1]`).
    pub fn with_breakpoint(mut self, fraction: f64) -> Self {
        self.breakpoint = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn session(&self) -> SessionToken {
        self.session
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sample the translation at `timestamp`.
    ///
    /// Elapsed time is clamped to the duration before easing, so the last
    /// frame lands exactly on the target instead of overshooting it.
    pub fn frame(&mut self, timestamp: Instant) -> Frame {
        let start = *self.started_at.get_or_insert(timestamp);
        let elapsed = timestamp.saturating_duration_since(start);

        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        let elapsed_ms = (elapsed.as_secs_f64() * 1000.0).min(duration_ms);

        let position = cubic_ease_in_out(elapsed_ms, self.from, self.to - self.from, duration_ms)
            .min(0.0);

        let reached_breakpoint =
            !self.breakpoint_fired && elapsed_ms >= duration_ms * self.breakpoint;
        if reached_breakpoint {
            self.breakpoint_fired = true;
        }

        let more = elapsed < self.duration;
        self.finished = !more;

        Frame {
            position,
            elapsed,
            reached_breakpoint,
            more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionCounter;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn translation(from: i32, to: i32) -> Translation {
        let token = SessionCounter::new().begin();
        Translation::new(token, from, to, ms(1200), Some(1))
    }

    #[test]
    fn first_frame_pins_start() {
        let t0 = Instant::now() + ms(5_000);
        let mut tr = translation(0, -100);
        let f = tr.frame(t0);
        assert_eq!(f.elapsed, Duration::ZERO);
        assert_eq!(f.position, 0.0);
        assert!(f.more);
    }

    #[test]
    fn terminates_once_duration_elapses() {
        let t0 = Instant::now();
        let mut tr = translation(-100, 0);
        let mut frames = 0;
        let mut last = tr.frame(t0);
        while last.more {
            frames += 1;
            last = tr.frame(t0 + ms(16 * frames));
            assert!(frames < 100, "never terminated");
        }
        assert!(last.elapsed >= ms(1200));
        assert!(last.elapsed < ms(1200 + 16));
        assert_eq!(last.position, 0.0);
        assert!(tr.is_finished());
    }

    #[test]
    fn late_frame_lands_on_target() {
        let t0 = Instant::now();
        let mut tr = translation(-100, -300);
        tr.frame(t0);
        let f = tr.frame(t0 + ms(5_000));
        assert_eq!(f.position, -300.0);
        assert!(!f.more);
    }

    #[test]
    fn never_exceeds_endpoint_magnitude() {
        let t0 = Instant::now();
        for &(from, to) in &[(0, -300), (-300, 0), (-100, -200), (-200, -100)] {
            let mut tr = translation(from, to);
            let bound = f64::from(from.abs().max(to.abs()));
            for step in 0..=100u64 {
                let f = tr.frame(t0 + ms(step * 17));
                assert!(f.position.abs() <= bound + 1e-9, "{from}->{to} at {step}");
                assert!(f.position <= 0.0);
            }
        }
    }

    #[test]
    fn breakpoint_fires_exactly_once() {
        let t0 = Instant::now();
        let mut tr = translation(0, -100);
        let fired: Vec<bool> = [0, 100, 399, 400, 401, 402, 800, 1200]
            .iter()
            .map(|&n| tr.frame(t0 + ms(n)).reached_breakpoint)
            .collect();
        assert_eq!(fired.iter().filter(|&&f| f).count(), 1);
        assert!(fired[3], "should fire at duration / 3");
    }

    #[test]
    fn breakpoint_fires_even_when_first_late_frame_skips_past_it() {
        let t0 = Instant::now();
        let mut tr = translation(0, -100).with_breakpoint(0.5);
        assert!(!tr.frame(t0).reached_breakpoint);
        assert!(tr.frame(t0 + ms(1_500)).reached_breakpoint);
    }
}
