//! Cubic ease-in/out interpolation (Robert Penner's symmetric cubic).
//!
//! Time and duration share whatever unit the caller picks; the section
//! transitions use milliseconds.

/// Interpolate a position at `elapsed` along a cubic ease-in/out curve.
///
/// The first half of `duration` accelerates (ease-in), the second half
/// decelerates (ease-out).  `delta` is `target - start`.
///
/// No bounds checking: values of `elapsed` outside `[0, duration]` keep
/// following the polynomial, so callers that need a bounded result must
/// clamp first.
#[inline]
pub fn cubic_ease_in_out(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return delta / 2.0 * t * t * t + start;
    }
    let t = t - 2.0;
    delta / 2.0 * (t * t * t + 2.0) + start
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn starts_at_start_and_ends_at_target() {
        assert!((cubic_ease_in_out(0.0, -100.0, -100.0, 1200.0) - -100.0).abs() < EPS);
        assert!((cubic_ease_in_out(1200.0, -100.0, -100.0, 1200.0) - -200.0).abs() < EPS);
        assert!((cubic_ease_in_out(0.0, 0.0, 300.0, 1.0)).abs() < EPS);
        assert!((cubic_ease_in_out(1.0, 0.0, 300.0, 1.0) - 300.0).abs() < EPS);
    }

    #[test]
    fn midpoint_is_halfway() {
        let mid = cubic_ease_in_out(600.0, 0.0, -200.0, 1200.0);
        assert!((mid - -100.0).abs() < EPS);
    }

    #[test]
    fn first_half_is_cubic_ease_in() {
        // t = 0.5 → (delta / 2) · 0.125
        let v = cubic_ease_in_out(300.0, 0.0, -100.0, 1200.0);
        assert!((v - -6.25).abs() < EPS);
    }

    #[test]
    fn monotonic_over_the_duration() {
        for &(start, delta) in &[(0.0, -300.0), (-300.0, 300.0), (-100.0, -100.0)] {
            let mut prev = start;
            for step in 0..=120 {
                let v = cubic_ease_in_out(step as f64 * 10.0, start, delta, 1200.0);
                if delta < 0.0 {
                    assert!(v <= prev + EPS, "not decreasing at step {step}");
                } else {
                    assert!(v >= prev - EPS, "not increasing at step {step}");
                }
                let lo = start.min(start + delta);
                let hi = start.max(start + delta);
                assert!(v >= lo - EPS && v <= hi + EPS);
                prev = v;
            }
        }
    }

    #[test]
    fn unclamped_elapsed_overshoots() {
        let v = cubic_ease_in_out(2400.0, 0.0, -100.0, 1200.0);
        assert!(v < -100.0);
    }
}
