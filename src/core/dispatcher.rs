//! Input dispatcher — turns gestures into "go to the next/previous section".
//!
//! Keyboard, wheel and touch are throttled independently.  A gesture that
//! resolves to a direction consumes its family's cooldown; gestures that
//! arrive during the cooldown are dropped.

use std::time::{Duration, Instant};

use super::gesture::{Direction, Gesture, NavKey, TouchContact};
use super::section::{SectionId, SectionList};
use super::throttle::Cooldown;

/// Minimum pointer travel (in cells) before a touch move is processed.
pub const TOUCH_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct InputDispatcher {
    keyboard: Cooldown,
    wheel: Cooldown,
    touch: Cooldown,
    contact: TouchContact,
}

impl InputDispatcher {
    /// All three families share the same throttle interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            keyboard: Cooldown::new(interval),
            wheel: Cooldown::new(interval),
            touch: Cooldown::new(interval),
            contact: TouchContact::default(),
        }
    }

    pub fn contact(&self) -> &TouchContact {
        &self.contact
    }

    /// Process one gesture.  Returns the hash to navigate to, if any.
    pub fn dispatch(
        &mut self,
        gesture: Gesture,
        now: Instant,
        sections: &SectionList,
        current_hash: &str,
        menu_open: bool,
    ) -> Option<String> {
        let direction = match gesture {
            Gesture::Key(key) => {
                let direction = match key {
                    NavKey::Up => Direction::Previous,
                    NavKey::Down => Direction::Next,
                    NavKey::Other => return None,
                };
                Self::gate(&mut self.keyboard, now, "keyboard")?;
                direction
            }
            Gesture::Wheel { delta_y } => {
                let direction = if delta_y > 0.0 {
                    Direction::Next
                } else if delta_y < 0.0 {
                    Direction::Previous
                } else {
                    return None;
                };
                Self::gate(&mut self.wheel, now, "wheel")?;
                direction
            }
            Gesture::TouchStart { x, y } => {
                self.contact.set(x, y);
                return None;
            }
            Gesture::TouchMove { x, y } => {
                if menu_open || self.touch.is_active(now) {
                    return None;
                }
                let (start_x, start_y) = self.contact.peek()?;
                let dx = x - start_x;
                let dy = y - start_y;
                if dx.abs().max(dy.abs()) < TOUCH_THRESHOLD {
                    return None;
                }
                self.contact.clear();
                if dx.abs() > dy.abs() {
                    tracing::debug!("horizontal touch ignored (dx={dx}, dy={dy})");
                    return None;
                }
                // Content follows the finger: dragging up reveals what is below.
                let direction = if dy < 0.0 {
                    Direction::Next
                } else {
                    Direction::Previous
                };
                Self::gate(&mut self.touch, now, "touch")?;
                direction
            }
        };

        let next = sections.step(&SectionId::from_hash(current_hash), direction);
        Some(next.hash().to_string())
    }

    fn gate(cooldown: &mut Cooldown, now: Instant, family: &str) -> Option<()> {
        if cooldown.try_activate(now) {
            Some(())
        } else {
            tracing::debug!("{family} gesture throttled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::section::SITE_SECTION_IDS;

    fn sections() -> SectionList {
        SectionList::new(SITE_SECTION_IDS.iter().copied()).unwrap()
    }

    fn dispatcher() -> InputDispatcher {
        InputDispatcher::new(Duration::from_millis(1200))
    }

    #[test]
    fn keys_map_to_neighbours() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert_eq!(
            d.dispatch(Gesture::Key(NavKey::Down), t0, &s, "about", false).as_deref(),
            Some("skills")
        );
        let later = t0 + Duration::from_secs(2);
        assert_eq!(
            d.dispatch(Gesture::Key(NavKey::Up), later, &s, "about", false).as_deref(),
            Some("landing")
        );
    }

    #[test]
    fn other_keys_do_not_consume_cooldown() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert_eq!(d.dispatch(Gesture::Key(NavKey::Other), t0, &s, "landing", false), None);
        assert!(d.dispatch(Gesture::Key(NavKey::Down), t0, &s, "landing", false).is_some());
    }

    #[test]
    fn families_throttle_independently() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert!(d.dispatch(Gesture::Key(NavKey::Down), t0, &s, "landing", false).is_some());
        assert!(d.dispatch(Gesture::Key(NavKey::Down), t0, &s, "about", false).is_none());
        assert!(d
            .dispatch(Gesture::Wheel { delta_y: 1.0 }, t0, &s, "about", false)
            .is_some());
    }

    #[test]
    fn wheel_sign_and_zero() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert_eq!(d.dispatch(Gesture::Wheel { delta_y: 0.0 }, t0, &s, "about", false), None);
        assert_eq!(
            d.dispatch(Gesture::Wheel { delta_y: -3.0 }, t0, &s, "about", false)
                .as_deref(),
            Some("landing")
        );
    }

    #[test]
    fn out_of_bounds_falls_back_to_first() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert_eq!(
            d.dispatch(Gesture::Key(NavKey::Down), t0, &s, "contact", false).as_deref(),
            Some("landing")
        );
    }

    #[test]
    fn touch_needs_a_contact_and_clears_it() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        assert_eq!(d.dispatch(Gesture::TouchMove { x: 0.0, y: 0.0 }, t0, &s, "about", false), None);

        d.dispatch(Gesture::TouchStart { x: 10.0, y: 20.0 }, t0, &s, "about", false);
        assert_eq!(
            d.dispatch(Gesture::TouchMove { x: 11.0, y: 12.0 }, t0, &s, "about", false)
                .as_deref(),
            Some("skills")
        );
        assert_eq!(d.contact().peek(), None);
    }

    #[test]
    fn small_moves_keep_the_contact() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        d.dispatch(Gesture::TouchStart { x: 10.0, y: 20.0 }, t0, &s, "about", false);
        assert_eq!(d.dispatch(Gesture::TouchMove { x: 10.5, y: 20.5 }, t0, &s, "about", false), None);
        assert!(d.contact().peek().is_some());
        assert_eq!(
            d.dispatch(Gesture::TouchMove { x: 10.0, y: 25.0 }, t0, &s, "about", false)
                .as_deref(),
            Some("landing")
        );
    }

    #[test]
    fn horizontal_touch_never_navigates() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        for (dx, dy) in [(10.0, 3.0), (-10.0, 3.0), (10.0, -3.0), (-10.0, -3.0)] {
            d.dispatch(Gesture::TouchStart { x: 50.0, y: 50.0 }, t0, &s, "about", false);
            let got = d.dispatch(
                Gesture::TouchMove { x: 50.0 + dx, y: 50.0 + dy },
                t0,
                &s,
                "about",
                false,
            );
            assert_eq!(got, None);
            assert_eq!(d.contact().peek(), None);
        }
    }

    #[test]
    fn touch_ignored_while_menu_open() {
        let s = sections();
        let t0 = Instant::now();
        let mut d = dispatcher();
        d.dispatch(Gesture::TouchStart { x: 0.0, y: 10.0 }, t0, &s, "about", true);
        assert_eq!(d.dispatch(Gesture::TouchMove { x: 0.0, y: 0.0 }, t0, &s, "about", true), None);
    }
}
