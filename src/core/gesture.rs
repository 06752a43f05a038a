//! Normalized input gestures.
//!
//! The host translates its raw keyboard, wheel and pointer events into
//! [`Gesture`] values; the dispatcher only ever matches on this closed set.

/// Keys the dispatcher cares about.  Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Arrow up, `w`, `W`.
    Up,
    /// Arrow down, `s`, `S`.
    Down,
    Other,
}

/// One normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Key(NavKey),
    /// Positive `delta_y` scrolls towards later sections.
    Wheel { delta_y: f64 },
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
}

/// Navigation direction through the ordered section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index offset: `+1` for next, `-1` for previous.
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Start point of an in-progress touch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchContact {
    start: Option<(f64, f64)>,
}

impl TouchContact {
    pub fn set(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn peek(&self) -> Option<(f64, f64)> {
        self.start
    }

    pub fn clear(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_replaced_then_cleared() {
        let mut contact = TouchContact::default();
        assert_eq!(contact.peek(), None);
        contact.set(3.0, 4.0);
        contact.set(5.0, 6.0);
        assert_eq!(contact.peek(), Some((5.0, 6.0)));
        contact.clear();
        assert_eq!(contact.peek(), None);
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Next.offset(), 1);
        assert_eq!(Direction::Previous.offset(), -1);
    }
}
