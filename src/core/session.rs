//! Animation session tokens.
//!
//! Every transition gets a fresh token.  Frame callbacks carry the token
//! they were scheduled with; once a newer transition has started, the old
//! token is stale and its frames must not touch the surface.

/// Identifies one animation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

/// Monotonic source of [`SessionToken`]s.
#[derive(Debug, Default)]
pub struct SessionCounter {
    current: u64,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, invalidating every token handed out before.
    pub fn begin(&mut self) -> SessionToken {
        self.current = self.current.wrapping_add(1);
        SessionToken(self.current)
    }

    /// The most recently started session, if any.
    pub fn current(&self) -> Option<SessionToken> {
        (self.current != 0).then_some(SessionToken(self.current))
    }

    pub fn is_current(&self, token: SessionToken) -> bool {
        token.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_invalidates_previous() {
        let mut sessions = SessionCounter::new();
        assert_eq!(sessions.current(), None);

        let a = sessions.begin();
        assert!(sessions.is_current(a));

        let b = sessions.begin();
        assert!(b > a);
        assert!(!sessions.is_current(a));
        assert!(sessions.is_current(b));
        assert_eq!(sessions.current(), Some(b));
    }
}
