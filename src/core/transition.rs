//! Transition handler — reacts to hash changes and drives the frame loop.
//!
//! `Idle → Animating → Idle` per hash change.  The old position is always
//! sampled from the surface, never remembered, so a transition that starts
//! while another is in flight picks up from wherever the stack currently is.
//! Starting a transition begins a new animation session; frames for any
//! older session are ignored.

use std::time::{Duration, Instant};

use super::animation::{Translation, DEFAULT_BREAKPOINT};
use super::section::{SectionId, SectionList};
use super::session::{SessionCounter, SessionToken};
use super::surface::Surface;

/// Animation length used by the site.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Animating {
        session: SessionToken,
        target: Option<usize>,
    },
}

/// What a single frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Nothing is animating.
    Idle,
    /// Frame belonged to a superseded session; the surface was not touched.
    Stale,
    /// Position applied, more frames wanted.
    Continue(f64),
    /// Position applied, the translation is complete.
    Finished(f64),
}

pub struct Navigator {
    sections: SectionList,
    duration: Duration,
    breakpoint: f64,
    sessions: SessionCounter,
    active: Option<Translation>,
}

impl Navigator {
    pub fn new(sections: SectionList, duration: Duration) -> Self {
        Self {
            sections,
            duration,
            breakpoint: DEFAULT_BREAKPOINT,
            sessions: SessionCounter::new(),
            active: None,
        }
    }

    pub fn with_breakpoint(mut self, fraction: f64) -> Self {
        self.breakpoint = fraction;
        self
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> TransitionState {
        match &self.active {
            Some(t) if !t.is_finished() => TransitionState::Animating {
                session: t.session(),
                target: t.target(),
            },
            _ => TransitionState::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state(), TransitionState::Animating { .. })
    }

    /// React to the location hash changing to `hash`.
    ///
    /// Returns the token of the animation session that was started; frames
    /// must be fed back through [`Navigator::frame`] (or [`Navigator::tick`]).
    pub fn handle_hash_change<S: Surface + ?Sized>(
        &mut self,
        hash: &str,
        surface: &mut S,
    ) -> SessionToken {
        let target_id = SectionId::from_hash(hash);
        let new_position = self.sections.target_position(&target_id);
        let old_position = surface.current_position();
        let target = self.sections.index_of(&target_id);

        surface.clear_markers();

        let session = self.sessions.begin();
        if let Some(previous) = self.active.take() {
            if !previous.is_finished() {
                tracing::debug!(
                    "transition superseded: {:?} → {:?}",
                    previous.session(),
                    session
                );
            }
        }
        self.active = Some(
            Translation::new(session, old_position, new_position, self.duration, target)
                .with_breakpoint(self.breakpoint),
        );

        match target {
            Some(index) => surface.mark_active(index),
            None => tracing::warn!("hash #{hash} matches no section, showing the first one"),
        }
        surface.close_menu();

        tracing::debug!("transition #{hash}: {old_position}% → {new_position}%");
        session
    }

    /// Advance the animation of `session` to `timestamp`.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        session: SessionToken,
        timestamp: Instant,
        surface: &mut S,
    ) -> FrameOutcome {
        if !self.sessions.is_current(session) {
            return FrameOutcome::Stale;
        }
        let Some(translation) = self.active.as_mut() else {
            return FrameOutcome::Idle;
        };
        if translation.is_finished() {
            return FrameOutcome::Idle;
        }

        let frame = translation.frame(timestamp);
        surface.set_offset(frame.position);
        if frame.reached_breakpoint {
            if let Some(index) = translation.target() {
                surface.activate_content(index);
            }
        }

        if frame.more {
            FrameOutcome::Continue(frame.position)
        } else {
            FrameOutcome::Finished(frame.position)
        }
    }

    /// Advance whichever session is current.
    pub fn tick<S: Surface + ?Sized>(&mut self, timestamp: Instant, surface: &mut S) -> FrameOutcome {
        match self.sessions.current() {
            Some(session) => self.frame(session, timestamp, surface),
            None => FrameOutcome::Idle,
        }
    }
}
