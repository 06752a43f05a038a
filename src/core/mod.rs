//! Navigation core — easing, sections, transitions and input dispatch.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Visual
//! state is reached only through the [`surface::Surface`] trait.

pub mod animation;
pub mod dispatcher;
pub mod easing;
pub mod gesture;
pub mod location;
pub mod section;
pub mod session;
pub mod starfield;
pub mod surface;
pub mod throttle;
pub mod transition;
