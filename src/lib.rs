//! A single-page personal site in the terminal.
//!
//! A fixed stack of full-viewport sections is routed by a location hash
//! (`#about`).  Changing the hash animates the stack to the new section with
//! a cubic ease; keys, the mouse wheel and pointer drags step through the
//! sections, throttled to one move per transition.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
