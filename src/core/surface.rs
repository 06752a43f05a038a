//! The visual collaborator the navigation core drives.
//!
//! The core never touches a display directly.  It reads the current stack
//! offset, writes new offsets, and toggles "active" markers through this
//! trait; the terminal implements it in `ui::surface`, tests with a
//! recording double.

pub trait Surface {
    /// Current stack position in percent, sampled from the applied
    /// translation of the first section (so it reflects mid-animation state).
    fn current_position(&self) -> i32;

    /// Apply `position` (percent) to every section's vertical translation.
    fn set_offset(&mut self, position: f64);

    /// Remove the active marker from every nav link, menu entry and section.
    fn clear_markers(&mut self);

    /// Mark the nav link, menu entry and section at `index` active.
    fn mark_active(&mut self, index: usize);

    fn close_menu(&mut self);

    /// Reveal the nested content of the section at `index` and lay out its
    /// sub-elements.  Fired once per transition, part-way through.
    fn activate_content(&mut self, index: usize);
}
