//! Terminal-backed visual state — the [`Surface`] the navigator drives.
//!
//! Holds everything the renderer needs to draw one frame: the translation
//! applied to each section, which nav entry / section is active, the
//! per-section content layout and whether the mobile menu is open.  Nothing
//! here draws; `ui::stage`, `ui::nav` and `ui::menu` read it.

use crate::core::section::current_position;
use crate::core::surface::Surface;

/// Layout of a section's nested content card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentLayout {
    /// Revealed (`true`) or collapsed.
    pub active: bool,
    /// Card width in columns.
    pub width: u16,
    /// Columns from the left edge of the section.
    pub x_offset: u16,
    /// Card height in rows.
    pub height: u16,
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    /// Applied vertical translation per section, in percent.
    offsets: Vec<f64>,
    nav_active: Vec<bool>,
    section_active: Vec<bool>,
    content: Vec<ContentLayout>,
    section_width: u16,
    section_height: u16,
    menu_open: bool,
}

impl TerminalSurface {
    pub fn new(section_count: usize, width: u16, height: u16) -> Self {
        let mut surface = Self {
            offsets: vec![0.0; section_count],
            nav_active: vec![false; section_count],
            section_active: vec![false; section_count],
            content: vec![ContentLayout::default(); section_count],
            section_width: width,
            section_height: height,
            menu_open: false,
        };
        surface.relayout_content();
        surface
    }

    /// Resize the viewport a section fills.  Translations are in percent,
    /// so the stack keeps its relative position.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.section_width = width;
        self.section_height = height;
        self.relayout_content();
    }

    /// Translation of section `index` in percent.
    pub fn offset(&self, index: usize) -> f64 {
        self.offsets.get(index).copied().unwrap_or(0.0)
    }

    /// Translation of section `index` in rows (what a computed transform
    /// matrix would report in pixels).
    pub fn translation_rows(&self, index: usize) -> f64 {
        self.offset(index) / 100.0 * f64::from(self.section_height)
    }

    pub fn is_nav_active(&self, index: usize) -> bool {
        self.nav_active.get(index).copied().unwrap_or(false)
    }

    pub fn is_section_active(&self, index: usize) -> bool {
        self.section_active.get(index).copied().unwrap_or(false)
    }

    /// Index of the active nav entry, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.nav_active.iter().position(|&a| a)
    }

    pub fn content_layout(&self, index: usize) -> ContentLayout {
        self.content.get(index).copied().unwrap_or_default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    fn relayout_content(&mut self) {
        for index in 0..self.content.len() {
            let active = self.content[index].active;
            self.content[index] = self.layout_for(active);
        }
    }

    /// Active cards span most of the section; collapsed ones are a narrow
    /// sliver pushed right, so the reveal reads as the card sliding open.
    fn layout_for(&self, active: bool) -> ContentLayout {
        let w = self.section_width;
        let h = self.section_height;
        if active {
            let width = w.saturating_sub(8).min(76);
            ContentLayout {
                active,
                width,
                x_offset: (w - width) / 2,
                height: h.saturating_sub(6).min(16),
            }
        } else {
            let width = (w / 4).min(20);
            ContentLayout {
                active,
                width,
                x_offset: w.saturating_sub(width) * 3 / 4,
                height: h.saturating_sub(6).min(16) / 2,
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn current_position(&self) -> i32 {
        // A collapsed stage has no rows to measure; the stored percent is exact.
        if self.section_height == 0 {
            return self.offset(0).round() as i32;
        }
        current_position(self.translation_rows(0), f64::from(self.section_height))
    }

    fn set_offset(&mut self, position: f64) {
        for offset in &mut self.offsets {
            *offset = position;
        }
    }

    fn clear_markers(&mut self) {
        self.nav_active.fill(false);
        self.section_active.fill(false);
    }

    fn mark_active(&mut self, index: usize) {
        if let Some(nav) = self.nav_active.get_mut(index) {
            *nav = true;
        }
        if let Some(section) = self.section_active.get_mut(index) {
            *section = true;
        }
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
    }

    fn activate_content(&mut self, index: usize) {
        if index >= self.content.len() {
            return;
        }
        for i in 0..self.content.len() {
            self.content[i] = self.layout_for(i == index);
        }
    }
}
