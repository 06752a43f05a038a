//! Side navigation — one entry per section, the active one highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::surface::TerminalSurface;
use super::theme::Theme;

/// Rows between consecutive entries.
const ENTRY_SPACING: u16 = 2;

pub struct SideNav<'a> {
    pub labels: &'a [&'a str],
    pub surface: &'a TerminalSurface,
}

/// Row of entry `index`, with entries vertically centred in `inner`.
fn entry_row(inner: Rect, count: usize, index: usize) -> u16 {
    let span = (count as u16).saturating_mul(ENTRY_SPACING).saturating_sub(1);
    inner.y + inner.height.saturating_sub(span) / 2 + index as u16 * ENTRY_SPACING
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::LEFT).inner(area)
}

/// Which entry (if any) sits at the clicked cell.
pub fn entry_at(area: Rect, count: usize, col: u16, row: u16) -> Option<usize> {
    let inner = inner_area(area);
    if col < inner.x || col >= inner.x + inner.width {
        return None;
    }
    (0..count).find(|&i| {
        let y = entry_row(inner, count, i);
        y == row && y < inner.y + inner.height
    })
}

impl Widget for SideNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let count = self.labels.len();
        for (i, label) in self.labels.iter().enumerate() {
            let y = entry_row(inner, count, i);
            if y >= inner.y + inner.height {
                break;
            }
            let line = if self.surface.is_nav_active(i) {
                Line::from(vec![
                    Span::styled(" ● ", Theme::nav_active_style()),
                    Span::styled(*label, Theme::nav_active_style()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(" ○ ", Theme::nav_style()),
                    Span::styled(*label, Theme::nav_style()),
                ])
            };
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
