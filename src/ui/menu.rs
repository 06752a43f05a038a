//! Mobile menu overlay — the collapsed form of the side nav.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::layout::centered_fixed;
use super::surface::TerminalSurface;
use super::theme::Theme;

const MENU_WIDTH: u16 = 28;

pub struct MobileMenu<'a> {
    pub labels: &'a [&'a str],
    pub surface: &'a TerminalSurface,
    /// Highlighted entry.
    pub selected: usize,
}

/// Screen rect of the menu popup.
pub fn menu_rect(area: Rect, count: usize) -> Rect {
    centered_fixed(MENU_WIDTH, count as u16 + 5, area)
}

/// Which entry (if any) sits at the clicked cell.  Entries start on the
/// second row inside the border.
pub fn entry_at(area: Rect, count: usize, col: u16, row: u16) -> Option<usize> {
    let popup = menu_rect(area, count);
    let first = popup.y + 2;
    let bottom_border = popup.y + popup.height.saturating_sub(1);
    if col <= popup.x || col + 1 >= popup.x + popup.width || row < first || row >= bottom_border {
        return None;
    }
    let index = usize::from(row - first);
    (index < count).then_some(index)
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = menu_rect(area, self.labels.len());
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Menu ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, label) in self.labels.iter().enumerate() {
            let prefix = if i == self.selected { " ▸ " } else { "   " };
            let style = if i == self.selected {
                Theme::selected_style().fg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![Span::styled(format!("{prefix}{label}"), style)];
            if self.surface.is_nav_active(i) {
                spans.push(Span::styled("  ●", Theme::nav_active_style()));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter: go  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
