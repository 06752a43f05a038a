//! The section stack — every section drawn at its translated position.
//!
//! Each section is as tall as the stage.  Section `i` sits `i` stage-heights
//! below the first, and the whole stack is shifted by the surface's applied
//! translation.  Sections are rendered into a scratch buffer and copied row
//! by row, so a section that is only partly on screen clips cleanly.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::starfield::Starfield;

use super::content::SectionContent;
use super::surface::TerminalSurface;
use super::theme::{Theme, STAR_COLORS};

pub struct SectionStage<'a> {
    pub sections: &'a [&'static SectionContent],
    pub surface: &'a TerminalSurface,
    /// Drawn behind the first section when present.
    pub starfield: Option<&'a Starfield>,
}

impl Widget for SectionStage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let height = i32::from(area.height);
        let stage_top = i32::from(area.y);
        let stage_bottom = stage_top + height;

        for (index, content) in self.sections.iter().enumerate() {
            let shift = self.surface.translation_rows(index).round() as i32;
            let top = stage_top + index as i32 * height + shift;
            if top + height <= stage_top || top >= stage_bottom {
                continue;
            }

            let local = Rect::new(0, 0, area.width, area.height);
            let mut scratch = Buffer::empty(local);
            self.render_section(index, content, local, &mut scratch);

            for sy in 0..area.height {
                let y = top + i32::from(sy);
                if y < stage_top || y >= stage_bottom {
                    continue;
                }
                for sx in 0..area.width {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((sx, sy)), buf.cell_mut((area.x + sx, y as u16)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

impl SectionStage<'_> {
    fn render_section(&self, index: usize, content: &SectionContent, area: Rect, buf: &mut Buffer) {
        if index == 0 {
            buf.set_style(area, Theme::landing_background());
            if let Some(field) = self.starfield {
                render_stars(field, area, buf);
            }
        } else {
            buf.set_style(area, Theme::section_background(index));
        }

        let heading_y = area.height / 4;
        let mut heading = Theme::heading_style();
        if self.surface.is_section_active(index) {
            heading = heading.add_modifier(ratatui::style::Modifier::UNDERLINED);
        }
        let title_rect = Rect::new(0, heading_y, area.width, 1).intersection(area);
        Paragraph::new(Line::styled(content.title, heading))
            .alignment(Alignment::Center)
            .render(title_rect, buf);
        let tagline_rect = Rect::new(0, heading_y + 1, area.width, 1).intersection(area);
        Paragraph::new(Line::styled(content.tagline, Theme::tagline_style()))
            .alignment(Alignment::Center)
            .render(tagline_rect, buf);

        let layout = self.surface.content_layout(index);
        if layout.width < 4 || layout.height < 3 {
            return;
        }
        let card = Rect::new(layout.x_offset, heading_y + 3, layout.width, layout.height)
            .intersection(area);
        if card.is_empty() {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::card_border(layout.active));
        let inner = block.inner(card);
        block.render(card, buf);

        if layout.active {
            let lines: Vec<Line> = content
                .body
                .iter()
                .map(|l| Line::styled(*l, Theme::body_style()))
                .collect();
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }
    }
}

fn render_stars(field: &Starfield, area: Rect, buf: &mut Buffer) {
    for star in field.stars() {
        let (x, y) = (star.x.round(), star.y.floor());
        if x < 0.0 || y < 0.0 || x >= f64::from(area.width) || y >= f64::from(area.height) {
            continue;
        }
        let glyph = match star.radius {
            r if r < 0.4 => "·",
            r if r < 0.8 => "•",
            _ => "✦",
        };
        if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
            cell.set_symbol(glyph).set_fg(STAR_COLORS[star.color % STAR_COLORS.len()]);
        }
    }
}
