//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the navigation state and turns it into cells on the
//! terminal.  `surface` is the exception: it is the visual state the core
//! mutates, and holds no widgets itself.

pub mod content;
pub mod layout;
pub mod menu;
pub mod nav;
pub mod stage;
pub mod surface;
pub mod theme;

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::state::AppState;

use self::{menu::MobileMenu, nav::SideNav, stage::SectionStage, theme::Theme};

/// Draw one full frame.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = state.layout();
    let labels = state.labels();

    // ── header ────────────────────────────────────────────────
    let mut header = vec![
        Span::styled(" section-nav ", Theme::title_style()),
        Span::styled(state.location.display(), Theme::tagline_style()),
    ];
    if state.navigator.is_animating() {
        header.push(Span::styled("  ↕", Theme::nav_active_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), layout.header_area);
    if let Some(button) = layout.menu_button {
        let style = if state.surface.menu_open() {
            Theme::nav_active_style()
        } else {
            Theme::nav_style()
        };
        frame.render_widget(Paragraph::new(Span::styled(" ≡ Menu ", style)), button);
    }

    // ── sections ──────────────────────────────────────────────
    frame.render_widget(
        SectionStage {
            sections: &state.contents,
            surface: &state.surface,
            starfield: state.starfield.as_ref(),
        },
        layout.stage_area,
    );

    if let Some(area) = layout.nav_area {
        frame.render_widget(
            SideNav {
                labels: &labels,
                surface: &state.surface,
            },
            area,
        );
    }

    // ── status bar ────────────────────────────────────────────
    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    // ── overlays ──────────────────────────────────────────────
    if state.surface.menu_open() {
        frame.render_widget(
            MobileMenu {
                labels: &labels,
                surface: &state.surface,
                selected: state.menu_selected,
            },
            layout.stage_area,
        );
    }
}
