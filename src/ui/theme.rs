//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::starfield::PALETTE_LEN;

/// Star colours, warm and cool alternating.
pub const STAR_COLORS: [Color; PALETTE_LEN] = [
    Color::Rgb(0xFF, 0x54, 0x00),
    Color::Rgb(0x00, 0x77, 0xB6),
    Color::Rgb(0xFF, 0x6D, 0x00),
    Color::Rgb(0x00, 0x96, 0xC7),
    Color::Rgb(0xFF, 0x85, 0x00),
    Color::Rgb(0x00, 0xB4, 0xD8),
];

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── sections ───────────────────────────────────────────────
    pub fn landing_background() -> Style {
        Style::default().bg(Color::Rgb(0x00, 0x00, 0x1E))
    }

    pub fn section_background(index: usize) -> Style {
        const BGS: [Color; 2] = [Color::Rgb(0x10, 0x12, 0x1A), Color::Rgb(0x16, 0x19, 0x24)];
        Style::default().bg(BGS[index % BGS.len()])
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Rgb(0xFF, 0x85, 0x00))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tagline_style() -> Style {
        Style::default()
            .fg(Color::Rgb(0x00, 0xB4, 0xD8))
            .add_modifier(Modifier::ITALIC)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn card_border(active: bool) -> Style {
        if active {
            Style::default().fg(Color::Rgb(0x00, 0x96, 0xC7))
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    // ── navigation ─────────────────────────────────────────────
    pub fn nav_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn nav_active_style() -> Style {
        Style::default()
            .fg(Color::Rgb(0xFF, 0x54, 0x00))
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
