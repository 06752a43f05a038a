//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the side navigation column.
const NAV_WIDTH: u16 = 14;
/// Width of the header's menu button (` ≡ Menu `).
const MENU_BUTTON_WIDTH: u16 = 8;

/// Primary screen layout: header, section stage (+ side nav) and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header_area: Rect,
    /// Where the section stack is drawn.  One section fills it exactly.
    pub stage_area: Rect,
    /// Side navigation (desktop only).
    pub nav_area: Option<Rect>,
    /// Menu toggle button in the header (mobile only).
    pub menu_button: Option<Rect>,
    pub status_area: Rect,
    pub mobile: bool,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.  Below
    /// `mobile_breakpoint` columns the side nav collapses into a menu button.
    pub fn from_area(area: Rect, mobile_breakpoint: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(3),    // stage
                Constraint::Length(1), // status bar
            ])
            .split(area);
        let (header_area, body, status_area) = (rows[0], rows[1], rows[2]);

        let mobile = area.width < mobile_breakpoint;
        if mobile {
            let menu_button = Rect {
                x: header_area.x + header_area.width.saturating_sub(MENU_BUTTON_WIDTH),
                width: MENU_BUTTON_WIDTH.min(header_area.width),
                ..header_area
            };
            return Self {
                header_area,
                stage_area: body,
                nav_area: None,
                menu_button: Some(menu_button),
                status_area,
                mobile,
            };
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(NAV_WIDTH)])
            .split(body);

        Self {
            header_area,
            stage_area: cols[0],
            nav_area: Some(cols[1]),
            menu_button: None,
            status_area,
            mobile,
        }
    }
}

/// Is the cell `(col, row)` inside `rect`?
pub fn point_in_rect(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// A `width` × `height` rect centred in `area` (clamped to fit).
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_gets_side_nav() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 100, 30), 72);
        assert!(!layout.mobile);
        let nav = layout.nav_area.unwrap();
        assert_eq!(nav.width, NAV_WIDTH);
        assert_eq!(layout.stage_area.width, 100 - NAV_WIDTH);
        assert_eq!(layout.stage_area.height, 28);
        assert!(layout.menu_button.is_none());
    }

    #[test]
    fn narrow_terminal_gets_menu_button() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 50, 20), 72);
        assert!(layout.mobile);
        assert!(layout.nav_area.is_none());
        let button = layout.menu_button.unwrap();
        assert!(point_in_rect(button, 49, 0));
        assert!(!point_in_rect(button, 10, 0));
        assert_eq!(layout.stage_area.width, 50);
    }

    #[test]
    fn centred_rect_is_clamped() {
        let r = centered_fixed(40, 10, Rect::new(0, 0, 30, 8));
        assert_eq!(r, Rect::new(0, 0, 30, 8));
        let r = centered_fixed(10, 4, Rect::new(0, 0, 30, 8));
        assert_eq!(r, Rect::new(10, 2, 10, 4));
    }
}
