//! Input handling — normalizes key/mouse events into gestures and applies
//! the resulting navigation to the state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::gesture::{Gesture, NavKey};
use crate::core::surface::Surface;
use crate::core::transition::FrameOutcome;
use crate::ui::{layout::point_in_rect, menu, nav};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.surface.menu_open() {
        handle_menu_key(state, key);
        return;
    }

    let nav_key = match state.config.match_key(key) {
        Some(Action::Quit) => {
            state.should_quit = true;
            return;
        }
        Some(Action::ToggleMenu) => {
            toggle_menu(state);
            return;
        }
        Some(Action::FirstSection) => {
            let hash = state.sections().first().hash().to_string();
            state.navigate(&hash);
            return;
        }
        Some(Action::LastSection) => {
            let hash = state.sections().last().hash().to_string();
            state.navigate(&hash);
            return;
        }
        Some(Action::NextSection) => NavKey::Down,
        Some(Action::PrevSection) => NavKey::Up,
        None => NavKey::Other,
    };

    dispatch(state, Gesture::Key(nav_key), now);
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) {
    let count = state.sections().len();
    match key.code {
        KeyCode::Esc => state.surface.close_menu(),
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.menu_selected + 1 < count {
                state.menu_selected += 1;
            }
        }
        KeyCode::Enter => {
            let index = state.menu_selected;
            navigate_to_index(state, index);
            // Re-selecting the current section changes nothing but still
            // dismisses the menu.
            state.surface.close_menu();
        }
        _ => {
            if state.config.match_key(key) == Some(Action::ToggleMenu) {
                state.surface.close_menu();
            } else if state.config.match_key(key) == Some(Action::Quit) {
                state.should_quit = true;
            }
        }
    }
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let layout = state.layout();
    let (col, row) = (mouse.column, mouse.row);

    let gesture = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout
                .menu_button
                .is_some_and(|button| point_in_rect(button, col, row))
            {
                toggle_menu(state);
                return;
            }

            let count = state.sections().len();
            if state.surface.menu_open() {
                if let Some(index) = menu::entry_at(layout.stage_area, count, col, row) {
                    navigate_to_index(state, index);
                    state.surface.close_menu();
                } else if !point_in_rect(menu::menu_rect(layout.stage_area, count), col, row) {
                    state.surface.close_menu();
                }
                return;
            }

            if let Some(area) = layout.nav_area {
                if let Some(index) = nav::entry_at(area, count, col, row) {
                    navigate_to_index(state, index);
                    return;
                }
            }

            Gesture::TouchStart {
                x: f64::from(col),
                y: f64::from(row),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => Gesture::TouchMove {
            x: f64::from(col),
            y: f64::from(row),
        },
        MouseEventKind::ScrollDown => Gesture::Wheel { delta_y: 1.0 },
        MouseEventKind::ScrollUp => Gesture::Wheel { delta_y: -1.0 },
        _ => return,
    };

    dispatch(state, gesture, now);
}

/// Advance the running transition and the starfield by one frame.
pub fn handle_frame(state: &mut AppState, now: Instant) {
    if let FrameOutcome::Finished(position) = state.navigator.tick(now, &mut state.surface) {
        tracing::debug!("transition settled at {position}%");
    }
    if let Some(field) = state.starfield.as_mut() {
        field.tick();
    }
}

/// Run a gesture through the dispatcher and navigate if it resolves.
fn dispatch(state: &mut AppState, gesture: Gesture, now: Instant) {
    let menu_open = state.surface.menu_open();
    let next = state.dispatcher.dispatch(
        gesture,
        now,
        state.navigator.sections(),
        state.location.hash(),
        menu_open,
    );
    if let Some(hash) = next {
        state.navigate(&hash);
    }
}

fn navigate_to_index(state: &mut AppState, index: usize) {
    let Some(id) = state.sections().get(index) else {
        return;
    };
    let hash = id.hash().to_string();
    state.navigate(&hash);
}

fn toggle_menu(state: &mut AppState) {
    if !state.layout().mobile {
        state.status_message = Some("Menu is only available in narrow terminals".into());
        return;
    }
    if state.surface.toggle_menu() {
        state.menu_selected = state.surface.active_index().unwrap_or(0);
    }
}
