//! Keyboard and mouse handling for the App.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::interaction::handle_click_action;
use crate::view_state::Section;

use super::App;

impl App {
    /// Handle a key press. Releases and repeats reported by some terminals
    /// are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        tracing::debug!(code = ?key.code, modifiers = ?key.modifiers, "Key pressed");

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                self.quit();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.select_section(section);
                }
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_section(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.prev_section(),
            KeyCode::Down | KeyCode::Char('j') => match self.view.active_section() {
                Section::Projects => self.focus_next_card(),
                Section::Contact => self.contact_cursor_down(),
                _ => {}
            },
            KeyCode::Up | KeyCode::Char('k') => match self.view.active_section() {
                Section::Projects => self.focus_prev_card(),
                Section::Contact => self.contact_cursor_up(),
                _ => {}
            },
            KeyCode::Enter | KeyCode::Char('o') => {
                self.open_focused();
            }
            KeyCode::Char('g') if self.view.active_section() == Section::Projects => {
                if let Some(index) = self.view.hovered_project() {
                    self.open_project_code(index);
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            // Left click: check hit areas for interactive elements
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                    self.mark_dirty();
                }
            }
            // Mouse move: hover styles plus project card hover tracking
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.hit_registry.update_pointer(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
                let card = self.hit_registry.hovered_project_card();
                self.pointer_over_card(card);
            }
            _ => {}
        }
    }

    /// The pointer left the terminal window.
    pub fn handle_focus_lost(&mut self) {
        if self.hit_registry.clear_pointer() {
            self.mark_dirty();
        }
        self.pointer_over_card(None);
    }
}
