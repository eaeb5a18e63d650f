//! Modal dialog component.
//!
//! Hosts every modal the app can show: the add and edit input dialogs, the
//! clear confirmation, and the scrollable help and logs views. Only one
//! dialog is open at a time; while it is open it receives every key press.

use crate::constants::{DIALOG_TITLE_EDIT_TODO, DIALOG_TITLE_NEW_TODO};
use crate::ui::components::dialogs::{system_dialogs, todo_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, ClearScope, DialogType},
    Component, ViewContext,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in chars, not bytes
    pub cursor_position: usize,
    scroll: DialogScroll,
    logs: Vec<String>,
    counts: (usize, usize),
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            scroll: DialogScroll::default(),
            logs: Vec::new(),
            counts: (0, 0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Refresh the data the read-only dialogs display.
    /// `counts` is `(active, done)`.
    pub fn update_data(&mut self, logs: Vec<String>, counts: (usize, usize)) {
        self.logs = logs;
        self.counts = counts;
    }

    fn count_for(&self, scope: ClearScope) -> usize {
        let (active, done) = self.counts;
        match scope {
            ClearScope::All => active + done,
            ClearScope::Active => active,
            ClearScope::Done => done,
        }
    }

    fn handle_submit(&mut self) -> Action {
        let action = match &self.dialog_type {
            Some(DialogType::TodoCreation) => {
                if self.input_buffer.trim().is_empty() {
                    return Action::None;
                }
                Action::AddTodo(self.input_buffer.clone())
            }
            Some(DialogType::TodoEdit { id, .. }) => {
                if self.input_buffer.trim().is_empty() {
                    return Action::None;
                }
                Action::EditTodo {
                    id: *id,
                    title: self.input_buffer.clone(),
                }
            }
            Some(DialogType::ClearConfirmation(scope)) => Action::ClearTodos(*scope),
            _ => return Action::None,
        };
        self.clear_dialog();
        action
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.input_buffer.len())
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_position);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_pos = self.byte_index(self.cursor_position - 1);
            self.input_buffer.remove(byte_pos);
            self.cursor_position -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let byte_pos = self.byte_index(self.cursor_position);
            self.input_buffer.remove(byte_pos);
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.delete();
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if close_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::TodoCreation) | Some(DialogType::TodoEdit { .. }) => self.handle_input_key(key),
            Some(DialogType::ClearConfirmation(_)) => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                _ => Action::None,
            },
            Some(DialogType::Help) => self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('?')]),
            Some(DialogType::Logs) => {
                self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')])
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if let DialogType::TodoEdit { title, .. } = &dialog_type {
                    self.input_buffer = title.clone();
                    self.cursor_position = title.chars().count();
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::TodoCreation => todo_dialogs::render_todo_input_dialog(
                f,
                rect,
                ctx,
                DIALOG_TITLE_NEW_TODO,
                &self.input_buffer,
                self.cursor_position,
            ),
            DialogType::TodoEdit { .. } => todo_dialogs::render_todo_input_dialog(
                f,
                rect,
                ctx,
                DIALOG_TITLE_EDIT_TODO,
                &self.input_buffer,
                self.cursor_position,
            ),
            DialogType::ClearConfirmation(scope) => {
                todo_dialogs::render_clear_confirmation_dialog(f, rect, ctx, scope, self.count_for(scope))
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, ctx, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, ctx, &self.logs, &mut self.scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TodoId;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut DialogComponent, text: &str) {
        for c in text.chars() {
            dialog.handle_key_events(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn creation_submits_typed_title_and_closes() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TodoCreation));
        type_text(&mut dialog, "Buy milk");

        let action = dialog.handle_key_events(key(KeyCode::Enter));
        assert_eq!(action, Action::AddTodo("Buy milk".to_string()));
        assert!(!dialog.is_visible());
        assert!(dialog.input_buffer.is_empty());
    }

    #[test]
    fn blank_input_keeps_dialog_open() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TodoCreation));
        type_text(&mut dialog, "   ");

        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert!(dialog.is_visible());
    }

    #[test]
    fn edit_is_prefilled_with_current_title() {
        let id = TodoId::new();
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TodoEdit {
            id,
            title: "Buy milk".to_string(),
        }));
        assert_eq!(dialog.cursor_position, 8);

        dialog.handle_key_events(key(KeyCode::Backspace));
        dialog.handle_key_events(key(KeyCode::Backspace));
        dialog.handle_key_events(key(KeyCode::Backspace));
        dialog.handle_key_events(key(KeyCode::Backspace));
        type_text(&mut dialog, "eggs");

        assert_eq!(
            dialog.handle_key_events(key(KeyCode::Enter)),
            Action::EditTodo {
                id,
                title: "Buy eggs".to_string()
            }
        );
    }

    #[test]
    fn cursor_editing_handles_multibyte_chars() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TodoCreation));
        type_text(&mut dialog, "café");
        dialog.handle_key_events(key(KeyCode::Left));
        dialog.handle_key_events(key(KeyCode::Backspace));
        type_text(&mut dialog, "ff");
        dialog.handle_key_events(key(KeyCode::Delete));

        assert_eq!(dialog.input_buffer, "caff");
        assert_eq!(dialog.cursor_position, 4);
    }

    #[test]
    fn clear_confirmation_confirms_its_scope() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::ClearConfirmation(ClearScope::Done)));
        assert_eq!(
            dialog.handle_key_events(key(KeyCode::Enter)),
            Action::ClearTodos(ClearScope::Done)
        );

        dialog.update(Action::ShowDialog(DialogType::ClearConfirmation(ClearScope::All)));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
    }

    #[test]
    fn help_closes_on_question_mark_but_scrolls_on_j() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Help));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None);
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    }
}
