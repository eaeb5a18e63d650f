//! One of the two todo panels (Active or Done).
//!
//! The panel owns its selection and a snapshot of the projection it shows.
//! The app component refreshes the snapshot from the store before each
//! frame; the panel never mutates todos itself, it only emits actions.

use crate::constants::{EMPTY_ACTIVE_TEXT, EMPTY_DONE_TEXT};
use crate::store::{TodoId, TodoItem};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::todo_item::render_todo_item;
use crate::ui::core::{
    actions::{Action, ClearScope, DialogType, PanelKind},
    Component, ViewContext,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph, Wrap},
    Frame,
};

pub struct TodoPanelComponent {
    pub kind: PanelKind,
    pub items: Vec<TodoItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    scrollbar: ScrollbarHelper,
}

impl TodoPanelComponent {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: kind == PanelKind::Active,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the projection snapshot, keeping the selection on the same
    /// item when it is still present.
    pub fn update_data(&mut self, items: Vec<TodoItem>) {
        let selected_id = self.selected_todo().map(|item| item.id);
        self.items = items;

        if let Some(id) = selected_id {
            if let Some(index) = self.items.iter().position(|item| item.id == id) {
                self.selected_index = index;
            }
        }
        self.update_list_state();
    }

    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.items.get(self.selected_index)
    }

    pub fn select_id(&mut self, id: TodoId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected_index = index;
            self.update_list_state();
        }
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.items.len() - 1);
            self.update_list_state();
        }
    }

    pub fn previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn clear_scope(&self) -> ClearScope {
        match self.kind {
            PanelKind::Active => ClearScope::Active,
            PanelKind::Done => ClearScope::Done,
        }
    }

    fn title(&self, ctx: &ViewContext) -> String {
        let icon = match self.kind {
            PanelKind::Active => ctx.icons.active_title(),
            PanelKind::Done => ctx.icons.done_title(),
        };
        format!(" {} {} ({}) ", icon, self.kind.title(), self.items.len())
    }

    fn empty_text(&self) -> &'static str {
        match self.kind {
            PanelKind::Active => EMPTY_ACTIVE_TEXT,
            PanelKind::Done => EMPTY_DONE_TEXT,
        }
    }
}

impl Component for TodoPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.items.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self
                .selected_todo()
                .map(|item| Action::ToggleTodo(item.id))
                .unwrap_or(Action::None),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_todo()
                .map(|item| Action::RemoveTodo(item.id))
                .unwrap_or(Action::None),
            KeyCode::Char('e') => self
                .selected_todo()
                .map(|item| {
                    Action::ShowDialog(DialogType::TodoEdit {
                        id: item.id,
                        title: item.title.clone(),
                    })
                })
                .unwrap_or(Action::None),
            KeyCode::Char('c') if !self.items.is_empty() => {
                Action::ShowDialog(DialogType::ClearConfirmation(self.clear_scope()))
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext) {
        let theme = &ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(self.focused))
            .title(Line::from(Span::styled(self.title(ctx), theme.title_style(self.focused))))
            .style(theme.base());

        if self.items.is_empty() {
            let placeholder = Paragraph::new(self.empty_text())
                .block(block)
                .style(theme.dim().add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(placeholder, rect);
            return;
        }

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, self.items.len());

        let rows: Vec<_> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| render_todo_item(item, self.focused && index == self.selected_index, ctx))
            .collect();

        let list = List::new(rows).block(block);
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let viewport = rect.height.saturating_sub(2) as usize;
        self.scrollbar
            .update_state(self.items.len(), self.selected_index, Some(viewport));
        self.scrollbar.render(f, scrollbar_area, theme.border);
    }
}
