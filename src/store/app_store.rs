use super::todos::{self, TodoAction, TodoId, TodoItem, TodoState};
use super::ui_state::{self, NotificationKind, UiAction, UiState};
use super::{Store, SubscriptionId};

/// Process-wide state: the todo slice and the UI slice, side by side.
///
/// Constructed explicitly and passed by reference; the two stores never call
/// into each other.
pub struct AppStore {
    todos: Store<TodoState, TodoAction>,
    ui: Store<UiState, UiAction>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(UiState::default())
    }
}

impl AppStore {
    /// Empty todo list plus the given initial UI state.
    pub fn new(initial_ui: UiState) -> Self {
        Self {
            todos: Store::new("todos", TodoState::default(), todos::reduce),
            ui: Store::new("ui", initial_ui, ui_state::reduce),
        }
    }

    // Queries

    pub fn todos(&self) -> &TodoState {
        self.todos.state()
    }

    pub fn ui(&self) -> &UiState {
        self.ui.state()
    }

    pub fn active(&self) -> Vec<&TodoItem> {
        self.todos.state().active()
    }

    pub fn done(&self) -> Vec<&TodoItem> {
        self.todos.state().done()
    }

    // Subscriptions

    pub fn subscribe_todos<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + Send + 'static,
    {
        self.todos.subscribe(callback)
    }

    pub fn subscribe_ui<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&UiState) + Send + 'static,
    {
        self.ui.subscribe(callback)
    }

    pub fn unsubscribe_todos(&mut self, id: SubscriptionId) -> bool {
        self.todos.unsubscribe(id)
    }

    pub fn unsubscribe_ui(&mut self, id: SubscriptionId) -> bool {
        self.ui.unsubscribe(id)
    }

    // Todo intents

    /// Add a todo at the front. Returns the new id, or `None` for a blank title.
    pub fn add_todo(&mut self, title: &str) -> Option<TodoId> {
        if self.todos.dispatch(TodoAction::Add { title: title.to_string() }) {
            self.todos.state().items().first().map(|item| item.id)
        } else {
            None
        }
    }

    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        self.todos.dispatch(TodoAction::Toggle(id))
    }

    pub fn remove_todo(&mut self, id: TodoId) -> bool {
        self.todos.dispatch(TodoAction::Remove(id))
    }

    pub fn edit_todo(&mut self, id: TodoId, title: &str) -> bool {
        self.todos.dispatch(TodoAction::Edit {
            id,
            title: title.to_string(),
        })
    }

    pub fn clear_todos(&mut self) -> bool {
        self.todos.dispatch(TodoAction::Clear)
    }

    pub fn clear_done_todos(&mut self) -> bool {
        self.todos.dispatch(TodoAction::ClearDone)
    }

    pub fn clear_active_todos(&mut self) -> bool {
        self.todos.dispatch(TodoAction::ClearActive)
    }

    // UI intents

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.ui.dispatch(UiAction::ToggleDarkMode)
    }

    pub fn dismiss_banner(&mut self) -> bool {
        self.ui.dispatch(UiAction::DismissBanner)
    }

    pub fn show_notif(&mut self, kind: NotificationKind, item: Option<&str>, message: Option<&str>) -> bool {
        self.ui.dispatch(UiAction::ShowNotif {
            kind,
            item: item.map(str::to_string),
            message: message.map(str::to_string),
        })
    }

    pub fn hide_notif(&mut self) -> bool {
        self.ui.dispatch(UiAction::HideNotif)
    }
}
