//! Todo collection slice: items, actions, reducer and derived projections.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Local>,
}

impl TodoItem {
    /// Build a new, not yet completed item. Returns `None` for a blank title.
    pub fn new(title: &str) -> Option<Self> {
        let title = normalize_title(title)?;
        Some(Self {
            id: TodoId::new(),
            title,
            done: false,
            created_at: Local::now(),
        })
    }
}

/// Trim a title, rejecting titles that are empty afterwards.
pub fn normalize_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Todo collection, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    items: Vec<TodoItem>,
}

impl TodoState {
    /// All items in insertion order (newest first).
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items not yet completed.
    pub fn active(&self) -> Vec<&TodoItem> {
        active(&self.items)
    }

    /// Completed items.
    pub fn done(&self) -> Vec<&TodoItem> {
        done(&self.items)
    }

    /// `(active, done)` counts.
    pub fn counts(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|item| item.done).count();
        (self.items.len() - done, done)
    }

    fn find_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// Items where `done == false`, in collection order.
pub fn active(items: &[TodoItem]) -> Vec<&TodoItem> {
    items.iter().filter(|item| !item.done).collect()
}

/// Items where `done == true`, in collection order.
pub fn done(items: &[TodoItem]) -> Vec<&TodoItem> {
    items.iter().filter(|item| item.done).collect()
}

/// Mutations accepted by the todo store.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add { title: String },
    Toggle(TodoId),
    Remove(TodoId),
    Edit { id: TodoId, title: String },
    Clear,
    ClearDone,
    ClearActive,
}

/// Reducer for [`TodoState`]. Unknown ids and blank titles are no-ops.
pub fn reduce(state: &mut TodoState, action: TodoAction) -> bool {
    match action {
        TodoAction::Add { title } => match TodoItem::new(&title) {
            Some(item) => {
                state.items.insert(0, item);
                true
            }
            None => false,
        },
        TodoAction::Toggle(id) => match state.find_mut(id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        },
        TodoAction::Remove(id) => {
            let before = state.items.len();
            state.items.retain(|item| item.id != id);
            state.items.len() != before
        }
        TodoAction::Edit { id, title } => {
            let Some(title) = normalize_title(&title) else {
                return false;
            };
            match state.find_mut(id) {
                Some(item) if item.title != title => {
                    item.title = title;
                    true
                }
                _ => false,
            }
        }
        TodoAction::Clear => {
            let changed = !state.items.is_empty();
            state.items.clear();
            changed
        }
        TodoAction::ClearDone => retain_changed(state, |item| !item.done),
        TodoAction::ClearActive => retain_changed(state, |item| item.done),
    }
}

fn retain_changed(state: &mut TodoState, keep: impl Fn(&TodoItem) -> bool) -> bool {
    let before = state.items.len();
    state.items.retain(|item| keep(item));
    state.items.len() != before
}
