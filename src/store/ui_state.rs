//! Presentation-level state: theme, welcome banner and the live notification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Add,
    Delete,
    Edit,
    Clear,
    #[default]
    None,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::Clear => "clear",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// The single notification slot. Showing a new one overwrites this outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRecord {
    pub visible: bool,
    pub message: String,
    pub kind: NotificationKind,
    pub item: String,
    /// Bumped on every show, so a repeated identical notification is still new.
    pub generation: u64,
}

impl NotificationRecord {
    /// Text to display: the explicit message if any, otherwise derived from kind and item.
    pub fn text(&self) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }
        match self.kind {
            NotificationKind::Add => format!("Added \"{}\"", self.item),
            NotificationKind::Delete => format!("Deleted \"{}\"", self.item),
            NotificationKind::Edit => format!("Updated \"{}\"", self.item),
            NotificationKind::Clear if self.item.is_empty() => "Cleared todos".to_string(),
            NotificationKind::Clear => format!("Cleared \"{}\"", self.item),
            NotificationKind::None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub show_banner: bool,
    pub notif: NotificationRecord,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_banner: true,
            notif: NotificationRecord::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleDarkMode,
    DismissBanner,
    ShowNotif {
        kind: NotificationKind,
        item: Option<String>,
        message: Option<String>,
    },
    HideNotif,
}

/// Reducer for [`UiState`].
pub fn reduce(state: &mut UiState, action: UiAction) -> bool {
    match action {
        UiAction::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            true
        }
        UiAction::DismissBanner => {
            let changed = state.show_banner;
            state.show_banner = false;
            changed
        }
        UiAction::ShowNotif { kind, item, message } => {
            state.notif = NotificationRecord {
                visible: true,
                message: message.unwrap_or_default(),
                kind,
                item: item.unwrap_or_default(),
                generation: state.notif.generation.wrapping_add(1),
            };
            true
        }
        UiAction::HideNotif => {
            let hidden = NotificationRecord {
                generation: state.notif.generation,
                ..NotificationRecord::default()
            };
            let changed = state.notif != hidden;
            state.notif = hidden;
            changed
        }
    }
}
