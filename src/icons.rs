//! Icon service for the different glyph themes
//!
//! Terminals vary a lot in what they can draw, so every glyph the UI uses is
//! looked up here. Three themes are available: emoji, Unicode symbols and a
//! plain ASCII fallback.

use crate::store::NotificationKind;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub done: &'static str,
}

/// Panel and chrome glyphs
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub active_title: &'static str,
    pub done_title: &'static str,
    pub banner: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
}

/// One glyph per notification kind
#[derive(Debug, Clone)]
pub struct NotificationIcons {
    pub add: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub clear: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_status: TodoStatusIcons,
    pub ui: UiIcons,
    pub notification: NotificationIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "🔳",
                done: "✅",
            },
            ui: UiIcons {
                active_title: "📝",
                done_title: "🏁",
                banner: "👋",
                info: "💡",
                warning: "⚠️",
                light_mode: "☀️",
                dark_mode: "🌙",
            },
            notification: NotificationIcons {
                add: "➕",
                delete: "🗑️",
                edit: "✏️",
                clear: "🧹",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "□",
                done: "✓",
            },
            ui: UiIcons {
                active_title: "▶",
                done_title: "◆",
                banner: "★",
                info: "ⓘ",
                warning: "⚠",
                light_mode: "☼",
                dark_mode: "☾",
            },
            notification: NotificationIcons {
                add: "+",
                delete: "✗",
                edit: "✎",
                clear: "∅",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "[ ]",
                done: "[X]",
            },
            ui: UiIcons {
                active_title: ">",
                done_title: "#",
                banner: "*",
                info: "i",
                warning: "!",
                light_mode: "o",
                dark_mode: "c",
            },
            notification: NotificationIcons {
                add: "+",
                delete: "-",
                edit: "~",
                clear: "0",
            },
        }
    }

    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.icons().todo_status.pending
    }

    #[must_use]
    pub fn todo_done(&self) -> &'static str {
        self.icons().todo_status.done
    }

    /// Checkbox glyph for an item's completion flag
    #[must_use]
    pub fn checkbox(&self, done: bool) -> &'static str {
        if done {
            self.todo_done()
        } else {
            self.todo_pending()
        }
    }

    #[must_use]
    pub fn active_title(&self) -> &'static str {
        self.icons().ui.active_title
    }

    #[must_use]
    pub fn done_title(&self) -> &'static str {
        self.icons().ui.done_title
    }

    #[must_use]
    pub fn banner(&self) -> &'static str {
        self.icons().ui.banner
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    /// Glyph for the theme currently in effect
    #[must_use]
    pub fn theme_mode(&self, dark_mode: bool) -> &'static str {
        let ui = self.icons().ui;
        if dark_mode {
            ui.dark_mode
        } else {
            ui.light_mode
        }
    }

    /// Glyph shown at the start of a toast
    #[must_use]
    pub fn notification(&self, kind: NotificationKind) -> &'static str {
        let icons = self.icons().notification;
        match kind {
            NotificationKind::Add => icons.add,
            NotificationKind::Delete => icons.delete,
            NotificationKind::Edit => icons.edit,
            NotificationKind::Clear => icons.clear,
            NotificationKind::None => self.info(),
        }
    }
}
