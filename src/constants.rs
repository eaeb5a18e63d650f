//! Constants used throughout the application
//!
//! This module centralizes UI text, default values and layout limits.

// Notification auto-dismiss
/// Default time a toast stays visible, in milliseconds
pub const NOTIFICATION_TIMEOUT_MS: u64 = 1500;
pub const NOTIFICATION_TIMEOUT_MIN_MS: u64 = 100;
pub const NOTIFICATION_TIMEOUT_MAX_MS: u64 = 60_000;

// Responsive layout
/// Terminal width from which the two panels sit side by side
pub const TWO_COLUMN_MIN_WIDTH: u16 = 80;
pub const TWO_COLUMN_MIN_WIDTH_LOWER: u16 = 20;
pub const TWO_COLUMN_MIN_WIDTH_UPPER: u16 = 400;
/// Height of the welcome banner row
pub const BANNER_HEIGHT: u16 = 3;
/// Height of the toast overlay
pub const TOAST_HEIGHT: u16 = 3;

// UI text
pub const APP_TITLE: &str = "ticklist";
pub const BANNER_TEXT: &str = "Welcome! Press 'a' to add a todo, Space to complete it, 't' to switch theme.";
pub const BANNER_DISMISS_HINT: &str = "x: dismiss";
pub const EMPTY_ACTIVE_TEXT: &str = "Nothing to do. Press 'a' to add a todo.";
pub const EMPTY_DONE_TEXT: &str = "No completed todos yet.";
pub const STATUS_SHORTCUTS: &str = "a: add • e: edit • Space: toggle • d: delete • c: clear panel • ?: help • q: quit";

// Config
pub const CONFIG_FILE_NAME: &str = "ticklist.toml";
pub const CONFIG_DIR_NAME: &str = "ticklist";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const LOG_FILE_NAME: &str = "ticklist.log";

// Dialog titles
pub const DIALOG_TITLE_NEW_TODO: &str = "New Todo";
pub const DIALOG_TITLE_EDIT_TODO: &str = "Edit Todo";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
