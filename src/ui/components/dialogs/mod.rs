//! Dialog rendering helpers

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
pub mod todo_dialogs;

pub use scroll_behavior::DialogScroll;
