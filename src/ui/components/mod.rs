//! Reusable UI components

// Stateless render helpers
pub mod banner;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod toast;
pub mod todo_item;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod todo_panel_component;

// Component exports
pub use banner::Banner;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use toast::Toast;
pub use todo_panel_component::TodoPanelComponent;
