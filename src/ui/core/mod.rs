//! Core UI functionality for ticklist.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - Action definitions produced by key handling and consumed by the app
//! - [`component`] - Base component trait
//! - [`context`] - Read-only render context (theme, icons, display settings)
//! - [`event_handler`] - Non-blocking terminal event polling
//! - [`notification_timer`] - Single-shot auto-dismiss timer for the toast
//!
//! Components never talk to each other directly. Key presses become
//! [`Action`]s, the app component turns actions into store intents, and the
//! next frame renders from the updated store.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod notification_timer;

pub use actions::{Action, ClearScope, DialogType, PanelKind};
pub use component::Component;
pub use context::ViewContext;
pub use event_handler::{EventHandler, EventType};
pub use notification_timer::NotificationTimer;
