//! Terminal user interface: components, layout, theme and the event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use renderer::run_app;
