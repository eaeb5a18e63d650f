//! ticklist - a terminal todo list
//!
//! The library holds the whole application so it can be driven from tests:
//!
//! * [`store`] - Todo and UI state with reducers, intents and subscriptions
//! * [`ui`] - Terminal user interface components and the event loop
//! * [`config`] - Application configuration management
//! * [`cli`] - Command-line flags
//! * [`logger`] - Log setup and the in-memory log buffer
//! * [`utils`] - Date/time formatting helpers

/// Command-line argument parsing
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for configuration validation
pub mod error;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Application state containers
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
