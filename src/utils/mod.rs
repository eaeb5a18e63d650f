//! Utility modules for ticklist.
//!
//! - [`datetime`] - Human-readable formatting of todo creation times

pub mod datetime;
