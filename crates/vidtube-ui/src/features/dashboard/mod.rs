//! Channel dashboard.

pub mod api;
pub mod state;
