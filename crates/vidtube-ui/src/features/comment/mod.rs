//! Video comments.

pub mod api;
pub mod state;
