//! Channel subscriptions.

pub mod api;
pub mod state;
