//! Channel profiles and watch history.

pub mod api;
pub mod state;
