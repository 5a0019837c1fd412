//! Likes on videos, tweets, and comments.

pub mod api;
pub mod state;
