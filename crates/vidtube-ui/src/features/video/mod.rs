//! Video feed, watch page, and uploads.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
