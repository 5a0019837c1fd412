//! Authentication feature.
//!
//! # Design
//! - Session state lives in one slice; the bearer token lives in the
//!   client's credential store.
//! - Forms validate before any request is built.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
