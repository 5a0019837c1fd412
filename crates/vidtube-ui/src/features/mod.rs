//! Feature slices, one per API domain.
//!
//! # Design
//! - Each domain owns a pure `state` reducer and an `api` module of
//!   operations driven through the shared runner.
//! - Views live next to the feature they render and are wasm-only.

pub mod auth;
pub mod comment;
pub mod composer;
pub mod dashboard;
pub mod like;
pub mod playlist;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;
