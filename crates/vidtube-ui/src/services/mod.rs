//! Transport implementations behind the REST adapter.
//!
//! # Design
//! - The browser build talks through `gloo-net`; native builds use `reqwest`.
//! - Tests script responses with an in-memory transport.

#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(test)]
pub(crate) mod stub;
