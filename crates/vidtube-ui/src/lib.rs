#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! VidTube browser client.
//! Holds the REST adapter, the store and its feature slices, and the Yew front-end entrypoint.

pub mod core;
pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::config::{API_PREFIX, ClientConfig};
    use crate::core::gate::{GateView, gate};

    #[test]
    fn default_config_targets_versioned_api() {
        let config = ClientConfig::default();
        assert!(config.base_url.ends_with(API_PREFIX));
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn gated_routes_prompt_when_signed_out() {
        assert_eq!(gate(true, false), GateView::LoginPrompt);
    }
}
