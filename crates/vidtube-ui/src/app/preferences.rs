//! Environment helpers for the app shell.

use crate::core::config::ClientConfig;
use crate::core::credentials::LocalStorageCredentials;
use crate::core::http::ApiClient;
use crate::core::runner::Services;
use crate::core::telemetry::{LoggingConfig, init_logging};
use crate::services::fetch::FetchTransport;
use gloo::console;
use gloo::utils::window;
use std::rc::Rc;

/// Configuration for the current page; falls back to defaults when the
/// location cannot be parsed.
pub(crate) fn load_config() -> ClientConfig {
    let href = window().location().href().unwrap_or_default();
    match ClientConfig::from_location(&href) {
        Ok(config) => config,
        Err(err) => {
            console::warn!(format!("vidtube: {err}; using default API base"));
            ClientConfig::default()
        }
    }
}

pub(crate) fn install_logging(config: &ClientConfig) {
    let logging = LoggingConfig {
        level: &config.log_level,
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        console::warn!(format!("vidtube: {err}"));
    }
}

pub(crate) fn build_services(config: &ClientConfig) -> Services<FetchTransport> {
    let credentials = Rc::new(LocalStorageCredentials::new(config.token_key.clone()));
    Services::new(ApiClient::new(
        FetchTransport,
        config.base_url.clone(),
        credentials,
    ))
}
