//! Client configuration.
//!
//! # Design
//! - Defaults match the hosted deployment: the API lives on the same host
//!   as the page under `/api/v1`.
//! - A build-time `VIDTUBE_API_BASE_URL` overrides the derived base.
//! - Inputs are parsed with `url`; bad values surface as [`ConfigError`].

use crate::core::error::ConfigError;
use crate::core::notify::DEFAULT_TOAST_LIMIT;
use url::Url;

/// Path prefix of the REST API on the serving host.
pub const API_PREFIX: &str = "/api/v1";
/// Local storage key for the bearer credential.
pub const DEFAULT_TOKEN_KEY: &str = "token";
/// Page size for paginated listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// How long a toast stays on screen.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;
/// Default tracing level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings for the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Storage key for the access token.
    pub token_key: String,
    /// Page size for paginated fetches.
    pub page_limit: u32,
    /// Maximum visible toasts.
    pub toast_limit: usize,
    /// Toast auto-dismiss delay.
    pub toast_timeout_ms: u32,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:8000{API_PREFIX}"),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            toast_limit: DEFAULT_TOAST_LIMIT,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for a page served from `location`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the location or the build-time override
    /// is not an absolute http(s) URL.
    pub fn from_location(location: &str) -> Result<Self, ConfigError> {
        Self::resolve(location, option_env!("VIDTUBE_API_BASE_URL"))
    }

    fn resolve(location: &str, override_url: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = match override_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => normalize_base(parse_http("api_base_url", value)?),
            None => {
                let page = parse_http("location", location)?;
                let mut base = page;
                base.set_path(API_PREFIX);
                base.set_query(None);
                base.set_fragment(None);
                normalize_base(base)
            }
        };
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }
}

fn parse_http(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

fn normalize_base(url: Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_api_base_from_page_location() -> Result<(), ConfigError> {
        let config = ClientConfig::resolve("https://vidtube.example:8443/watch/v1?t=3#c", None)?;
        assert_eq!(config.base_url, "https://vidtube.example:8443/api/v1");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.page_limit, 10);
        Ok(())
    }

    #[test]
    fn override_wins_and_is_normalized() -> Result<(), ConfigError> {
        let config = ClientConfig::resolve(
            "http://localhost:5173/",
            Some("https://api.vidtube.example/api/v1/"),
        )?;
        assert_eq!(config.base_url, "https://api.vidtube.example/api/v1");
        Ok(())
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            ClientConfig::resolve("not a url", None),
            Err(ConfigError::InvalidUrl {
                field: "location",
                value: "not a url".into()
            })
        );
        assert_eq!(
            ClientConfig::resolve("http://localhost/", Some("ftp://files.example")),
            Err(ConfigError::UnsupportedScheme {
                field: "api_base_url",
                scheme: "ftp".into()
            })
        );
    }
}
