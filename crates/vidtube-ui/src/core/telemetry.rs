//! Logging initialisation.
//!
//! # Design
//! - Single entry point installing a `tracing-subscriber` fmt layer filtered
//!   by the configured level.
//! - In the browser each formatted line goes to the devtools console through
//!   `gloo::console`; natively lines go to stderr.
//! - Installing twice is reported, not ignored.

use crate::core::error::TelemetryError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig<'a> {
    /// Filter directive such as `info` or `vidtube_ui=debug`.
    pub level: &'a str,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: crate::core::config::DEFAULT_LOG_LEVEL,
            with_target: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns [`TelemetryError::InvalidFilter`] for a bad level directive and
/// [`TelemetryError::AlreadyInstalled`] when a subscriber is already set.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<(), TelemetryError> {
    let filter = build_filter(config.level)?;
    let layer = fmt::layer()
        .with_target(config.with_target)
        .with_ansi(false);

    #[cfg(target_arch = "wasm32")]
    let layer = layer.without_time().with_writer(|| console::ConsoleWriter);
    #[cfg(not(target_arch = "wasm32"))]
    let layer = layer.with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|_| TelemetryError::InvalidFilter {
        directive: level.to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Writer forwarding each formatted event to `console.log`.
    pub(super) struct ConsoleWriter;

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let line = String::from_utf8_lossy(buf);
            let line = line.trim_end();
            if !line.is_empty() {
                gloo::console::log!(line.to_string());
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        assert_eq!(
            init_logging(&LoggingConfig {
                level: "vidtube_ui=[",
                with_target: false,
            }),
            Err(TelemetryError::InvalidFilter {
                directive: "vidtube_ui=[".into()
            })
        );
    }

    #[test]
    fn second_install_reports_already_installed() {
        let config = LoggingConfig::default();
        let first = init_logging(&config);
        let second = init_logging(&config);
        assert!(first.is_ok() || first == Err(TelemetryError::AlreadyInstalled));
        assert_eq!(second, Err(TelemetryError::AlreadyInstalled));
    }
}
