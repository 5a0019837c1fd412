//! Client-side error types.
//!
//! # Design
//! - Constant messages; context lives in structured fields.
//! - The server's own message is kept separately so the UI can surface it
//!   verbatim without parsing the error text.

use crate::core::validation::ValidationErrors;
use thiserror::Error;

/// Result alias for operations that talk to the API.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the HTTP adapter and the state containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("api transport failure")]
    Transport {
        /// Operation that was being performed.
        operation: &'static str,
        /// Transport-level detail.
        detail: String,
    },
    /// The server answered with a non-2xx status.
    #[error("api request rejected")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the `{ error }` body, when present.
        message: Option<String>,
    },
    /// A 2xx body did not match the expected envelope.
    #[error("api response decode failure")]
    Decode {
        /// Request path.
        path: String,
        /// Decoder detail.
        detail: String,
    },
    /// Form input failed the declarative schema; nothing was sent.
    #[error("form validation failed")]
    Validation(ValidationErrors),
    /// Reading or writing the persisted credential failed.
    #[error("credential storage failure")]
    Storage {
        /// Storage operation that failed.
        operation: &'static str,
        /// Storage detail.
        detail: String,
    },
}

impl ApiError {
    /// Message suitable for an error toast.
    ///
    /// Only server-provided text and validation messages qualify; transport
    /// and decode failures carry no user-facing text.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Validation(errors) => errors.first_message(),
            Self::Transport { .. } | Self::Decode { .. } | Self::Storage { .. } => None,
        }
    }

    /// HTTP status when the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Configuration parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A URL setting could not be parsed.
    #[error("invalid url setting")]
    InvalidUrl {
        /// Setting name.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A URL setting used a scheme other than http(s).
    #[error("unsupported url scheme")]
    UnsupportedScheme {
        /// Setting name.
        field: &'static str,
        /// Scheme that was supplied.
        scheme: String,
    },
}

/// Logging installation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed")]
    AlreadyInstalled,
    /// The configured level directive did not parse.
    #[error("invalid log filter")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::FieldError;

    #[test]
    fn user_message_only_for_server_and_validation_errors() {
        let status = ApiError::Status {
            status: 404,
            message: Some("Video not found".into()),
        };
        assert_eq!(status.user_message(), Some("Video not found"));
        assert_eq!(status.status(), Some(404));

        let silent = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(silent.user_message(), None);

        let transport = ApiError::Transport {
            operation: "send",
            detail: "connection refused".into(),
        };
        assert_eq!(transport.user_message(), None);
        assert_eq!(transport.status(), None);

        let validation = ApiError::Validation(ValidationErrors::from(vec![FieldError {
            field: "email",
            message: "Email is required".into(),
        }]));
        assert_eq!(validation.user_message(), Some("Email is required"));
    }

    #[test]
    fn error_display_is_constant() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Unauthorized request".into()),
        };
        assert_eq!(err.to_string(), "api request rejected");
    }
}
