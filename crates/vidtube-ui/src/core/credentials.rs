//! Bearer credential persistence.
//!
//! # Design
//! - The adapter reads the credential on every request, so a login or logout
//!   takes effect for the next call without rebuilding the client.
//! - Blank tokens are treated as absent.

use crate::core::error::ApiResult;
use std::cell::RefCell;

/// Storage for the access token attached to outgoing requests.
pub trait CredentialStore {
    /// Current token, if one is stored and non-blank.
    fn load(&self) -> Option<String>;

    /// Persist a new token.
    ///
    /// # Errors
    /// Returns [`crate::core::error::ApiError::Storage`] when the backing store rejects the write.
    fn save(&self, token: &str) -> ApiResult<()>;

    /// Remove any stored token.
    fn clear(&self);
}

/// In-memory credential store used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
}

impl MemoryCredentials {
    /// Store seeded with an optional token.
    #[must_use]
    pub fn with_token(token: Option<&str>) -> Self {
        Self {
            token: RefCell::new(token.map(str::to_string)),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.token
            .borrow()
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Browser `localStorage` credential store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageCredentials {
    /// Store reading and writing under `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::get::<String>(&self.key)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::set(&self.key, token).map_err(|err| crate::core::error::ApiError::Storage {
            operation: "save",
            detail: err.to_string(),
        })
    }

    fn clear(&self) {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::delete(&self.key);
    }
}
