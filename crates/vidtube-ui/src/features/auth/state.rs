//! Authentication slice and account forms.
//!
//! # Design
//! - `status` mirrors whether the server accepted the current session.
//! - Form inputs stay as strings and files until an operation validates them.

use crate::core::http::FilePart;
use crate::core::store::Phase;
use crate::core::validation::{FieldValue, FormFields};
use serde_json::Value;
use vidtube_api_models::{
    ChangePasswordRequest, LoginRequest, LoginResponse, TokenPair, UpdateAccountRequest, User,
};

/// Authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// An auth request is in flight.
    pub loading: bool,
    /// The session is authenticated.
    pub status: bool,
    /// Signed-in user.
    pub user: Option<User>,
}

impl AuthSlice {
    /// Id of the signed-in user.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}

/// Auth reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOp {
    /// Account registration.
    Register(Phase<User>),
    /// Login.
    Login(Phase<LoginResponse>),
    /// Logout.
    Logout(Phase<Value>),
    /// Access-token refresh.
    RefreshToken(Phase<TokenPair>),
    /// Password change.
    ChangePassword(Phase<Value>),
    /// Session probe.
    CurrentUser(Phase<User>),
    /// Avatar, cover image, or details update; each returns the full user.
    UpdateProfile(Phase<User>),
}

/// Apply an auth op.
pub fn reduce(slice: &mut AuthSlice, op: AuthOp) {
    match op {
        AuthOp::Register(phase) => slice.loading = !phase.is_settled(),
        AuthOp::ChangePassword(phase) => slice.loading = !phase.is_settled(),
        AuthOp::Login(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(response) => {
                slice.loading = false;
                slice.status = true;
                slice.user = Some(response.user);
            }
            Phase::Rejected(_) => slice.loading = false,
        },
        AuthOp::Logout(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(_) => {
                slice.loading = false;
                slice.status = false;
                slice.user = None;
            }
            Phase::Rejected(_) => slice.loading = false,
        },
        AuthOp::RefreshToken(_) => {}
        AuthOp::CurrentUser(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(user) => {
                slice.loading = false;
                slice.status = true;
                slice.user = Some(user);
            }
            Phase::Rejected(_) => {
                slice.loading = false;
                slice.status = false;
                slice.user = None;
            }
        },
        AuthOp::UpdateProfile(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(user) => {
                slice.loading = false;
                slice.user = Some(user);
            }
            Phase::Rejected(_) => slice.loading = false,
        },
    }
}

/// Registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Display name.
    pub full_name: String,
    /// Handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Required profile picture.
    pub avatar: Option<FilePart>,
    /// Optional channel banner.
    pub cover_image: Option<FilePart>,
}

impl FormFields for RegisterForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "fullName" => FieldValue::Text(&self.full_name),
            "username" => FieldValue::Text(&self.username),
            "email" => FieldValue::Text(&self.email),
            "password" => FieldValue::Text(&self.password),
            "avatar" => FieldValue::Files(usize::from(self.avatar.is_some())),
            "coverImage" => FieldValue::Files(usize::from(self.cover_image.is_some())),
            _ => FieldValue::Missing,
        }
    }
}

/// Login form; the identifier may be a username or an email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username or email.
    pub identifier: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Request body, routing the identifier to `email` or `username`.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        let identifier = self.identifier.trim().to_string();
        let (email, username) = if identifier.contains('@') {
            (Some(identifier), None)
        } else {
            (None, Some(identifier))
        };
        LoginRequest {
            email,
            username,
            password: self.password.clone(),
        }
    }
}

impl FormFields for LoginForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "identifier" => FieldValue::Text(&self.identifier),
            "password" => FieldValue::Text(&self.password),
            _ => FieldValue::Missing,
        }
    }
}

/// Password change form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}

impl ChangePasswordForm {
    /// Request body.
    #[must_use]
    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}

impl FormFields for ChangePasswordForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "oldPassword" => FieldValue::Text(&self.old_password),
            "newPassword" => FieldValue::Text(&self.new_password),
            _ => FieldValue::Missing,
        }
    }
}

/// Personal details form, seeded from the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
}

impl AccountForm {
    /// Form prefilled from `user`, or empty when signed out.
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |user| Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        })
    }

    /// Request body with trimmed values.
    #[must_use]
    pub fn to_request(&self) -> UpdateAccountRequest {
        UpdateAccountRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

impl FormFields for AccountForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "fullName" => FieldValue::Text(&self.full_name),
            "email" => FieldValue::Text(&self.email),
            _ => FieldValue::Missing,
        }
    }
}

/// Single-image upload form (avatar or cover).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageForm {
    /// Selected image.
    pub image: Option<FilePart>,
}

impl FormFields for ImageForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "image" => FieldValue::Files(usize::from(self.image.is_some())),
            _ => FieldValue::Missing,
        }
    }
}
