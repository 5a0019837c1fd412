//! Account and session operations.

use crate::core::error::ApiResult;
use crate::core::http::{MultipartForm, Transport};
use crate::core::ledger::ResourceKey;
use crate::core::runner::{FailureToast, OpSpec, Services, SuccessToast, run, validate};
use crate::core::store::StoreAction;
use crate::core::validation::{
    CHANGE_PASSWORD, IMAGE_UPLOAD, LOGIN, REGISTER, UPDATE_ACCOUNT,
};
use crate::features::auth::state::{
    AccountForm, AuthOp, ChangePasswordForm, ImageForm, LoginForm, RegisterForm,
};
use serde_json::Value;
use vidtube_api_models::{Envelope, LoginResponse, RefreshTokenRequest, TokenPair, User};

/// Create an account from the registration form.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn register<T: Transport>(
    services: &Services<T>,
    form: RegisterForm,
) -> ApiResult<Envelope<User>> {
    validate(services, &REGISTER, &form)?;
    let body = MultipartForm::new()
        .optional_file("avatar", form.avatar)
        .text("username", form.username.trim())
        .text("email", form.email.trim())
        .text("password", form.password)
        .text("fullName", form.full_name.trim())
        .optional_file("coverImage", form.cover_image);
    run(
        services,
        OpSpec::mutation("register", SuccessToast::Fixed("Registered successfully!!!")),
        |phase| StoreAction::Auth(AuthOp::Register(phase)),
        services.client.post_multipart("/users/register", body),
    )
    .await
}

/// Sign in and persist the returned access token.
///
/// # Errors
/// Validation, transport, server, and credential storage failures.
pub async fn login<T: Transport>(
    services: &Services<T>,
    form: &LoginForm,
) -> ApiResult<Envelope<LoginResponse>> {
    validate(services, &LOGIN, form)?;
    let envelope = run(
        services,
        OpSpec::mutation("login", SuccessToast::Silent),
        |phase| StoreAction::Auth(AuthOp::Login(phase)),
        services
            .client
            .post_json("/users/login", &form.to_request()),
    )
    .await?;
    if let Some(token) = envelope.data.access_token.as_deref() {
        services.client.credentials().save(token)?;
    }
    Ok(envelope)
}

/// End the session and forget the stored token.
///
/// # Errors
/// Transport and server failures; the token is kept when logout fails.
pub async fn logout<T: Transport>(services: &Services<T>) -> ApiResult<Envelope<Value>> {
    let envelope = run(
        services,
        OpSpec::mutation("logout", SuccessToast::ServerMessage),
        |phase| StoreAction::Auth(AuthOp::Logout(phase)),
        services.client.post_empty("/users/logout"),
    )
    .await?;
    services.client.credentials().clear();
    Ok(envelope)
}

/// Exchange a refresh token for a new access token.
///
/// # Errors
/// Transport, server, and credential storage failures.
pub async fn refresh_access_token<T: Transport>(
    services: &Services<T>,
    refresh_token: &str,
) -> ApiResult<Envelope<TokenPair>> {
    let body = RefreshTokenRequest {
        refresh_token: refresh_token.to_string(),
    };
    let envelope = run(
        services,
        OpSpec::mutation("refresh_access_token", SuccessToast::Silent),
        |phase| StoreAction::Auth(AuthOp::RefreshToken(phase)),
        services.client.post_json("/users/refresh-token", &body),
    )
    .await?;
    services
        .client
        .credentials()
        .save(&envelope.data.access_token)?;
    Ok(envelope)
}

/// Change the signed-in user's password.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn change_password<T: Transport>(
    services: &Services<T>,
    form: &ChangePasswordForm,
) -> ApiResult<Envelope<Value>> {
    validate(services, &CHANGE_PASSWORD, form)?;
    run(
        services,
        OpSpec::mutation("change_password", SuccessToast::ServerMessage),
        |phase| StoreAction::Auth(AuthOp::ChangePassword(phase)),
        services
            .client
            .post_json("/users/change-password", &form.to_request()),
    )
    .await
}

/// Probe the session; a failure marks the client signed out.
///
/// # Errors
/// Transport and server failures.
pub async fn current_user<T: Transport>(services: &Services<T>) -> ApiResult<Envelope<User>> {
    const PATH: &str = "/users/current-user";
    run(
        services,
        OpSpec::fetch("current_user", ResourceKey::path(PATH)).on_failure(FailureToast::Silent),
        |phase| StoreAction::Auth(AuthOp::CurrentUser(phase)),
        services.client.get(PATH, &[]),
    )
    .await
}

/// Replace the profile picture.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn update_avatar<T: Transport>(
    services: &Services<T>,
    form: ImageForm,
) -> ApiResult<Envelope<User>> {
    validate(services, &IMAGE_UPLOAD, &form)?;
    run(
        services,
        OpSpec::mutation(
            "update_avatar",
            SuccessToast::Fixed("Avatar updated successfully!"),
        )
        .on_failure(FailureToast::Fallback("Something went wrong!")),
        |phase| StoreAction::Auth(AuthOp::UpdateProfile(phase)),
        services.client.patch_multipart(
            "/users/avatar",
            MultipartForm::new().optional_file("avatar", form.image),
        ),
    )
    .await
}

/// Replace the channel banner.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn update_cover_image<T: Transport>(
    services: &Services<T>,
    form: ImageForm,
) -> ApiResult<Envelope<User>> {
    validate(services, &IMAGE_UPLOAD, &form)?;
    run(
        services,
        OpSpec::mutation("update_cover_image", SuccessToast::ServerMessage),
        |phase| StoreAction::Auth(AuthOp::UpdateProfile(phase)),
        services.client.patch_multipart(
            "/users/cover-image",
            MultipartForm::new().optional_file("coverImage", form.image),
        ),
    )
    .await
}

/// Update display name and email.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn update_account<T: Transport>(
    services: &Services<T>,
    form: &AccountForm,
) -> ApiResult<Envelope<User>> {
    validate(services, &UPDATE_ACCOUNT, form)?;
    run(
        services,
        OpSpec::mutation(
            "update_account",
            SuccessToast::Fixed("Updated details successfully!!!"),
        ),
        |phase| StoreAction::Auth(AuthOp::UpdateProfile(phase)),
        services
            .client
            .patch_json("/users/update-account", &form.to_request()),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::http::{FilePart, HttpMethod, RequestBody};
    use crate::core::runner::test_support::{stub_services, toast_texts};
    use serde_json::json;

    fn image(name: &str) -> FilePart {
        FilePart {
            file_name: name.into(),
            mime_type: Some("image/png".into()),
            bytes: b"img".to_vec(),
        }
    }

    fn user_json(id: &str) -> Value {
        json!({"_id": id, "username": "ada", "fullName": "Ada L", "email": "ada@example.com"})
    }

    #[tokio::test]
    async fn register_sends_multipart_fields_and_toasts() -> ApiResult<()> {
        let (services, stub) = stub_services(None);
        stub.push_json(201, &json!({"data": user_json("u1"), "message": "User registered", "success": true}));

        register(
            &services,
            RegisterForm {
                full_name: "Ada L".into(),
                username: "ada".into(),
                email: "ada@example.com".into(),
                password: "secret".into(),
                avatar: Some(image("a.png")),
                cover_image: None,
            },
        )
        .await?;

        let request = stub.last_request().expect("request");
        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.ends_with("/users/register"));
        match request.body {
            RequestBody::Multipart(form) => assert_eq!(
                form.field_names(),
                ["avatar", "username", "email", "password", "fullName"]
            ),
            other => panic!("unexpected body {other:?}"),
        }
        assert_eq!(toast_texts(&services), vec!["Registered successfully!!!".to_string()]);
        assert!(!services.state().auth.loading);
        Ok(())
    }

    #[tokio::test]
    async fn register_without_avatar_is_rejected_locally() {
        let (services, stub) = stub_services(None);
        let err = register(
            &services,
            RegisterForm {
                full_name: "Ada".into(),
                username: "ada".into(),
                email: "ada@example.com".into(),
                password: "pw".into(),
                ..RegisterForm::default()
            },
        )
        .await
        .expect_err("avatar missing");
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(stub.requests().is_empty());
        assert_eq!(toast_texts(&services), vec!["Avatar is required".to_string()]);
    }

    #[tokio::test]
    async fn login_persists_token_for_later_requests() -> ApiResult<()> {
        let (services, stub) = stub_services(None);
        stub.push_json(
            200,
            &json!({"data": {"user": user_json("u1"), "accessToken": "acc-1", "refreshToken": "ref-1"}, "success": true}),
        );
        stub.push_json(200, &json!({"data": user_json("u1"), "success": true}));

        login(
            &services,
            &LoginForm {
                identifier: "ada@example.com".into(),
                password: "secret".into(),
            },
        )
        .await?;
        let state = services.state();
        assert!(state.auth.status);
        assert_eq!(state.auth.user_id(), Some("u1"));

        current_user(&services).await?;
        let request = stub.last_request().expect("request");
        assert_eq!(request.header("Authorization"), Some("Bearer acc-1"));
        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_session_and_token() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("acc-1"));
        stub.push_json(200, &json!({"data": user_json("u1"), "success": true}));
        stub.push_json(200, &json!({"data": {}, "message": "User logged out", "success": true}));

        current_user(&services).await?;
        logout(&services).await?;

        let state = services.state();
        assert!(!state.auth.status);
        assert!(state.auth.user.is_none());
        assert_eq!(services.client.credentials().load(), None);
        assert_eq!(toast_texts(&services), vec!["User logged out".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn expired_session_signs_out_quietly() {
        let (services, stub) = stub_services(Some("expired"));
        stub.push_json(401, &json!({"error": "Invalid access token"}));

        let err = current_user(&services).await.expect_err("unauthorized");
        assert_eq!(err.status(), Some(401));
        let state = services.state();
        assert!(!state.auth.status);
        assert!(!state.auth.loading);
        assert!(toast_texts(&services).is_empty());
    }

    #[tokio::test]
    async fn avatar_failure_without_server_message_still_toasts() {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_failure("offline");
        stub.push_json(413, &json!({"error": "File too large"}));

        let form = || ImageForm {
            image: Some(image("a.png")),
        };
        assert!(update_avatar(&services, form()).await.is_err());
        assert!(update_avatar(&services, form()).await.is_err());
        assert_eq!(
            toast_texts(&services),
            vec!["Something went wrong!".to_string(), "File too large".to_string()]
        );
    }

    #[tokio::test]
    async fn refresh_replaces_stored_token() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("old"));
        stub.push_json(200, &json!({"data": {"accessToken": "new", "refreshToken": "r2"}, "success": true}));

        refresh_access_token(&services, "r1").await?;
        assert_eq!(services.client.credentials().load().as_deref(), Some("new"));
        let request = stub.last_request().expect("request");
        assert!(matches!(request.body, RequestBody::Json(ref body) if body.contains("\"refreshToken\":\"r1\"")));
        Ok(())
    }

    #[tokio::test]
    async fn profile_updates_replace_user() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": user_json("u1"), "message": "Avatar updated", "success": true}));
        stub.push_json(200, &json!({"data": user_json("u1"), "message": "Cover image updated", "success": true}));
        stub.push_json(
            200,
            &json!({"data": {"_id": "u1", "username": "ada", "fullName": "Ada Lovelace", "email": "ada@x.io"}, "success": true}),
        );

        update_avatar(&services, ImageForm { image: Some(image("a.png")) }).await?;
        update_cover_image(&services, ImageForm { image: Some(image("c.png")) }).await?;
        update_account(
            &services,
            &AccountForm {
                full_name: "Ada Lovelace".into(),
                email: "ada@x.io".into(),
            },
        )
        .await?;

        let requests = stub.requests();
        assert!(requests[0].url.ends_with("/users/avatar"));
        assert!(requests[1].url.ends_with("/users/cover-image"));
        assert!(matches!(&requests[1].body, RequestBody::Multipart(form) if form.field_names() == ["coverImage"]));
        assert_eq!(requests[2].method, HttpMethod::Patch);
        assert_eq!(
            services.state().auth.user.as_ref().map(|u| u.full_name.as_str()),
            Some("Ada Lovelace")
        );
        assert_eq!(
            toast_texts(&services),
            vec![
                "Avatar updated successfully!".to_string(),
                "Cover image updated".to_string(),
                "Updated details successfully!!!".to_string(),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn change_password_rejection_keeps_state() {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(400, &json!({"error": "Invalid old password"}));
        let result = change_password(
            &services,
            &ChangePasswordForm {
                old_password: "wrong".into(),
                new_password: "longenough".into(),
            },
        )
        .await;
        assert!(result.is_err());
        assert!(!services.state().auth.loading);
        assert_eq!(toast_texts(&services), vec!["Invalid old password".to_string()]);
    }
}
