//! Shared lifecycle for container operations.
//!
//! # Design
//! - Operations receive their dependencies through [`Services`]; nothing
//!   reaches for a global client.
//! - [`run`] owns the pending/fulfilled/rejected bookkeeping, toasts, and
//!   logging so each operation only describes its call and its reduction.
//! - Errors are re-raised after being recorded so callers can chain.

use crate::core::error::{ApiError, ApiResult};
use crate::core::http::{ApiClient, Transport};
use crate::core::ledger::{ResourceKey, Ticket};
use crate::core::notify::ToastKind;
use crate::core::store::{AppStore, Failure, Phase, StoreAction};
use crate::core::validation::{FormFields, Schema};
use std::future::Future;
use std::rc::Rc;
use vidtube_api_models::Envelope;
use yewdux::prelude::Dispatch;

/// Dependencies handed to every container operation.
pub struct Services<T> {
    /// Shared API client.
    pub client: Rc<ApiClient<T>>,
    /// Store handle.
    pub dispatch: Dispatch<AppStore>,
}

impl<T> Clone for Services<T> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<T> PartialEq for Services<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

impl<T: Transport> Services<T> {
    /// Bundle a client with the global store.
    #[must_use]
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client: Rc::new(client),
            dispatch: Dispatch::<AppStore>::new(),
        }
    }
}

impl<T> Services<T> {
    /// Snapshot of the store.
    #[must_use]
    pub fn state(&self) -> Rc<AppStore> {
        self.dispatch.get()
    }

    /// Apply a synchronous action.
    pub fn apply(&self, action: StoreAction) {
        self.update(|store| store.apply(action));
    }

    /// Push a toast.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.update(|store| {
            store.notifications.push(kind, message);
        });
    }

    /// Remove a toast.
    pub fn dismiss(&self, id: u64) {
        self.update(|store| store.notifications.dismiss(id));
    }

    /// Mutate the store in place and hand back whatever the closure computed.
    ///
    /// Runs synchronously between two awaits, so no other operation can
    /// interleave with the write. `None` only if the dispatcher skipped the
    /// closure.
    pub fn update<O>(&self, f: impl FnOnce(&mut AppStore) -> O) -> Option<O> {
        let mut out = None;
        self.dispatch.reduce_mut(|store| {
            out = Some(f(store));
        });
        out
    }
}

/// What to show when an operation succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessToast {
    /// Nothing.
    Silent,
    /// The envelope's `message`, when present and the envelope reports success.
    ServerMessage,
    /// A fixed client-side text.
    Fixed(&'static str),
}

/// What to show when an operation fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureToast {
    /// Nothing; the failure is only recorded in the slice.
    Silent,
    /// The server or validation message, when there is one.
    ServerMessage,
    /// The server or validation message, else the given text.
    Fallback(&'static str),
}

/// Static description of one operation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpSpec {
    /// Operation name used in logs.
    pub label: &'static str,
    /// Resource key for latest-request-wins; `None` for mutations.
    pub key: Option<ResourceKey>,
    /// Success toast policy.
    pub success: SuccessToast,
    /// Failure toast policy.
    pub failure: FailureToast,
}

impl OpSpec {
    /// Keyed fetch with no success toast.
    #[must_use]
    pub const fn fetch(label: &'static str, key: ResourceKey) -> Self {
        Self {
            label,
            key: Some(key),
            success: SuccessToast::Silent,
            failure: FailureToast::ServerMessage,
        }
    }

    /// Unkeyed mutation with the given success toast.
    #[must_use]
    pub const fn mutation(label: &'static str, success: SuccessToast) -> Self {
        Self {
            label,
            key: None,
            success,
            failure: FailureToast::ServerMessage,
        }
    }

    /// Replace the failure toast policy.
    #[must_use]
    pub fn on_failure(self, failure: FailureToast) -> Self {
        Self { failure, ..self }
    }
}

/// Drive one operation through pending, settle, notify, and log.
///
/// `wrap` builds the slice action for each phase; `call` is the adapter
/// future. The envelope is returned unchanged on success.
///
/// # Errors
/// Returns the adapter's error after it has been recorded in the store.
pub async fn run<T, R, W, F>(
    services: &Services<T>,
    spec: OpSpec,
    wrap: W,
    call: F,
) -> ApiResult<Envelope<R>>
where
    T: Transport,
    R: Clone,
    W: Fn(Phase<R>) -> StoreAction,
    F: Future<Output = ApiResult<Envelope<R>>>,
{
    let ticket = begin(services, spec.key.clone(), wrap(Phase::Pending));
    tracing::debug!(operation = spec.label, seq = ticket.seq(), "operation dispatched");

    let result = call.await;
    let (phase, toast) = match &result {
        Ok(envelope) => (
            Phase::Fulfilled(envelope.data.clone()),
            success_toast(spec.success, envelope).map(|text| (ToastKind::Success, text)),
        ),
        Err(err) => (
            Phase::Rejected(failure_of(err)),
            failure_toast(spec.failure, err).map(|text| (ToastKind::Error, text)),
        ),
    };

    let applied = services
        .update(|store| {
            let applied = store.settle(&ticket, wrap(phase));
            if applied && let Some((kind, text)) = toast {
                store.notifications.push(kind, text);
            }
            applied
        })
        .unwrap_or(false);

    match &result {
        Ok(_) if applied => {
            tracing::debug!(operation = spec.label, "operation fulfilled");
        }
        Err(err) if applied => {
            tracing::warn!(
                operation = spec.label,
                error = %err,
                status = ?err.status(),
                "operation failed"
            );
        }
        _ => {
            tracing::debug!(operation = spec.label, seq = ticket.seq(), "stale response dropped");
        }
    }
    result
}

/// Validate a form before dispatching anything.
///
/// # Errors
/// Returns [`ApiError::Validation`] and raises an error toast when the form
/// fails its schema.
pub fn validate<T>(
    services: &Services<T>,
    schema: &Schema,
    form: &impl FormFields,
) -> ApiResult<()> {
    match schema.validate(form) {
        Ok(()) => Ok(()),
        Err(errors) => {
            tracing::warn!(form = schema.form, fields = errors.errors().len(), "form rejected");
            if let Some(message) = errors.first_message() {
                services.notify(ToastKind::Error, message);
            }
            Err(ApiError::Validation(errors))
        }
    }
}

fn begin<T>(services: &Services<T>, key: Option<ResourceKey>, pending: StoreAction) -> Ticket {
    services
        .update(|store| {
            let ticket = store.requests.begin(key);
            store.apply(pending);
            ticket
        })
        .unwrap_or_default()
}

fn success_toast<R>(policy: SuccessToast, envelope: &Envelope<R>) -> Option<String> {
    match policy {
        SuccessToast::Silent => None,
        SuccessToast::ServerMessage => envelope
            .message
            .clone()
            .filter(|text| envelope.success && !text.trim().is_empty()),
        SuccessToast::Fixed(text) => Some(text.to_string()),
    }
}

fn failure_toast(policy: FailureToast, err: &ApiError) -> Option<String> {
    match policy {
        FailureToast::Silent => None,
        FailureToast::ServerMessage => err.user_message().map(str::to_string),
        FailureToast::Fallback(text) => Some(err.user_message().unwrap_or(text).to_string()),
    }
}

fn failure_of(err: &ApiError) -> Failure {
    Failure {
        message: err.user_message().map(str::to_string),
        status: err.status(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::credentials::MemoryCredentials;
    use crate::services::stub::StubTransport;

    /// Services over a scripted transport with a fresh store.
    pub(crate) fn stub_services(token: Option<&str>) -> (Services<StubTransport>, StubTransport) {
        let stub = StubTransport::default();
        let client = ApiClient::new(
            stub.clone(),
            "http://localhost:8000/api/v1",
            Rc::new(MemoryCredentials::with_token(token)),
        );
        let services = Services::new(client);
        services.dispatch.set(AppStore::default());
        (services, stub)
    }

    /// Texts of the visible toasts.
    pub(crate) fn toast_texts<T>(services: &Services<T>) -> Vec<String> {
        services
            .state()
            .notifications
            .toasts()
            .iter()
            .map(|toast| toast.message.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{stub_services, toast_texts};
    use super::*;
    use crate::core::validation::CONTENT;
    use crate::core::validation::FieldValue;
    use crate::features::video::state::VideoOp;
    use serde_json::json;
    use vidtube_api_models::Video;

    struct Content(&'static str);

    impl FormFields for Content {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "content" => FieldValue::Text(self.0),
                _ => FieldValue::Missing,
            }
        }
    }

    #[tokio::test]
    async fn failure_clears_loading_and_toasts_server_message() {
        let (services, stub) = stub_services(None);
        stub.push_json(404, &json!({"error": "Video not found"}));

        let result = run(
            &services,
            OpSpec::fetch("fetch_video", ResourceKey::path("/videos/v9")),
            |phase| StoreAction::Video(VideoOp::FetchVideo(phase)),
            services.client.get::<Video>("/videos/v9", &[]),
        )
        .await;

        assert!(result.is_err());
        let state = services.state();
        assert!(!state.video.loading);
        assert!(state.video.current.is_none());
        assert_eq!(toast_texts(&services), vec!["Video not found".to_string()]);
    }

    #[tokio::test]
    async fn failure_without_message_raises_no_toast() {
        let (services, stub) = stub_services(None);
        stub.push_failure("offline");

        let result = run(
            &services,
            OpSpec::fetch("fetch_video", ResourceKey::path("/videos/v1")),
            |phase| StoreAction::Video(VideoOp::FetchVideo(phase)),
            services.client.get::<Video>("/videos/v1", &[]),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Transport { .. })));
        assert!(toast_texts(&services).is_empty());
    }

    #[tokio::test]
    async fn failure_policy_can_silence_or_fill_in_a_message() {
        let (services, stub) = stub_services(None);
        stub.push_json(401, &json!({"error": "Unauthorized request"}));
        stub.push_failure("offline");
        stub.push_json(400, &json!({"error": "Invalid file"}));

        for policy in [
            FailureToast::Silent,
            FailureToast::Fallback("Something went wrong!"),
            FailureToast::Fallback("Something went wrong!"),
        ] {
            let _ = run(
                &services,
                OpSpec::fetch("fetch_video", ResourceKey::path("/videos/v1")).on_failure(policy),
                |phase| StoreAction::Video(VideoOp::FetchVideo(phase)),
                services.client.get::<Video>("/videos/v1", &[]),
            )
            .await;
        }

        assert_eq!(
            toast_texts(&services),
            vec!["Something went wrong!".to_string(), "Invalid file".to_string()]
        );
    }

    #[test]
    fn update_hands_back_the_closure_result() {
        let (services, _stub) = stub_services(None);
        let id = services.update(|store| store.notifications.push(ToastKind::Info, "hi"));
        assert!(id.is_some());
        assert_eq!(toast_texts(&services), vec!["hi".to_string()]);
    }

    #[tokio::test]
    async fn server_message_toast_requires_success_flag() {
        let (services, stub) = stub_services(None);
        stub.push_json(
            200,
            &json!({"data": {"_id": "v1"}, "message": "Video fetched", "success": true}),
        );
        run(
            &services,
            OpSpec::mutation("fetch_video", SuccessToast::ServerMessage),
            |phase| StoreAction::Video(VideoOp::FetchVideo(phase)),
            services.client.get::<Video>("/videos/v1", &[]),
        )
        .await
        .expect("fulfilled");
        assert_eq!(toast_texts(&services), vec!["Video fetched".to_string()]);
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_transport() {
        let (services, stub) = stub_services(None);
        let err = validate(&services, &CONTENT, &Content("   ")).expect_err("blank");
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(stub.requests().is_empty());
        assert_eq!(toast_texts(&services), vec!["Content is required".to_string()]);
        assert!(validate(&services, &CONTENT, &Content("hello")).is_ok());
    }
}
