//! REST adapter shared by every state container.
//!
//! # Design
//! - One client per app boot; it owns the base URL and reads the bearer
//!   credential from its [`CredentialStore`] on every request.
//! - The wire is abstracted behind [`Transport`] so the browser (`gloo-net`)
//!   and native (`reqwest`) stacks share URL building, auth, and decoding.
//! - 2xx bodies decode into [`Envelope`]; anything else becomes
//!   [`ApiError::Status`] carrying the server's `{ error }` text.
//! - No retries, no backoff, no client-side timeout.

use crate::core::credentials::CredentialStore;
use crate::core::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::rc::Rc;
use vidtube_api_models::{Envelope, ErrorBody};

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl HttpMethod {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File selected by the user, read into memory for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser.
    pub mime_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// One multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File field.
    File(FilePart),
}

/// Ordered multipart body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Append a file field.
    #[must_use]
    pub fn file(mut self, name: &str, part: FilePart) -> Self {
        self.fields.push((name.to_string(), FormValue::File(part)));
        self
    }

    /// Append a file field when one was selected.
    #[must_use]
    pub fn optional_file(self, name: &str, part: Option<FilePart>) -> Self {
        match part {
            Some(part) => self.file(name, part),
            None => self,
        }
    }

    /// Fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// Consume the form into its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<(String, FormValue)> {
        self.fields
    }

    /// Names of the fields in insertion order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// Multipart form.
    Multipart(MultipartForm),
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Absolute URL including the query string.
    pub url: String,
    /// Extra headers (the bearer credential, JSON content type).
    pub headers: Vec<(String, String)>,
    /// Body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text.
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Executes a resolved request.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the raw response.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when no HTTP response was received.
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Configured API client.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    credentials: Rc<dyn CredentialStore>,
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Build a client against `base_url` using `credentials` for auth.
    #[must_use]
    pub fn new(
        transport: T,
        base_url: impl Into<String>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential store consulted on every request.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for `path` with URL-encoded `query` pairs.
    #[must_use]
    pub fn url_for(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let encoded = encode_query(query);
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    /// GET `path` with query pairs.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Envelope<R>> {
        self.send(HttpMethod::Get, self.url_for(path, query), RequestBody::Empty)
            .await
    }

    /// POST a JSON body.
    ///
    /// # Errors
    /// Propagates encode, transport, status, and decode failures.
    pub async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Envelope<R>> {
        let body = encode_json(path, body)?;
        self.send(HttpMethod::Post, self.url_for(path, &[]), body)
            .await
    }

    /// POST with no body.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<R>> {
        self.send(HttpMethod::Post, self.url_for(path, &[]), RequestBody::Empty)
            .await
    }

    /// POST a multipart form.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> ApiResult<Envelope<R>> {
        self.send(
            HttpMethod::Post,
            self.url_for(path, &[]),
            RequestBody::Multipart(form),
        )
        .await
    }

    /// PATCH a JSON body.
    ///
    /// # Errors
    /// Propagates encode, transport, status, and decode failures.
    pub async fn patch_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Envelope<R>> {
        let body = encode_json(path, body)?;
        self.send(HttpMethod::Patch, self.url_for(path, &[]), body)
            .await
    }

    /// PATCH with no body.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn patch_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<R>> {
        self.send(HttpMethod::Patch, self.url_for(path, &[]), RequestBody::Empty)
            .await
    }

    /// PATCH a multipart form.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn patch_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> ApiResult<Envelope<R>> {
        self.send(
            HttpMethod::Patch,
            self.url_for(path, &[]),
            RequestBody::Multipart(form),
        )
        .await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<R>> {
        self.send(HttpMethod::Delete, self.url_for(path, &[]), RequestBody::Empty)
            .await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: String,
        body: RequestBody,
    ) -> ApiResult<Envelope<R>> {
        let mut headers = Vec::new();
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.credentials.load() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        tracing::debug!(method = %method, url = %url, "dispatching api request");
        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let url = request.url.clone();
        let response = self.transport.execute(request).await?;
        decode_response(&url, response)
    }
}

fn encode_json<B: Serialize + ?Sized>(path: &str, body: &B) -> ApiResult<RequestBody> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|err| ApiError::Decode {
            path: path.to_string(),
            detail: err.to_string(),
        })
}

fn encode_query(query: &[(&str, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_response<R: DeserializeOwned>(
    url: &str,
    response: HttpResponse,
) -> ApiResult<Envelope<R>> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(ErrorBody::into_message);
        tracing::warn!(status = response.status, url = %url, "api request rejected");
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }
    serde_json::from_str::<Envelope<R>>(&response.body).map_err(|err| ApiError::Decode {
        path: url.to_string(),
        detail: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::MemoryCredentials;
    use crate::services::stub::StubTransport;
    use serde_json::{Value, json};

    fn client(token: Option<&str>) -> (ApiClient<StubTransport>, StubTransport) {
        let stub = StubTransport::default();
        let client = ApiClient::new(
            stub.clone(),
            "http://localhost:8000/api/v1/",
            Rc::new(MemoryCredentials::with_token(token)),
        );
        (client, stub)
    }

    #[test]
    fn url_for_joins_slashes_and_encodes_query() {
        let (client, _) = client(None);
        assert_eq!(
            client.url_for("/videos", &[("query", "rust & wasm".into()), ("page", "2".into())]),
            "http://localhost:8000/api/v1/videos?query=rust%20%26%20wasm&page=2"
        );
        assert_eq!(
            client.url_for("users/current-user", &[]),
            "http://localhost:8000/api/v1/users/current-user"
        );
    }

    #[tokio::test]
    async fn bearer_header_attached_only_with_token() -> ApiResult<()> {
        let (anonymous, stub) = client(None);
        stub.push_json(200, &json!({"data": {}, "message": "ok", "success": true}));
        let _: Envelope<Value> = anonymous.get("/videos", &[]).await?;
        assert_eq!(stub.last_request().and_then(|r| r.header("authorization").map(str::to_string)), None);

        let (authed, stub) = client(Some("tok-1"));
        stub.push_json(200, &json!({"data": {}, "message": "ok", "success": true}));
        let _: Envelope<Value> = authed.get("/videos", &[]).await?;
        assert_eq!(
            stub.last_request()
                .and_then(|r| r.header("Authorization").map(str::to_string))
                .as_deref(),
            Some("Bearer tok-1")
        );
        Ok(())
    }

    #[tokio::test]
    async fn non_success_maps_error_body() {
        let (client, stub) = client(None);
        stub.push_json(409, &json!({"error": "User with email or username already exists"}));
        let err = client
            .post_empty::<Value>("/users/register")
            .await
            .expect_err("conflict");
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: Some("User with email or username already exists".into()),
            }
        );

        stub.push_raw(502, "<html>bad gateway</html>");
        let err = client.get::<Value>("/videos", &[]).await.expect_err("gateway");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None
            }
        );
    }

    #[tokio::test]
    async fn undecodable_success_is_decode_error() {
        let (client, stub) = client(None);
        stub.push_raw(200, "not json");
        let err = client.get::<Value>("/videos", &[]).await.expect_err("decode");
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn json_bodies_set_content_type() -> ApiResult<()> {
        let (client, stub) = client(None);
        stub.push_json(200, &json!({"data": {"_id": "p1"}, "success": true}));
        let _: Envelope<Value> = client
            .patch_json("/playlist/p1", &json!({"name": "n", "description": "d"}))
            .await?;
        let request = stub.last_request().expect("recorded");
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(matches!(request.body, RequestBody::Json(ref body) if body.contains("\"name\":\"n\"")));
        Ok(())
    }

    #[test]
    fn multipart_form_keeps_field_order() {
        let form = MultipartForm::new()
            .text("title", "Intro")
            .optional_file("thumbnail", None)
            .file(
                "videoFile",
                FilePart {
                    file_name: "clip.mp4".into(),
                    mime_type: Some("video/mp4".into()),
                    bytes: vec![0, 1, 2],
                },
            );
        assert_eq!(form.field_names(), ["title", "videoFile"]);
    }
}
