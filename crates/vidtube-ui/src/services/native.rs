//! `reqwest` transport for native targets.

use crate::core::error::{ApiError, ApiResult};
use crate::core::http::{
    FormValue, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody, Transport,
};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

/// Transport backed by a shared `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Patch => self.client.patch(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.body(body),
            RequestBody::Multipart(form) => builder.multipart(build_form(form)?),
        };
        let response = builder.send().await.map_err(|err| ApiError::Transport {
            operation: "send",
            detail: err.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| ApiError::Transport {
            operation: "read_body",
            detail: err.to_string(),
        })?;
        Ok(HttpResponse { status, body })
    }
}

fn build_form(form: MultipartForm) -> ApiResult<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.into_fields() {
        multipart = match value {
            FormValue::Text(text) => multipart.text(name, text),
            FormValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(mime) = file.mime_type.as_deref() {
                    part = part.mime_str(mime).map_err(|err| ApiError::Transport {
                        operation: "build_multipart",
                        detail: err.to_string(),
                    })?;
                }
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}
