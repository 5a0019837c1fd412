//! Browser `fetch` transport built on `gloo-net`.

use crate::core::error::{ApiError, ApiResult};
use crate::core::http::{
    FilePart, FormValue, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody,
    Transport,
};
use async_trait::async_trait;
use gloo_net::http::{Method, Request};
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Transport that issues requests through the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut req = Request::new(&request.url).method(method);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.body(body),
            RequestBody::Multipart(form) => req.body(build_form_data(form)?),
        };
        let response = req.send().await.map_err(|err| ApiError::Transport {
            operation: "send",
            detail: err.to_string(),
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| ApiError::Transport {
            operation: "read_body",
            detail: err.to_string(),
        })?;
        Ok(HttpResponse { status, body })
    }
}

fn build_form_data(form: MultipartForm) -> ApiResult<FormData> {
    let data = FormData::new().map_err(|err| js_failure("form_data", &err))?;
    for (name, value) in form.into_fields() {
        match value {
            FormValue::Text(text) => data
                .append_with_str(&name, &text)
                .map_err(|err| js_failure("append_text", &err))?,
            FormValue::File(file) => {
                let blob = file_blob(&file)?;
                data.append_with_blob_and_filename(&name, &blob, &file.file_name)
                    .map_err(|err| js_failure("append_file", &err))?;
            }
        }
    }
    Ok(data)
}

fn file_blob(file: &FilePart) -> ApiResult<Blob> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(mime) = file.mime_type.as_deref() {
        options.set_type(mime);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|err| js_failure("blob", &err))
}

fn js_failure(operation: &'static str, err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport {
        operation,
        detail: format!("{err:?}"),
    }
}
