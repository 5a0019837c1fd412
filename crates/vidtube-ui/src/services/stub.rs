//! Scripted transport for container tests.

use crate::core::error::{ApiError, ApiResult};
use crate::core::http::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Replays queued responses and records every request it receives.
#[derive(Clone, Debug, Default)]
pub(crate) struct StubTransport {
    responses: Rc<RefCell<VecDeque<ApiResult<HttpResponse>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl StubTransport {
    /// Queue a JSON response.
    pub(crate) fn push_json(&self, status: u16, body: &impl Serialize) {
        let body = serde_json::to_string(body).unwrap_or_default();
        self.push_raw(status, &body);
    }

    /// Queue a raw response body.
    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a transport failure.
    pub(crate) fn push_failure(&self, detail: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport {
                operation: "send",
                detail: detail.to_string(),
            }));
    }

    /// Every request received so far.
    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Most recent request.
    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Transport {
                    operation: "send",
                    detail: "no scripted response".to_string(),
                })
            })
    }
}
