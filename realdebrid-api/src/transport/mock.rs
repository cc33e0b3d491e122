use crate::error::ApiError;
use crate::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response};
use std::collections::VecDeque;
use url::Url;

/// Request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// In-memory [`Transport`] for tests.
///
/// Records every executed request and replays queued responses or errors in
/// order. With an empty queue, an empty `200 OK` response is returned.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<http::Response<Vec<u8>>, ApiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a canned response.
    pub fn push_response(&self, response: http::Response<Vec<u8>>) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, err: anyhow::Error) {
        self.responses.lock().push_back(Err(ApiError::Transport(err)));
    }

    /// Returns all requests executed so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let body = request
            .body()
            .and_then(|body| body.as_bytes())
            .map(Bytes::copy_from_slice);
        self.requests.lock().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body,
        });

        match self.responses.lock().pop_front() {
            Some(Ok(response)) => Ok(response.into()),
            Some(Err(err)) => Err(err),
            None => Ok(http::Response::new(Vec::<u8>::new()).into()),
        }
    }
}
