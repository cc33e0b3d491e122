use crate::error::ApiError;
use crate::transport::Transport;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Request, Response};
use std::time::Duration;
use tracing::instrument;

/// Default timeout for HTTP requests against the Real-Debrid API.
/// Can be overwritten using [`ReqwestTransport::with_timeout`].
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// Responses are returned as received: no retries and no status-code
/// interpretation, only transport-level failures surface as errors.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new [`ReqwestTransport`] with the crate user agent and the
    /// default request timeout ([`DEFAULT_HTTP_TIMEOUT`]).
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Creates a version of the [`ReqwestTransport`] with a user-defined
    /// request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> anyhow::Result<Self> {
        self.client = ClientBuilder::new()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(self)
    }
}

impl From<Client> for ReqwestTransport {
    /// Wraps a caller-configured [`Client`], leaving its pool and timeout
    /// settings untouched.
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip_all, err)]
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        tracing::trace!(method = %request.method(), url = %request.url(), "Performing HTTP request");
        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to perform HTTP request")?;

        tracing::trace!(status = %response.status(), "Received HTTP response");
        Ok(response)
    }
}
