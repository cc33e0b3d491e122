//! Client for the Real-Debrid REST API.
//!
//! [`ApiClient`] attaches the account's bearer token to every outgoing request
//! and hands it to a [`Transport`]. Form submissions are encoded as
//! multipart/form-data with the API's fixed boundary token.
//!
//! # Examples
//!
//! ```rust
//! use realdebrid_api::{API_BASE_URL, ApiClient};
//!
//! async fn unrestrict(client: &ApiClient) -> anyhow::Result<()> {
//!     let response = client
//!         .post_form(
//!             &format!("{API_BASE_URL}/unrestrict/link"),
//!             &[("link", "https://example.com/file")],
//!         )
//!         .await?;
//!
//!     println!("{}", response.status());
//!     Ok(())
//! }
//! ```

use crate::error::ApiError;
use crate::transport::Transport;
use crate::transport::reqwest::ReqwestTransport;
use crate::{Credentials, multipart};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Response};
use std::sync::Arc;
use tracing::instrument;
use url::Url;

/// Client for the Real-Debrid REST API.
///
/// Holds the account's [`Credentials`] and a shared [`Transport`]; every
/// request goes out with the access token attached, and whatever the transport
/// returns comes back unchanged.
pub struct ApiClient {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a new [`ApiClient`] backed by the default [`ReqwestTransport`].
    pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
        Ok(Self::with_transport(
            credentials,
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    /// Creates a new [`ApiClient`] on top of a caller-supplied [`Transport`].
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Executes the request with the account's bearer token attached.
    ///
    /// The `Authorization` header is set to `Bearer <access token>`, replacing
    /// any previously set value. The request is otherwise delegated to the
    /// transport unmodified, and the transport's response or error is returned
    /// as-is: no retries and no status-code interpretation.
    #[instrument(level = "debug", skip_all, err)]
    pub async fn execute(&self, mut request: Request) -> Result<Response, ApiError> {
        let authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.credentials.access_token))?;
        request.headers_mut().insert(AUTHORIZATION, authorization);

        tracing::trace!(method = %request.method(), url = %request.url(), "Dispatching authenticated request");
        self.transport.execute(request).await
    }

    /// POSTs the form fields to the given URL as multipart/form-data.
    ///
    /// Fields are encoded in input order with the fixed boundary announced in
    /// the `Content-Type` header, and the request is run through
    /// [`ApiClient::execute`].
    #[instrument(level = "debug", skip_all, err)]
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        let url = Url::parse(url)?;
        tracing::trace!(%url, fields = fields.len(), "Building form POST request");

        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_str(&multipart::content_type())?);
        *request.body_mut() = Some(multipart::encode(fields).into());

        self.execute(request).await
    }
}
