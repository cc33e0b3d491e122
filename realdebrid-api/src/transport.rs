#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod reqwest;

use crate::error::ApiError;
use ::reqwest::{Request, Response};
use async_trait::async_trait;

/// A collaborator capable of executing an HTTP request.
///
/// The transport is injected into [`crate::ApiClient`] and shared with the
/// caller, so tests can substitute a fake. Whatever the transport returns is
/// handed back to the caller unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, ApiError>;
}
