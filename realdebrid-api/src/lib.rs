pub mod client;
pub mod error;
pub mod multipart;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;

use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// User-Agent string used for all HTTP requests.
static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Base URL of the Real-Debrid REST API.
pub const API_BASE_URL: &str = "https://api.real-debrid.com/rest/1.0";

/// OAuth credential bundle issued by the Real-Debrid token endpoint.
///
/// Field names mirror the token endpoint's JSON response, so the bundle can be
/// deserialized from it directly. The bundle is static for the lifetime of a
/// client: the refresh token and expiry are carried as issued, but no refresh
/// is performed.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
