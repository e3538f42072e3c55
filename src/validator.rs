use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue};
use http::request::Parts;
use reqwest::Client;

use crate::config::TokenValidationConfig;
use crate::error::{AuthError, Result};
use crate::extract_access_token;
use crate::models::{AccessToken, ApiError};

/// Marker header; the literal value `"true"` bypasses authentication.
pub const HEADER_X_PUBLIC: &str = "x-public";
/// Verified client identifier. Untrusted on input, trusted on output.
pub const HEADER_X_CLIENT_ID: &str = "x-client-id";
/// Verified caller identifier. Untrusted on input, trusted on output.
pub const HEADER_X_CALLER_ID: &str = "x-caller-id";
/// Query parameter carrying the access token on incoming requests.
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// Capability surface of the SDK. Handlers depend on this trait so a test
/// double can stand in for the network-backed validator.
#[async_trait]
pub trait RequestAuthenticator: Send + Sync {
    /// Authenticate the request in place, stamping verified identity
    /// headers on success.
    async fn authenticate(&self, parts: &mut Parts) -> Result<()>;

    /// Read back the client identifier stamped by a prior `authenticate`.
    fn client_id(&self, parts: &Parts) -> Result<i64>;

    /// Read back the caller identifier stamped by a prior `authenticate`.
    fn caller_id(&self, parts: &Parts) -> Result<i64>;

    /// Whether the request opted out of authentication via `x-public`.
    fn is_public(&self, parts: &Parts) -> bool;
}

/// Removes identity headers from the request, regardless of their value.
///
/// Must run before anything trusts those headers; a request that fails
/// validation downstream ends up with no identity headers at all.
pub fn strip_identity_headers(headers: &mut HeaderMap) {
    headers.remove(HEADER_X_CLIENT_ID);
    headers.remove(HEADER_X_CALLER_ID);
}

fn identity_header(headers: &HeaderMap, header: &'static str) -> Result<i64> {
    // An absent or non-UTF-8 value parses like the empty string, so every
    // failure surfaces as the integer-parse error.
    let raw = headers
        .get(header)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    raw.parse()
        .map_err(|source| AuthError::InvalidIdentityHeader { header, source })
}

/// Token validator backed by the remote authorization service.
pub struct TokenValidator {
    config: TokenValidationConfig,
    http_client: Client,
}

impl TokenValidator {
    /// Create a new token validator.
    pub fn new(config: TokenValidationConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl RequestAuthenticator for TokenValidator {
    async fn authenticate(&self, parts: &mut Parts) -> Result<()> {
        strip_identity_headers(&mut parts.headers);

        // An absent token is forwarded as-is; rejecting it is the
        // authorization service's call.
        let token = extract_access_token(&parts.uri);
        let url = format!(
            "{}/oauth/access_token/{}",
            self.config.base_url.trim_end_matches('/'),
            token
        );

        tracing::debug!(base_url = %self.config.base_url, "validating access token");

        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(AuthError::Unavailable)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AuthError::Unavailable)?;

        if status.as_u16() > 299 {
            let payload: ApiError =
                serde_json::from_slice(&body).map_err(AuthError::InvalidResponse)?;
            tracing::warn!(status = status.as_u16(), code = %payload.error, "access token rejected");
            return Err(AuthError::Rejected(payload));
        }

        let access_token: AccessToken =
            serde_json::from_slice(&body).map_err(AuthError::InvalidResponse)?;

        parts
            .headers
            .insert(HEADER_X_CLIENT_ID, HeaderValue::from(access_token.client_id));
        parts
            .headers
            .insert(HEADER_X_CALLER_ID, HeaderValue::from(access_token.user_id));

        Ok(())
    }

    fn client_id(&self, parts: &Parts) -> Result<i64> {
        identity_header(&parts.headers, HEADER_X_CLIENT_ID)
    }

    fn caller_id(&self, parts: &Parts) -> Result<i64> {
        identity_header(&parts.headers, HEADER_X_CALLER_ID)
    }

    fn is_public(&self, parts: &Parts) -> bool {
        matches!(parts.headers.get(HEADER_X_PUBLIC), Some(value) if value == "true")
    }
}
