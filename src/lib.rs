pub mod config;
pub mod error;
pub mod models;
pub mod validator;

pub use config::TokenValidationConfig;
pub use error::{AuthError, Result};
pub use models::{AccessToken, ApiError};
pub use validator::{
    strip_identity_headers, RequestAuthenticator, TokenValidator, HEADER_X_CALLER_ID,
    HEADER_X_CLIENT_ID, HEADER_X_PUBLIC, PARAM_ACCESS_TOKEN,
};

use http::Uri;
use url::form_urlencoded;

/// Convenience function to pull the access token off a request URI.
///
/// Returns the trimmed `access_token` query value, or the empty string when
/// the parameter is absent.
pub fn extract_access_token(uri: &Uri) -> String {
    let query = uri.query().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == PARAM_ACCESS_TOKEN)
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn extracts_the_access_token_parameter() {
        assert_eq!(
            extract_access_token(&uri("/items?access_token=abc123")),
            "abc123"
        );
        assert_eq!(
            extract_access_token(&uri("/items?page=2&access_token=abc&sort=asc")),
            "abc"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            extract_access_token(&uri("/items?access_token=%20abc%20")),
            "abc"
        );
    }

    #[test]
    fn absent_token_yields_the_empty_string() {
        assert_eq!(extract_access_token(&uri("/items")), "");
        assert_eq!(extract_access_token(&uri("/items?access_token=")), "");
        assert_eq!(extract_access_token(&uri("/items?other=x")), "");
    }
}
