use serde::{Deserialize, Serialize};

/// Success payload of the authorization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    pub token: String,
    pub client_id: i64,
    /// 0 for client-only tokens (the service omits the field).
    #[serde(default)]
    pub user_id: i64,
    /// Epoch seconds. Expiry is enforced by the authorization service,
    /// never compared against the local clock.
    pub expires: i64,
}

/// Structured error payload of the authorization service. The shape is
/// owned by that service's contract and propagated as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_defaults_user_id_for_client_only_tokens() {
        let token: AccessToken = serde_json::from_str(
            r#"{"access_token":"abc","client_id":42,"expires":9999999999}"#,
        )
        .unwrap();

        assert_eq!(token.token, "abc");
        assert_eq!(token.client_id, 42);
        assert_eq!(token.user_id, 0);
        assert_eq!(token.expires, 9999999999);
    }

    #[test]
    fn api_error_tolerates_partial_payloads() {
        let err: ApiError = serde_json::from_str(r#"{"message":"expired token"}"#).unwrap();

        assert_eq!(err.message, "expired token");
        assert_eq!(err.status, 0);
        assert_eq!(err.error, "");
    }
}
