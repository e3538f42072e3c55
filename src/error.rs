use thiserror::Error;

use crate::models::ApiError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// An identity header was read back without a prior successful
    /// authentication on the request.
    #[error("Invalid {header} header: {source}")]
    InvalidIdentityHeader {
        header: &'static str,
        source: std::num::ParseIntError,
    },

    #[error("Error connecting to authorization service: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The authorization service rejected the token; the payload is its
    /// structured error, propagated verbatim.
    #[error("Token rejected by authorization service: {}", .0.message)]
    Rejected(ApiError),

    #[error("Error processing authorization response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

impl AuthError {
    /// HTTP status class of the failure, for consumers building responses.
    ///
    /// A rejection payload carrying status 0 (partial body) maps to 401 so
    /// callers never emit an invalid status line.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidIdentityHeader { .. } => 400,
            AuthError::Unavailable(_) => 503,
            AuthError::Rejected(payload) if payload.status == 0 => 401,
            AuthError::Rejected(payload) => payload.status,
            AuthError::InvalidResponse(_) => 502,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_failure_class() {
        let parse_err = "x".parse::<i64>().unwrap_err();
        let bad_header = AuthError::InvalidIdentityHeader {
            header: "x-client-id",
            source: parse_err,
        };
        assert_eq!(bad_header.status_code(), 400);

        let rejected = AuthError::Rejected(ApiError {
            message: "invalid access token".to_string(),
            status: 401,
            error: "unauthorized".to_string(),
        });
        assert_eq!(rejected.status_code(), 401);

        let json_err = serde_json::from_str::<ApiError>("not json").unwrap_err();
        assert_eq!(AuthError::InvalidResponse(json_err).status_code(), 502);
    }

    #[test]
    fn zero_status_rejection_maps_to_unauthorized() {
        let rejected = AuthError::Rejected(ApiError {
            message: String::new(),
            status: 0,
            error: String::new(),
        });
        assert_eq!(rejected.status_code(), 401);
    }
}
