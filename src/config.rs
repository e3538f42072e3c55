use std::time::Duration;

/// Connection settings for the remote authorization service.
///
/// Constructed once at process start and injected into the validator;
/// the library never reads configuration from the environment.
#[derive(Debug, Clone)]
pub struct TokenValidationConfig {
    /// Base URL of the authorization service.
    pub base_url: String,
    /// Per-request timeout. Authentication must not dominate request latency.
    pub timeout: Duration,
}

impl Default for TokenValidationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3301".to_string(),
            timeout: Duration::from_millis(100),
        }
    }
}

impl TokenValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the validator at a different authorization service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
