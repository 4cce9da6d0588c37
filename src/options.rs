/// Configures the rate-limit retry loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryOptions {
    /// Maximum number of attempts, including the first one. Must be at least 1.
    pub retries: usize,
    /// Base retry backoff in milliseconds (exponential strategy).
    pub initial_delay_ms: u64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            retries: 3,
            initial_delay_ms: 1_000,
        }
    }
}

/// Configures the HTTP side of [`GeminiClient`](crate::GeminiClient).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Scheme and host of the API, without a trailing path.
    pub base_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 120_000,
            base_url: crate::client::DEFAULT_BASE_URL.to_owned(),
        }
    }
}
