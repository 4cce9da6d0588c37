/// Failure reported by a [`Generator`](crate::Generator) for a single attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("upstream error{}: {message}", status_suffix(.status))]
pub struct UpstreamError {
    /// HTTP status code, when the failure came with one.
    pub status: Option<u16>,
    /// Error message text from the upstream API or transport.
    pub message: String,
}

impl UpstreamError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(Some(status), message)
    }

    /// Returns `true` when the upstream rejected the call for exceeding its quota.
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" {code}")).unwrap_or_default()
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Caller-supplied retry options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// Every allowed attempt was rate limited.
    #[error(
        "quota exceeded after {attempts} attempts; please wait and try again later, \
         or upgrade your plan at https://ai.google.dev/pricing. Original error: {}",
        .source.message
    )]
    ExhaustedRetries {
        attempts: usize,
        /// The rate-limit error from the final attempt.
        source: UpstreamError,
    },
    /// Non-rate-limit failure, surfaced on first occurrence.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl GenerateError {
    /// The upstream failure behind this error, if there was one.
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self {
            Self::InvalidOptions(_) => None,
            Self::ExhaustedRetries { source, .. } | Self::Upstream(source) => Some(source),
        }
    }
}
