use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use crate::{
    wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
    ClientOptions, Generation, Generator, UpstreamError,
};

/// Public Gemini REST endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Formats a model id into its `generateContent` URL.
///
/// Example: `"gemini-3-flash-preview"` →
/// `"https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"`
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model.trim()
    )
}

#[derive(Clone)]
/// HTTP client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    options: ClientOptions,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client authenticating with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use resume_folio::GeminiClient;
    ///
    /// let gemini = GeminiClient::from_env().expect("missing GEMINI_API_KEY");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| "missing GEMINI_API_KEY environment variable".to_owned())?;
        if api_key.trim().is_empty() {
            return Err("GEMINI_API_KEY is set but empty".to_owned());
        }
        Ok(Self::new(api_key.trim()))
    }

    /// Applies client options such as timeout and base URL.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    async fn send(&self, model: &str, content: &str) -> Result<Generation, UpstreamError> {
        let url = generate_content_url(&self.options.base_url, model);
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .json(&GenerateContentRequest::user_text(content))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(UpstreamError::with_status(
                status.as_u16(),
                error_message(&body),
            ));
        }

        let decoded = serde_json::from_str::<GenerateContentResponse>(&body).map_err(|err| {
            UpstreamError::new(
                None,
                format!("invalid generateContent response JSON: {err}; body: {body}"),
            )
        })?;
        let text = decoded
            .text()
            .ok_or_else(|| UpstreamError::new(None, format!("response contained no text: {body}")))?;
        Ok(Generation { text })
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, model: &str, content: &str) -> Result<Generation, UpstreamError> {
        self.send(model, content).await
    }
}

fn transport_error(err: reqwest::Error) -> UpstreamError {
    UpstreamError::new(err.status().map(|s| s.as_u16()), err.to_string())
}

/// Pulls `error.message` out of a Google error envelope, or keeps the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{error_message, generate_content_url, GeminiClient};

    #[test]
    fn url_joins_base_and_model() {
        assert_eq!(
            generate_content_url("http://127.0.0.1:8080/", "gemini-3-flash-preview"),
            "http://127.0.0.1:8080/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn error_message_prefers_envelope_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded. Please retry in 5.5s.","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            error_message(body),
            "Quota exceeded. Please retry in 5.5s."
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = GeminiClient::new("secret-key");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-key"));
    }
}
