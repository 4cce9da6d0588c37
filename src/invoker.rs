use std::time::Duration;

use tokio::time::sleep;

use crate::{
    backoff::compute_delay, prompt::portfolio_prompt, GenerateError, Generator, Result,
    RetryOptions,
};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Calls a [`Generator`] and retries rate-limited attempts with backoff.
///
/// The invoker holds no mutable state, so one instance can serve any number
/// of concurrent callers.
#[derive(Clone, Debug)]
pub struct RetryingInvoker<G> {
    generator: G,
    model: String,
    options: RetryOptions,
}

impl<G: Generator> RetryingInvoker<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            model: DEFAULT_MODEL.to_owned(),
            options: RetryOptions::default(),
        }
    }

    /// Sets the model id passed to the generator.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Takes the model id from `GEMINI_MODEL`, keeping the current one when unset or empty.
    pub fn model_from_env(self) -> Self {
        match std::env::var("GEMINI_MODEL") {
            Ok(model) if !model.trim().is_empty() => self.with_model(model.trim()),
            _ => self,
        }
    }

    /// Applies default retry options for [`RetryingInvoker::invoke`].
    pub fn with_retry_options(mut self, opts: RetryOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates a portfolio page for `resume`.
    pub async fn generate_portfolio(&self, resume: &str) -> Result<String> {
        self.invoke(&portfolio_prompt(resume)).await
    }

    /// Sends `input` unchanged and returns the generated text.
    pub async fn invoke(&self, input: &str) -> Result<String> {
        self.invoke_with(input, &self.options).await
    }

    /// Like [`RetryingInvoker::invoke`] with per-call retry options.
    ///
    /// Only rate-limit failures (status 429) are retried. Any other failure is
    /// returned as [`GenerateError::Upstream`] without using the remaining
    /// attempts.
    pub async fn invoke_with(&self, input: &str, opts: &RetryOptions) -> Result<String> {
        if opts.retries == 0 {
            return Err(GenerateError::InvalidOptions(
                "retries must be at least 1".to_owned(),
            ));
        }

        let mut attempt = 0usize;
        loop {
            let err = match self.generator.generate(&self.model, input).await {
                Ok(generation) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt = attempt + 1, "generation succeeded");
                    return Ok(generation.text);
                }
                Err(err) => err,
            };

            if !err.is_rate_limited() {
                return Err(GenerateError::Upstream(err));
            }

            if attempt + 1 >= opts.retries {
                #[cfg(feature = "tracing")]
                tracing::warn!(retries = opts.retries, "quota exceeded on every attempt, giving up");
                return Err(GenerateError::ExhaustedRetries {
                    attempts: opts.retries,
                    source: err,
                });
            }

            let delay_ms = compute_delay(attempt, opts.initial_delay_ms, Some(&err.message));

            #[cfg(feature = "tracing")]
            tracing::warn!(
                attempt = attempt + 1,
                retries = opts.retries,
                delay_ms,
                "quota exceeded, retrying"
            );

            sleep(Duration::from_millis(delay_ms)).await;
            attempt += 1;
        }
    }
}
