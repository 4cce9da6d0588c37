use std::sync::Arc;

use async_trait::async_trait;

use crate::UpstreamError;

/// Text produced by one successful generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A text-generation backend the [`RetryingInvoker`](crate::RetryingInvoker) calls.
///
/// Implementations make exactly one upstream request per call and report
/// rate limiting through [`UpstreamError::status`] (`429`).
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, model: &str, content: &str) -> Result<Generation, UpstreamError>;
}

#[async_trait]
impl<'a, G: Generator + ?Sized> Generator for &'a G {
    async fn generate(&self, model: &str, content: &str) -> Result<Generation, UpstreamError> {
        (**self).generate(model, content).await
    }
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn generate(&self, model: &str, content: &str) -> Result<Generation, UpstreamError> {
        (**self).generate(model, content).await
    }
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Box<G> {
    async fn generate(&self, model: &str, content: &str) -> Result<Generation, UpstreamError> {
        (**self).generate(model, content).await
    }
}
