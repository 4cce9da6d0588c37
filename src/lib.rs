//! `resume-folio` turns resume text into a single-file portfolio web page
//! using the Gemini `generateContent` API.
//!
//! - [`RetryingInvoker`] calls any [`Generator`] and retries rate-limited
//!   attempts with exponential backoff, honoring `retry in <n>s` hints.
//! - [`GeminiClient`] is the HTTP [`Generator`] for the hosted API.
//!
//! ```no_run
//! use resume_folio::{GeminiClient, RetryingInvoker};
//!
//! # async fn run() -> resume_folio::Result<()> {
//! let gemini = GeminiClient::from_env().expect("missing GEMINI_API_KEY");
//! let html = RetryingInvoker::new(gemini)
//!     .generate_portfolio("Jane Doe, Rust engineer")
//!     .await?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

pub mod backoff;
mod client;
mod error;
mod generator;
mod invoker;
mod options;
pub mod prompt;
mod wire;

pub use client::{generate_content_url, GeminiClient, DEFAULT_BASE_URL};
pub use error::{GenerateError, UpstreamError};
pub use generator::{Generation, Generator};
pub use invoker::{RetryingInvoker, DEFAULT_MODEL};
pub use options::{ClientOptions, RetryOptions};

pub type Result<T> = std::result::Result<T, GenerateError>;
