//! Text generation backends.
//!
//! The handler only needs "prompt in, optional text out"; the trait keeps the
//! Gemini client swappable in tests.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is not defined in environment variables.")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one generation.
    ///
    /// `Ok(None)` means the call succeeded but carried no usable text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;

    /// Whether the provider can serve requests at all, without calling out.
    fn health_check(&self) -> Result<(), ProviderError>;
}
