//! Answers in, blueprint HTML out.

use crate::models::blueprint::EMPTY_BLUEPRINT_HTML;
use crate::models::AnswerRecord;
use crate::services::markup::strip_code_fences;
use crate::services::prompt::build_prompt;
use crate::services::providers::{ProviderError, TextProvider};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Failed to read request body: {0}")]
    UnreadableBody(axum::Error),

    #[error("Invalid answers payload: {0}")]
    InvalidAnswers(#[from] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// How a successful generation ended, for metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Empty,
}

#[derive(Clone)]
pub struct BlueprintGenerator {
    provider: Arc<dyn TextProvider>,
}

impl BlueprintGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn TextProvider {
        self.provider.as_ref()
    }

    /// Parse the body, prompt the model once and clean up what comes back.
    ///
    /// A reply without text is not an error: it yields the fixed
    /// "could not generate" fragment.
    pub async fn generate(&self, body: &[u8]) -> Result<(String, Outcome), BlueprintError> {
        let answers = AnswerRecord::from_body(body)?;
        let prompt = build_prompt(&answers);

        let (text, outcome) = match self.provider.generate(&prompt).await? {
            Some(text) => (text, Outcome::Generated),
            None => (EMPTY_BLUEPRINT_HTML.to_string(), Outcome::Empty),
        };

        Ok((strip_code_fences(&text).into_owned(), outcome))
    }
}
