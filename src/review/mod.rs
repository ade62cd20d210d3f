pub mod client;
pub mod orchestrator;
pub mod render;

use std::path::Path;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::document;
use crate::error::ReviewError;
use crate::prompt::{self, WorkedExample};
use crate::tokens::count_tokens;
use crate::types::ReviewResult;
use client::{ChatClient, OpenAiClient};

/// Reviews resolutions by prompting a chat model with the fixed template rules
pub struct Reviewer {
    client: Box<dyn ChatClient>,
    example: WorkedExample,
}

impl Reviewer {
    pub fn new(client: Box<dyn ChatClient>, example: WorkedExample) -> Self {
        Self { client, example }
    }

    /// Build a reviewer backed by the configured OpenAI-compatible endpoint
    pub fn from_config(api_key: &str, config: &Config) -> anyhow::Result<Self> {
        let client = OpenAiClient::new(api_key, &config.llm)?;
        let example = match &config.prompt.example {
            Some(path) => {
                info!("Using worked example from {}", path.display());
                WorkedExample::load(path)?
            }
            None => WorkedExample::default(),
        };
        Ok(Self::new(Box::new(client), example))
    }

    pub fn read_document(&self, path: &Path) -> Result<String, ReviewError> {
        Ok(document::read_document(path)?)
    }

    /// Extract a resolution's text and review it
    pub async fn review_resolution(&self, path: &Path) -> Result<ReviewResult, ReviewError> {
        let text = self.read_document(path)?;
        self.review_text(&text).await
    }

    /// Review already-extracted resolution text
    pub async fn review_text(&self, resolution_text: &str) -> Result<ReviewResult, ReviewError> {
        let prompt = prompt::build(&self.example, resolution_text);

        let system_tokens = count_tokens(prompt.system);
        let user_tokens = count_tokens(&prompt.user);
        info!(
            "Prompt tokens: system={}, user={}, total={}",
            system_tokens,
            user_tokens,
            system_tokens + user_tokens
        );
        trace!("User prompt: {}", prompt.user);

        let content = self.client.complete(prompt.system, &prompt.user).await?;
        let result: ReviewResult = serde_json::from_str(&content)?;
        debug!(
            "Parsed review: {} template violations, {} formatting violations",
            result.template_violations.len(),
            result.formatting_violations.len()
        );
        Ok(result)
    }
}
