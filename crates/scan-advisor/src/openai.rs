//! OpenAI-compatible chat completions client.

use std::time::Duration;

use scan_config::AdvisorConfig;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::http::check_response;
use crate::{Advisor, prompt, table};

/// How many diseases the model is asked to pick.
const RANK_TOP_K: usize = 3;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 1],
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> Result<String, AdvisorError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();
        if content.is_empty() {
            return Err(AdvisorError::Malformed("empty completion".into()));
        }
        Ok(content)
    }
}

/// Advisor backed by a remote chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiAdvisor {
    http: reqwest::Client,
    config: AdvisorConfig,
}

impl OpenAiAdvisor {
    /// Build a client for a configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::NotConfigured`] without an API key, or
    /// [`AdvisorError::Http`] if the HTTP client cannot be built.
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        if !config.is_configured() {
            return Err(AdvisorError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("symptoscan/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one system prompt and return the first choice's text.
    async fn complete(&self, system_prompt: &str) -> Result<String, AdvisorError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [RequestMessage {
                role: "system",
                content: system_prompt,
            }],
        };
        tracing::debug!(model = %self.config.model, "advisor request");

        let resp = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: ChatResponse = resp.json().await?;
        body.into_content()
    }
}

impl Advisor for OpenAiAdvisor {
    fn is_available(&self) -> bool {
        true
    }

    async fn rank_diseases(
        &self,
        diseases_csv: &str,
        query: &str,
    ) -> Result<Vec<usize>, AdvisorError> {
        let reply = self
            .complete(&prompt::rank_diseases(diseases_csv, query, RANK_TOP_K))
            .await?;
        table::parse_row_indices(&reply, RANK_TOP_K)
    }

    async fn recommend(&self, disease_name: &str) -> Result<String, AdvisorError> {
        self.complete(&prompt::recommend(disease_name)).await
    }

    async fn summarize(
        &self,
        user_threads: &[String],
        bot_threads: &[String],
    ) -> Result<String, AdvisorError> {
        self.complete(&prompt::summarize(user_threads, bot_threads))
            .await
    }
}
