//! OpenAI-compatible adapter.
//!
//! Works with OpenAI, Azure-style proxies, Ollama, vLLM, and any other
//! endpoint that follows the OpenAI chat completions contract. Single-shot
//! only: the feed-resolution engine consumes full completions, never a
//! token stream.

use serde::Deserialize;

use nf_domain::config::LlmConfig;
use nf_domain::error::{Error, Result};

use crate::traits::{CompletionProvider, CompletionRequest};
use crate::util::{from_reqwest, resolve_api_key};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A completion adapter for any OpenAI-compatible API endpoint.
pub struct OpenAiCompatProvider {
    id: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new provider from the deserialized LLM config.
    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        let api_key = resolve_api_key(cfg)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            id: "openai-compat".into(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    fn build_body(&self, req: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "model": req.params.model,
            "messages": req.messages,
            "temperature": req.params.temperature,
            "max_tokens": req.params.max_tokens,
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response wire types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    async fn complete(&self, req: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_body(&req);

        tracing::debug!(
            provider = %self.id,
            model = %req.params.model,
            messages = req.messages.len(),
            "requesting completion"
        );

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(Error::Provider {
                provider: self.id.clone(),
                message: format!("HTTP {status}: {detail}"),
            });
        }

        let parsed: CompletionResponse = resp.json().await.map_err(from_reqwest)?;
        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| Error::Provider {
                provider: self.id.clone(),
                message: "response carried no message content".into(),
            })?;

        Ok(content)
    }

    fn provider_id(&self) -> &str {
        &self.id
    }
}
