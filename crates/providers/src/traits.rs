use nf_domain::chat::ChatMessage;
use nf_domain::config::LlmConfig;
use nf_domain::error::Result;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Fixed sampling parameters for a completion request.
///
/// These come from configuration, never from the caller: a conversation turn
/// uses the same model, temperature, and token ceiling for every completion
/// it issues.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&LlmConfig> for SamplingParams {
    fn from(cfg: &LlmConfig) -> Self {
        Self {
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

/// A provider-agnostic completion request: the full transcript so far plus
/// the sampling configuration.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub params: SamplingParams,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Core provider trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Trait that every completion adapter must implement.
///
/// Implementations translate between our transcript types and the wire
/// format of a provider's HTTP API. The engine only ever sees this trait, so
/// tests substitute scripted doubles.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the transcript and wait for the model's full text reply.
    async fn complete(&self, req: CompletionRequest) -> Result<String>;

    /// A unique identifier for this provider instance.
    fn provider_id(&self) -> &str;
}
