use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Server
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "d_port")]
    pub port: u16,
    #[serde(default = "d_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3420,
            host: "0.0.0.0".into(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LLM completion provider
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Connection and sampling configuration for the completion provider.
///
/// Sampling parameters are configuration constants, never user-controlled:
/// every completion in a conversation turn uses the same model, temperature,
/// and token ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible chat completions endpoint.
    #[serde(default = "d_base_url")]
    pub base_url: String,
    #[serde(default = "d_model")]
    pub model: String,
    #[serde(default = "d_temperature")]
    pub temperature: f32,
    #[serde(default = "d_max_tokens")]
    pub max_tokens: u32,
    /// Plaintext API key. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default = "d_api_key_env")]
    pub api_key_env: Option<String>,
    #[serde(default = "d_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: d_base_url(),
            model: d_model(),
            temperature: d_temperature(),
            max_tokens: d_max_tokens(),
            api_key: None,
            api_key_env: d_api_key_env(),
            timeout_ms: d_timeout_ms(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Feed resolution
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of SEARCH_REQUEST cycles per conversation turn.
    /// Bounds cost and latency when the model keeps asking to search.
    #[serde(default = "d_search_cycles")]
    pub max_search_cycles: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_search_cycles: 3,
        }
    }
}

// ── serde default helpers ──────────────────────────────────────────

fn d_port() -> u16 {
    3420
}
fn d_host() -> String {
    "0.0.0.0".into()
}
fn d_base_url() -> String {
    "https://api.openai.com/v1".into()
}
fn d_model() -> String {
    "gpt-4o-mini".into()
}
fn d_temperature() -> f32 {
    0.7
}
fn d_max_tokens() -> u32 {
    1024
}
fn d_api_key_env() -> Option<String> {
    Some("NEWSFLOW_API_KEY".into())
}
fn d_timeout_ms() -> u64 {
    30_000
}
fn d_search_cycles() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.server.port, 3420);
        assert_eq!(cfg.llm.model, "gpt-4o-mini");
        assert_eq!(cfg.resolver.max_search_cycles, 3);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [llm]
            model = "gpt-4o"
            temperature = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.llm.model, "gpt-4o");
        assert_eq!(cfg.llm.temperature, 0.2);
        assert_eq!(cfg.llm.max_tokens, 1024);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }
}
