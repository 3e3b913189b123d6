//! Conversation orchestrator: the bounded completion/parse/act loop.
//!
//! One call handles one user turn: grow the transcript, ask the model,
//! classify the reply, act on it, and either loop (search) or return a
//! terminal resolution. The original design recursed without a bound; here
//! the loop enforces a configured maximum number of search cycles.

use std::sync::Arc;

use nf_catalog::CatalogRepo;
use nf_domain::chat::{has_system_entry, ChatMessage};
use nf_domain::error::{Error, Result};
use nf_domain::feed::Feed;
use nf_providers::{CompletionProvider, CompletionRequest, SamplingParams};

use crate::matcher::FeedMatcher;
use crate::prompt::SYSTEM_PROMPT;
use crate::protocol::{self, Intent};
use crate::provisioner::FeedProvisioner;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Resolution: the caller-facing result
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of one conversation turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The assistant's user-visible reply.
    pub reply: String,
    /// The resolved feed identity, when the turn selected or created one.
    pub feed_id: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ConversationEngine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Owns the turn transcript and drives the protocol loop.
///
/// Dependencies are injected so tests can substitute doubles for both the
/// completion provider and the catalog.
pub struct ConversationEngine {
    provider: Arc<dyn CompletionProvider>,
    matcher: FeedMatcher,
    provisioner: FeedProvisioner,
    sampling: SamplingParams,
    max_search_cycles: usize,
}

impl ConversationEngine {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        catalog: Arc<dyn CatalogRepo>,
        sampling: SamplingParams,
        max_search_cycles: usize,
    ) -> Self {
        Self {
            provider,
            matcher: FeedMatcher::new(catalog.clone()),
            provisioner: FeedProvisioner::new(catalog),
            sampling,
            max_search_cycles,
        }
    }

    /// Run one conversation turn.
    ///
    /// The transcript is request-scoped: built from the caller's history,
    /// grown as the protocol advances, discarded afterwards. A leading
    /// system entry is inserted when the history carries none.
    ///
    /// Failure semantics:
    /// - provider errors abort the turn wrapped in [`Error::ChatProcessing`]
    /// - malformed payloads abort as [`Error::ProtocolParse`]
    /// - provisioning failure does NOT abort; the reply survives with
    ///   `feed_id: None`
    pub async fn handle(&self, message: &str, history: &[ChatMessage]) -> Result<Resolution> {
        let mut transcript: Vec<ChatMessage> = Vec::with_capacity(history.len() + 2);
        if !has_system_entry(history) {
            transcript.push(ChatMessage::system(SYSTEM_PROMPT));
        }
        transcript.extend_from_slice(history);
        transcript.push(ChatMessage::user(message));

        let mut search_cycles = 0usize;

        loop {
            let raw = self
                .provider
                .complete(CompletionRequest {
                    messages: transcript.clone(),
                    params: self.sampling.clone(),
                })
                .await
                .map_err(Error::chat_processing)?;

            match protocol::parse(&raw)? {
                // The only non-terminal branch: run the search, feed the
                // results back, and ask the model again.
                Intent::Search { term } => {
                    if search_cycles >= self.max_search_cycles {
                        tracing::warn!(
                            term,
                            limit = self.max_search_cycles,
                            "model exceeded the search cycle budget"
                        );
                        return Err(Error::SearchLimit(self.max_search_cycles));
                    }
                    search_cycles += 1;

                    let matches = self.matcher.search(&term).await;
                    tracing::debug!(
                        term,
                        matches = matches.len(),
                        cycle = search_cycles,
                        "search cycle"
                    );

                    transcript.push(ChatMessage::assistant(raw));
                    transcript.push(ChatMessage::system(format_search_results(&term, &matches)));
                }

                Intent::Selection { reply, feed_id } => {
                    tracing::info!(feed_id = %feed_id, "resolved to existing feed");
                    return Ok(Resolution {
                        reply,
                        feed_id: Some(feed_id),
                    });
                }

                Intent::Creation { reply, proposal } => {
                    // Persistence failure must not fail the conversation:
                    // keep the reply, drop the feed id.
                    let feed_id = match self.provisioner.provision(&proposal).await {
                        Ok(feed) => Some(feed.id),
                        Err(e) => {
                            tracing::warn!(
                                feed_name = %proposal.name,
                                error = %e,
                                "feed provisioning failed, returning reply without a feed id"
                            );
                            None
                        }
                    };
                    return Ok(Resolution { reply, feed_id });
                }

                Intent::Conversation { reply } => {
                    return Ok(Resolution {
                        reply,
                        feed_id: None,
                    });
                }
            }
        }
    }
}

/// Serialize matcher results into the system entry fed back to the model.
///
/// The shape mirrors the worked examples in the system prompt.
fn format_search_results(term: &str, matches: &[Feed]) -> String {
    if matches.is_empty() {
        return format!("Search results for \"{term}\": none found.");
    }

    let entries: Vec<serde_json::Value> = matches
        .iter()
        .map(|f| {
            serde_json::json!({
                "id": f.id,
                "name": f.name,
                "description": f.description,
                "tags": f.tags,
                "searchTerms": f.search_terms,
            })
        })
        .collect();

    // Serializing json! values cannot fail.
    format!(
        "Search results for \"{term}\": {}",
        serde_json::Value::Array(entries)
    )
}
