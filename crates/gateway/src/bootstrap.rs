//! Server state construction.
//!
//! All dependencies are built here and injected explicitly, no ambient
//! globals, so tests and alternative wiring substitute their own providers
//! and repositories.

use std::sync::Arc;

use nf_catalog::MemoryCatalog;
use nf_domain::config::Config;
use nf_domain::error::Result;
use nf_engine::{ConversationEngine, FeedMatcher};
use nf_providers::{CompletionProvider, OpenAiCompatProvider, SamplingParams};

use crate::state::AppState;

/// Build the full application state from config.
pub fn build_state(config: Arc<Config>) -> Result<AppState> {
    let catalog = Arc::new(MemoryCatalog::new());

    let provider: Arc<dyn CompletionProvider> =
        Arc::new(OpenAiCompatProvider::from_config(&config.llm)?);

    let sampling = SamplingParams::from(&config.llm);
    let engine = Arc::new(ConversationEngine::new(
        provider.clone(),
        catalog.clone() as Arc<dyn nf_catalog::CatalogRepo>,
        sampling,
        config.resolver.max_search_cycles,
    ));
    let matcher = Arc::new(FeedMatcher::new(
        catalog.clone() as Arc<dyn nf_catalog::CatalogRepo>,
    ));

    tracing::info!(
        provider = provider.provider_id(),
        model = %config.llm.model,
        max_search_cycles = config.resolver.max_search_cycles,
        "feed-resolution engine ready"
    );

    Ok(AppState {
        config,
        catalog,
        engine,
        matcher,
    })
}
