use std::sync::Arc;

use nf_catalog::MemoryCatalog;
use nf_domain::config::Config;
use nf_engine::{ConversationEngine, FeedMatcher};

/// Shared application state passed to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The feed catalog. Concrete type so the health endpoint can report
    /// record counts; handlers otherwise go through the engine/matcher.
    pub catalog: Arc<MemoryCatalog>,
    /// The conversational feed-resolution engine.
    pub engine: Arc<ConversationEngine>,
    /// Direct catalog search, exposed for introspection endpoints.
    pub matcher: Arc<FeedMatcher>,
}
