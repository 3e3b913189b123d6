//! In-memory catalog backend.
//!
//! Records live in insertion-ordered vectors behind `parking_lot` locks, so
//! listings are deterministic: the same filter against an unchanged catalog
//! always yields the same records in the same order.

use chrono::Utc;
use parking_lot::RwLock;

use nf_domain::error::Result;
use nf_domain::feed::{Feed, Website};

use crate::filter::Filter;
use crate::{CatalogRepo, NewFeed, NewWebsite};

/// In-memory [`CatalogRepo`] implementation.
#[derive(Default)]
pub struct MemoryCatalog {
    feeds: RwLock<Vec<Feed>>,
    websites: RwLock<Vec<Website>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record counts, for startup logging and the health endpoint.
    pub fn counts(&self) -> (usize, usize) {
        (self.feeds.read().len(), self.websites.read().len())
    }
}

#[async_trait::async_trait]
impl CatalogRepo for MemoryCatalog {
    async fn list_feeds(&self, filter: &Filter) -> Result<Vec<Feed>> {
        let feeds = self.feeds.read();
        Ok(feeds.iter().filter(|f| filter.matches(*f)).cloned().collect())
    }

    async fn get_feed(&self, id: &str) -> Result<Option<Feed>> {
        let feeds = self.feeds.read();
        Ok(feeds.iter().find(|f| f.id == id).cloned())
    }

    async fn create_feed(&self, draft: NewFeed) -> Result<Feed> {
        let feed = Feed {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            url: draft.url,
            description: draft.description,
            kind: draft.kind,
            tags: draft.tags,
            search_terms: draft.search_terms,
            category: draft.category,
            country: draft.country,
            website_id: draft.website_id,
            created_at: Utc::now(),
        };
        tracing::debug!(feed_id = %feed.id, name = %feed.name, "feed created");
        self.feeds.write().push(feed.clone());
        Ok(feed)
    }

    async fn list_websites(&self, filter: &Filter) -> Result<Vec<Website>> {
        let websites = self.websites.read();
        Ok(websites
            .iter()
            .filter(|w| filter.matches(*w))
            .cloned()
            .collect())
    }

    async fn create_website(&self, draft: NewWebsite) -> Result<Website> {
        let website = Website {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            url: draft.url,
            category: draft.category,
            tags: draft.tags,
            created_at: Utc::now(),
        };
        tracing::debug!(website_id = %website.id, name = %website.name, "website created");
        self.websites.write().push(website.clone());
        Ok(website)
    }
}
