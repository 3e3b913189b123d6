//! Feed matcher: catalog search behind the `SEARCH_REQUEST` intent.
//!
//! Two independent predicates run concurrently (name substring, declared
//! search-term membership) and the results are merged with name matches
//! first. A failing query degrades to zero results for that predicate:
//! matching must never abort the conversation.

use std::collections::HashSet;
use std::sync::Arc;

use nf_catalog::{CatalogRepo, Filter};
use nf_domain::error::Result;
use nf_domain::feed::Feed;

pub struct FeedMatcher {
    catalog: Arc<dyn CatalogRepo>,
}

impl FeedMatcher {
    pub fn new(catalog: Arc<dyn CatalogRepo>) -> Self {
        Self { catalog }
    }

    /// Search the catalog for feeds matching `term`.
    ///
    /// Empty result is success, not an error. Deduplicates by feed identity
    /// preserving first-seen order; on collision the name-match copy wins.
    pub async fn search(&self, term: &str) -> Vec<Feed> {
        let name_filter = Filter::contains("name", term);
        let terms_filter = Filter::has("search_terms", term);
        let by_name = self.catalog.list_feeds(&name_filter);
        let by_terms = self.catalog.list_feeds(&terms_filter);

        let (by_name, by_terms) = futures_util::future::join(by_name, by_terms).await;
        let by_name = degrade(by_name, term, "name");
        let by_terms = degrade(by_terms, term, "search_terms");

        let mut seen: HashSet<String> = HashSet::new();
        let mut merged = Vec::with_capacity(by_name.len() + by_terms.len());
        for feed in by_name.into_iter().chain(by_terms) {
            if seen.insert(feed.id.clone()) {
                merged.push(feed);
            }
        }

        tracing::debug!(term, matches = merged.len(), "feed search completed");
        merged
    }
}

/// Collapse a failed catalog query into zero results for that predicate.
fn degrade(result: Result<Vec<Feed>>, term: &str, query: &str) -> Vec<Feed> {
    match result {
        Ok(feeds) => feeds,
        Err(e) => {
            tracing::warn!(
                term,
                query,
                error = %e,
                "feed search query failed, degrading to empty results"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nf_catalog::{MemoryCatalog, NewFeed, NewWebsite};
    use nf_domain::error::Error;
    use nf_domain::feed::{FeedKind, Website};

    fn draft(name: &str, terms: &[&str]) -> NewFeed {
        NewFeed {
            name: name.into(),
            url: "https://example.com/rss".into(),
            description: None,
            kind: FeedKind::Rss,
            tags: vec![],
            search_terms: terms.iter().map(|s| s.to_string()).collect(),
            category: None,
            country: None,
            website_id: "w1".into(),
        }
    }

    #[tokio::test]
    async fn merges_name_and_term_matches_with_name_priority() {
        let catalog = Arc::new(MemoryCatalog::new());
        // Matches on search terms only.
        catalog.create_feed(draft("Daily Wrap", &["technology"])).await.unwrap();
        // Matches on name only.
        catalog.create_feed(draft("Technology Digest", &[])).await.unwrap();

        let matcher = FeedMatcher::new(catalog);
        let hits = matcher.search("technology").await;

        assert_eq!(hits.len(), 2);
        // Name match first despite later insertion.
        assert_eq!(hits[0].name, "Technology Digest");
        assert_eq!(hits[1].name, "Daily Wrap");
    }

    #[tokio::test]
    async fn deduplicates_overlapping_results() {
        let catalog = Arc::new(MemoryCatalog::new());
        // Matches both predicates.
        catalog
            .create_feed(draft("Technology Digest", &["technology"]))
            .await
            .unwrap();

        let matcher = FeedMatcher::new(catalog);
        let hits = matcher.search("technology").await;
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn identical_queries_yield_identical_results() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.create_feed(draft("Tech One", &["tech"])).await.unwrap();
        catalog.create_feed(draft("Tech Two", &["tech"])).await.unwrap();

        let matcher = FeedMatcher::new(catalog);
        let first = matcher.search("tech").await;
        let second = matcher.search("tech").await;

        let ids_a: Vec<_> = first.iter().map(|f| &f.id).collect();
        let ids_b: Vec<_> = second.iter().map(|f| &f.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[tokio::test]
    async fn no_matches_is_empty_success() {
        let matcher = FeedMatcher::new(Arc::new(MemoryCatalog::new()));
        assert!(matcher.search("anything").await.is_empty());
    }

    /// Catalog double whose feed queries always fail.
    struct BrokenCatalog;

    #[async_trait]
    impl CatalogRepo for BrokenCatalog {
        async fn list_feeds(&self, _f: &Filter) -> Result<Vec<Feed>> {
            Err(Error::Catalog("backend unavailable".into()))
        }
        async fn get_feed(&self, _id: &str) -> Result<Option<Feed>> {
            Err(Error::Catalog("backend unavailable".into()))
        }
        async fn create_feed(&self, _d: NewFeed) -> Result<Feed> {
            Err(Error::Catalog("backend unavailable".into()))
        }
        async fn list_websites(&self, _f: &Filter) -> Result<Vec<Website>> {
            Err(Error::Catalog("backend unavailable".into()))
        }
        async fn create_website(&self, _d: NewWebsite) -> Result<Website> {
            Err(Error::Catalog("backend unavailable".into()))
        }
    }

    #[tokio::test]
    async fn repository_errors_degrade_to_empty() {
        let matcher = FeedMatcher::new(Arc::new(BrokenCatalog));
        assert!(matcher.search("technology").await.is_empty());
    }
}
