//! Catalog repository seam.
//!
//! Feed and Website records are durable and only ever created through this
//! interface. The engine consumes the [`CatalogRepo`] trait; the gateway
//! wires in [`MemoryCatalog`], and tests substitute their own doubles.

pub mod filter;
pub mod store;

pub use filter::{Filter, Queryable};
pub use store::MemoryCatalog;

use async_trait::async_trait;

use nf_domain::error::Result;
use nf_domain::feed::{Feed, FeedKind, GNewsCategory, GNewsCountry, Website};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Creation drafts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Fields for creating a feed record. The repository assigns the identity
/// and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewFeed {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub kind: FeedKind,
    pub tags: Vec<String>,
    pub search_terms: Vec<String>,
    pub category: Option<GNewsCategory>,
    pub country: Option<GNewsCountry>,
    pub website_id: String,
}

/// Fields for creating a website record.
#[derive(Debug, Clone)]
pub struct NewWebsite {
    pub name: String,
    pub url: String,
    pub category: String,
    pub tags: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Repository trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Data access over the feed catalog.
///
/// Listing is filter-driven (see [`Filter`]); ordering per backend must be
/// deterministic so that repeated identical queries against an unchanged
/// catalog return identical result sets.
#[async_trait]
pub trait CatalogRepo: Send + Sync {
    async fn list_feeds(&self, filter: &Filter) -> Result<Vec<Feed>>;
    async fn get_feed(&self, id: &str) -> Result<Option<Feed>>;
    async fn create_feed(&self, draft: NewFeed) -> Result<Feed>;

    async fn list_websites(&self, filter: &Filter) -> Result<Vec<Website>>;
    async fn create_website(&self, draft: NewWebsite) -> Result<Website>;
}
