//! Feed provisioner: materializes a `NEW_FEED` proposal into catalog
//! records.
//!
//! Synthesized feeds have no real source address; they all hang off one
//! well-known owner website which is created on first use.

use std::sync::Arc;

use nf_catalog::{CatalogRepo, Filter, NewFeed, NewWebsite};
use nf_domain::error::{Error, Result};
use nf_domain::feed::{
    Feed, FeedProposal, Website, SYNTHESIZED_FEED_URL, SYNTHESIZED_WEBSITE_CATEGORY,
    SYNTHESIZED_WEBSITE_NAME, SYNTHESIZED_WEBSITE_URL,
};

pub struct FeedProvisioner {
    catalog: Arc<dyn CatalogRepo>,
}

impl FeedProvisioner {
    pub fn new(catalog: Arc<dyn CatalogRepo>) -> Self {
        Self { catalog }
    }

    /// Persist a proposed feed and, if needed, its singleton owner website.
    ///
    /// Repository errors propagate as [`Error::Provision`]; the orchestrator
    /// downgrades them so the user still gets their reply.
    pub async fn provision(&self, proposal: &FeedProposal) -> Result<Feed> {
        let owner = self.resolve_owner().await?;

        let draft = NewFeed {
            name: proposal.name.clone(),
            // The proposal carries no source address; GNews feeds are
            // query-defined, so the record gets the sentinel URL.
            url: SYNTHESIZED_FEED_URL.into(),
            description: proposal.description.clone(),
            kind: proposal.kind,
            tags: proposal.tags.clone(),
            search_terms: proposal.search_terms.clone(),
            category: proposal.g_news_category,
            country: proposal.g_news_country,
            website_id: owner.id.clone(),
        };

        let feed = self
            .catalog
            .create_feed(draft)
            .await
            .map_err(|e| Error::Provision(format!("creating feed '{}': {e}", proposal.name)))?;

        tracing::info!(
            feed_id = %feed.id,
            name = %feed.name,
            website_id = %owner.id,
            "provisioned synthesized feed"
        );
        Ok(feed)
    }

    /// Look up the singleton owner website, creating it when absent.
    ///
    /// Not transactional: concurrent first-use may race and create duplicate
    /// owner records. The lookup takes the first match by insertion order,
    /// so behaviour converges after the race.
    async fn resolve_owner(&self) -> Result<Website> {
        let hits = self
            .catalog
            .list_websites(&Filter::eq("name", SYNTHESIZED_WEBSITE_NAME))
            .await
            .map_err(|e| Error::Provision(format!("looking up owner website: {e}")))?;

        if let Some(site) = hits.into_iter().next() {
            return Ok(site);
        }

        tracing::debug!(name = SYNTHESIZED_WEBSITE_NAME, "creating owner website");
        self.catalog
            .create_website(NewWebsite {
                name: SYNTHESIZED_WEBSITE_NAME.into(),
                url: SYNTHESIZED_WEBSITE_URL.into(),
                category: SYNTHESIZED_WEBSITE_CATEGORY.into(),
                tags: Vec::new(),
            })
            .await
            .map_err(|e| Error::Provision(format!("creating owner website: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_catalog::MemoryCatalog;
    use nf_domain::feed::{FeedKind, GNewsCategory, GNewsCountry};

    fn proposal() -> FeedProposal {
        FeedProposal {
            name: "Technology News Feed".into(),
            description: Some("Curated technology coverage".into()),
            kind: FeedKind::Gnews,
            g_news_category: Some(GNewsCategory::Technology),
            g_news_country: Some(GNewsCountry::Us),
            search_terms: vec!["technology".into()],
            tags: vec!["tech".into()],
        }
    }

    #[tokio::test]
    async fn first_provision_creates_owner_website() {
        let catalog = Arc::new(MemoryCatalog::new());
        let provisioner = FeedProvisioner::new(catalog.clone());

        let feed = provisioner.provision(&proposal()).await.unwrap();
        assert_eq!(feed.url, SYNTHESIZED_FEED_URL);
        assert_eq!(feed.category, Some(GNewsCategory::Technology));

        let sites = catalog
            .list_websites(&Filter::eq("name", SYNTHESIZED_WEBSITE_NAME))
            .await
            .unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(feed.website_id, sites[0].id);
    }

    #[tokio::test]
    async fn second_provision_reuses_owner_website() {
        let catalog = Arc::new(MemoryCatalog::new());
        let provisioner = FeedProvisioner::new(catalog.clone());

        let first = provisioner.provision(&proposal()).await.unwrap();
        let second = provisioner.provision(&proposal()).await.unwrap();
        assert_eq!(first.website_id, second.website_id);

        let sites = catalog.list_websites(&Filter::All).await.unwrap();
        assert_eq!(sites.len(), 1);
    }

    #[tokio::test]
    async fn proposal_fields_copy_through() {
        let catalog = Arc::new(MemoryCatalog::new());
        let provisioner = FeedProvisioner::new(catalog);

        let feed = provisioner.provision(&proposal()).await.unwrap();
        assert_eq!(feed.name, "Technology News Feed");
        assert_eq!(feed.description.as_deref(), Some("Curated technology coverage"));
        assert_eq!(feed.kind, FeedKind::Gnews);
        assert_eq!(feed.search_terms, vec!["technology"]);
        assert_eq!(feed.tags, vec!["tech"]);
        assert_eq!(feed.country, Some(GNewsCountry::Us));
    }
}
