//! Feed catalog records and their classification enumerations.
//!
//! The wire forms here are load-bearing: `FeedProposal` must deserialize the
//! exact JSON the model is instructed to emit after the `NEW_FEED:` marker,
//! so field names are camelCase and the enums use their API spellings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel source URL for feeds synthesized from a proposal rather than
/// discovered at a real address.
pub const SYNTHESIZED_FEED_URL: &str = "newsflow://synthesized";

/// Name of the singleton website that owns all synthesized feeds.
pub const SYNTHESIZED_WEBSITE_NAME: &str = "NewsFlow Curated";

/// Sentinel URL and category for the synthesized-feed owner website.
pub const SYNTHESIZED_WEBSITE_URL: &str = "newsflow://curated";
pub const SYNTHESIZED_WEBSITE_CATEGORY: &str = "general";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Classification enumerations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where a feed's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedKind {
    /// Fetched from a concrete RSS endpoint.
    Rss,
    /// Sourced through the GNews aggregation API.
    Gnews,
    Other,
}

/// GNews topic taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GNewsCategory {
    General,
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

/// Countries supported by the GNews API (ISO 3166-1 alpha-2, lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GNewsCountry {
    Au,
    Br,
    Ca,
    Cn,
    Eg,
    Fr,
    De,
    Gr,
    Hk,
    In,
    Ie,
    Il,
    It,
    Jp,
    Nl,
    No,
    Pk,
    Pe,
    Ph,
    Pt,
    Ro,
    Ru,
    Sg,
    Es,
    Se,
    Ch,
    Tw,
    Ua,
    Gb,
    Us,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Durable records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A subscribable content source with classification metadata.
///
/// Owned by exactly one [`Website`] via `website_id`. For synthesized feeds
/// `url` carries [`SYNTHESIZED_FEED_URL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: FeedKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GNewsCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<GNewsCountry>,
    pub website_id: String,
    pub created_at: DateTime<Utc>,
}

/// The organizational owner of one or more feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// New-feed proposal (NEW_FEED payload)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A new feed definition as proposed by the model.
///
/// Wire format (embedded in the system prompt, must stay bit-compatible):
/// `{"name":...,"description":...,"type":"GNEWS","gNewsCategory":...,
///   "gNewsCountry":...,"searchTerms":[...],"tags":[...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedProposal {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: FeedKind,
    #[serde(default, rename = "gNewsCategory")]
    pub g_news_category: Option<GNewsCategory>,
    #[serde(default, rename = "gNewsCountry")]
    pub g_news_country: Option<GNewsCountry>,
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_kind_uses_api_spelling() {
        assert_eq!(serde_json::to_string(&FeedKind::Gnews).unwrap(), r#""GNEWS""#);
        assert_eq!(serde_json::to_string(&FeedKind::Rss).unwrap(), r#""RSS""#);
    }

    #[test]
    fn proposal_deserializes_wire_form() {
        let raw = r#"{
            "name": "Technology News Feed",
            "description": "Curated technology coverage",
            "type": "GNEWS",
            "gNewsCategory": "technology",
            "gNewsCountry": "us",
            "searchTerms": ["technology", "tech"],
            "tags": ["tech"]
        }"#;
        let p: FeedProposal = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, "Technology News Feed");
        assert_eq!(p.kind, FeedKind::Gnews);
        assert_eq!(p.g_news_category, Some(GNewsCategory::Technology));
        assert_eq!(p.g_news_country, Some(GNewsCountry::Us));
        assert_eq!(p.search_terms, vec!["technology", "tech"]);
    }

    #[test]
    fn proposal_rejects_unknown_category() {
        let raw = r#"{"name":"x","type":"GNEWS","gNewsCategory":"astrology"}"#;
        assert!(serde_json::from_str::<FeedProposal>(raw).is_err());
    }

    #[test]
    fn proposal_optional_fields_default() {
        let raw = r#"{"name":"x","type":"OTHER"}"#;
        let p: FeedProposal = serde_json::from_str(raw).unwrap();
        assert!(p.description.is_none());
        assert!(p.search_terms.is_empty());
        assert!(p.tags.is_empty());
    }
}
