//! Composable search predicates over catalog records.
//!
//! The repository interface is filter-driven so that callers never enumerate
//! records themselves: a [`Filter`] expresses substring matching on string
//! fields, membership on list fields, exact equality, and `and`/`or`
//! composition. Backends evaluate filters however suits them; the in-memory
//! store evaluates them directly through the [`Queryable`] field seam.

use serde::{Deserialize, Serialize};

/// A search predicate over a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Matches every record.
    All,
    /// Case-insensitive substring match on a string field.
    Contains { field: String, value: String },
    /// Exact membership in a list field.
    Has { field: String, value: String },
    /// Exact match on a string field.
    Eq { field: String, value: String },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains { field: field.into(), value: value.into() }
    }

    pub fn has(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Has { field: field.into(), value: value.into() }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Eq { field: field.into(), value: value.into() }
    }

    /// Evaluate this filter against a record.
    ///
    /// Unknown field names never match; they do not error. This mirrors how
    /// a remote query backend silently returns nothing for an unindexed
    /// field rather than failing the whole query.
    pub fn matches<R: Queryable + ?Sized>(&self, record: &R) -> bool {
        match self {
            Filter::All => true,
            Filter::Contains { field, value } => record
                .text_field(field)
                .is_some_and(|t| t.to_lowercase().contains(&value.to_lowercase())),
            Filter::Has { field, value } => record
                .list_field(field)
                .is_some_and(|items| items.iter().any(|i| i == value)),
            Filter::Eq { field, value } => {
                record.text_field(field).is_some_and(|t| t == value)
            }
            Filter::And(parts) => parts.iter().all(|f| f.matches(record)),
            Filter::Or(parts) => parts.iter().any(|f| f.matches(record)),
        }
    }
}

/// Field access seam that lets filters evaluate any record type.
pub trait Queryable {
    /// Look up a string field by name.
    fn text_field(&self, name: &str) -> Option<&str>;
    /// Look up a string-list field by name.
    fn list_field(&self, name: &str) -> Option<&[String]>;
}

impl Queryable for nf_domain::feed::Feed {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "url" => Some(&self.url),
            "description" => self.description.as_deref(),
            "website_id" => Some(&self.website_id),
            _ => None,
        }
    }

    fn list_field(&self, name: &str) -> Option<&[String]> {
        match name {
            "tags" => Some(&self.tags),
            "search_terms" => Some(&self.search_terms),
            _ => None,
        }
    }
}

impl Queryable for nf_domain::feed::Website {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "url" => Some(&self.url),
            "category" => Some(&self.category),
            _ => None,
        }
    }

    fn list_field(&self, name: &str) -> Option<&[String]> {
        match name {
            "tags" => Some(&self.tags),
            _ => None,
        }
    }
}
