//! Shared domain types for NewsFlow.
//!
//! Everything the other crates agree on lives here: the chat transcript
//! types, the feed catalog records and their classification enumerations,
//! the configuration tree, and the single error taxonomy.

pub mod chat;
pub mod config;
pub mod error;
pub mod feed;
