//! The conversational feed-resolution engine.
//!
//! Free-text interest statements go in; a resolved feed (an existing catalog
//! entry or a freshly provisioned one) or a plain conversational reply comes
//! out. The model drives the process through a marker protocol
//! ([`protocol`]), the orchestrator ([`orchestrator`]) runs the bounded
//! completion/parse/act loop, and [`matcher`]/[`provisioner`] are the two
//! tools it can act with.

pub mod matcher;
pub mod orchestrator;
pub mod prompt;
pub mod protocol;
pub mod provisioner;

pub use matcher::FeedMatcher;
pub use orchestrator::{ConversationEngine, Resolution};
pub use protocol::Intent;
pub use provisioner::FeedProvisioner;
