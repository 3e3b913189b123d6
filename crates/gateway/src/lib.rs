//! NewsFlow gateway: HTTP surface and process wiring for the
//! conversational feed-resolution engine.

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod state;
