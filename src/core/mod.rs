//! Core logic - framework-agnostic decisions for the `/say4me` flow
//!
//! Nothing in here talks to Discord; the bot layer feeds in plain IDs, strings and
//! permission booleans, and executes the returned actions.

/// Guild name lookups used for token resolution
pub mod directory;
/// Command, modal and button decisions
pub mod interaction;
/// Command registration scope
pub mod registration;
/// `@name` / `#name` token resolution
pub mod resolver;
