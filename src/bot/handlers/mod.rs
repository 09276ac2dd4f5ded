//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not slash commands:
//! modal submissions and button clicks, plus the glue that turns serenity payloads into
//! core decisions and core decisions back into responses.

/// Interaction context derivation (permission snapshot)
pub mod context;
/// Guild lookups for mention resolution
pub mod directory;
/// Gateway event routing
pub mod events;
/// Modal submission handling
pub mod modal;
/// Preview button handling
pub mod preview;
/// Action to response translation
pub mod respond;
