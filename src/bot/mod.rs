//! Bot layer - Discord-specific interface and interaction handlers
//!
//! This module provides the Discord interface for Message4Me: the `/say4me` slash
//! command, the modal and button handlers, and the framework bootstrap.

/// Discord command implementations
pub mod commands;
/// Framework setup and client startup
pub mod framework;
/// Discord interaction handlers (modal submissions, button clicks)
pub mod handlers;

use crate::config::BotConfig;

/// Shared data available to all bot commands and event handlers.
///
/// Holds only the immutable configuration; the draft itself lives in the preview
/// message, so there is no per-user state to share.
#[derive(Debug)]
pub struct BotData {
    /// Configuration the bot was started with
    pub config: BotConfig,
}

impl BotData {
    /// Creates a new `BotData` instance with the given configuration.
    #[must_use]
    pub const fn new(config: BotConfig) -> Self {
        Self { config }
    }
}

pub use commands::*;
pub use framework::run_bot;
