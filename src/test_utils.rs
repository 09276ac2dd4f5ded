//! Shared test utilities for Message4Me.
//!
//! Fixtures for the pure core: a small guild directory and ready-made interaction
//! contexts, so tests read as scenarios instead of setup.

use crate::core::{directory::GuildSnapshot, interaction::InteractionContext};

/// Guild used by the fixtures below.
pub const TEST_GUILD_ID: u64 = 100;
/// Channel used by the fixtures below.
pub const TEST_CHANNEL_ID: u64 = 200;
/// Invoking user used by the fixtures below.
pub const TEST_USER_ID: u64 = 300;

/// A guild with one member (`alex`, id 1), one role (`mods`, id 20) and one text
/// channel (`general`, id 9).
#[must_use]
pub fn sample_guild() -> GuildSnapshot {
    GuildSnapshot::new()
        .with_member(1, "alex", "Alex")
        .with_role(20, "mods")
        .with_text_channel(9, "general")
}

/// Interaction from inside the test guild.
#[must_use]
pub const fn guild_context(can_send: bool) -> InteractionContext {
    InteractionContext {
        user_id: TEST_USER_ID,
        guild_id: Some(TEST_GUILD_ID),
        channel_id: TEST_CHANNEL_ID,
        can_send,
    }
}

/// Interaction from a direct message.
#[must_use]
pub const fn dm_context() -> InteractionContext {
    InteractionContext {
        user_id: TEST_USER_ID,
        guild_id: None,
        channel_id: TEST_CHANNEL_ID,
        can_send: true,
    }
}
