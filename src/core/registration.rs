//! Decides where the slash command gets registered when the bot becomes ready.

use tracing::{info, warn};

/// Where to register the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Registration disabled
    Skip,
    /// Register in one guild (updates show up immediately)
    Guild(u64),
    /// Register globally (may take time to propagate)
    Global,
}

/// Picks the registration scope from the configuration and the guilds the bot is in.
///
/// A configured guild id that does not parse, is zero, or is not among `ready_guilds`
/// falls back to global registration.
#[must_use]
pub fn plan_registration(
    upsert_commands: bool,
    guild_id: Option<&str>,
    ready_guilds: &[u64],
) -> RegistrationScope {
    if !upsert_commands {
        info!("UPSERT_COMMANDS=false -> Skipping command registration to avoid rate limits.");
        return RegistrationScope::Skip;
    }

    let Some(raw) = guild_id.map(str::trim).filter(|g| !g.is_empty()) else {
        info!("No GUILD_ID provided. Registering global command (may take time to propagate)...");
        return RegistrationScope::Global;
    };

    match raw.parse::<u64>() {
        Ok(id) if id != 0 && ready_guilds.contains(&id) => RegistrationScope::Guild(id),
        Ok(_) => {
            warn!(guild_id = raw, "Provided GUILD_ID not found. Falling back to global registration...");
            RegistrationScope::Global
        }
        Err(e) => {
            warn!(guild_id = raw, "Provided GUILD_ID is invalid ({e}). Falling back to global registration...");
            RegistrationScope::Global
        }
    }
}
