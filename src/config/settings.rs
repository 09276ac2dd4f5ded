//! Bot settings module for loading the Discord token and command registration options.
//!
//! All values come from environment variables, which `main` may have populated from a
//! `.env` file beforehand. The resulting [`BotConfig`] is constructed once at startup and
//! handed to the framework as part of the shared bot data.

use crate::errors::{Error, Result};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable holding the optional guild used for command registration.
pub const GUILD_ID_VAR: &str = "GUILD_ID";
/// Environment variable toggling slash command registration on startup.
pub const UPSERT_COMMANDS_VAR: &str = "UPSERT_COMMANDS";

/// Runtime configuration for the bot.
#[derive(Clone)]
pub struct BotConfig {
    /// Discord bot token (never logged)
    pub token: String,
    /// Raw guild id for guild-scoped registration, if one was configured
    pub guild_id: Option<String>,
    /// Whether the slash command should be (re-)registered when the bot becomes ready
    pub upsert_commands: bool,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("upsert_commands", &self.upsert_commands)
            .finish()
    }
}

impl BotConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `DISCORD_TOKEN` is missing or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed map instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config {
                message: format!(
                    "Missing {TOKEN_VAR}. Please configure it via environment variable or .env file."
                ),
            })?;

        let guild_id = lookup(GUILD_ID_VAR)
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        let upsert_commands = lookup(UPSERT_COMMANDS_VAR)
            .as_deref()
            .is_some_and(parse_flag);

        Ok(Self {
            token: token.trim().to_string(),
            guild_id,
            upsert_commands,
        })
    }
}

/// Interprets a boolean-ish environment value.
///
/// `1`, `true`, `yes`, `y` and `on` (any case, surrounding whitespace ignored) are true;
/// everything else is false.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
