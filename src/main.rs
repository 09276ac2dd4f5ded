use dotenvy::dotenv;
use message4me::{bot, config::BotConfig, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load configuration; a missing token stops here with a non-zero exit
    let config = BotConfig::from_env()
        .inspect_err(|e| error!("{e}"))?;
    info!(
        upsert_commands = config.upsert_commands,
        guild_id = config.guild_id.as_deref().unwrap_or("<none>"),
        "Starting bot"
    );

    // 4. Run the bot
    bot::run_bot(config).await
}
