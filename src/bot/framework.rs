//! poise framework setup: error hook, command registration and the client loop.

use crate::{
    bot::{BotData, commands, handlers::events},
    config::BotConfig,
    core::registration::{RegistrationScope, plan_registration},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Registers the commands according to `scope`. Failures are logged, never fatal.
async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<BotData, Error>],
    scope: RegistrationScope,
) {
    match scope {
        RegistrationScope::Skip => {}
        RegistrationScope::Guild(id) => {
            let guild_id = serenity::GuildId::new(id);
            info!("Registering guild command in guild {guild_id}...");
            match poise::builtins::register_in_guild(ctx, commands, guild_id).await {
                Ok(()) => info!("Registered guild commands in {guild_id}"),
                Err(e) => error!("Failed to register guild command: {e}"),
            }
        }
        RegistrationScope::Global => {
            info!("Registering global command (may take time to propagate)...");
            match poise::builtins::register_globally(ctx, commands).await {
                Ok(()) => info!("Registered global commands"),
                Err(e) => error!("Failed to register global command: {e}"),
            }
        }
    }
}

/// Builds the framework and runs the Discord client until it stops.
///
/// # Errors
/// Returns an error if the client cannot be created or the gateway connection fails.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let token = config.token.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::say4me()],
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}. Considering command registration...", ready.user.name);
                let ready_guilds: Vec<u64> = ready.guilds.iter().map(|g| g.id.get()).collect();
                let scope = plan_registration(
                    config.upsert_commands,
                    config.guild_id.as_deref(),
                    &ready_guilds,
                );
                register_commands(ctx, &framework.options().commands, scope).await;
                info!("Bot is online.");
                Ok(BotData::new(config))
            })
        })
        .build();

    // Slash commands, modals and buttons all arrive as interactions; no privileged intents.
    let intents = serenity::GatewayIntents::GUILDS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
