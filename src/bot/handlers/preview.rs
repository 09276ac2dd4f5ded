//! Handles clicks on the preview's Send and Abort buttons.
//!
//! The draft is read back from the preview message itself. Sending acknowledges the click
//! first, resolves mention tokens against the guild, posts the message, and finally edits
//! the preview to report the outcome.

use crate::{
    bot::handlers::{
        context::component_context,
        directory::fetch_snapshot,
        respond::{deferred_edit, response_for},
    },
    core::{
        interaction::{self, Action},
        resolver,
    },
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument, warn};

/// Handles a component interaction. Components outside the preview namespace are ignored.
#[instrument(skip_all, fields(custom_id = %component.data.custom_id))]
pub async fn handle_control(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
) -> Result<()> {
    let custom_id = component.data.custom_id.as_str();
    if !interaction::is_preview_control(custom_id) {
        return Ok(());
    }

    let context = component_context(component);
    info!(
        user = %component.user.name,
        user_id = context.user_id,
        channel_id = context.channel_id,
        "Button clicked"
    );

    let action = interaction::on_control(&context, custom_id, &component.message.content);
    match action {
        Action::Deliver {
            guild_id,
            channel_id,
            draft,
        } => deliver(ctx, component, guild_id, channel_id, &draft).await,
        other => {
            match &other {
                Action::EditPreview { content, .. } => info!("Preview updated: {content}"),
                Action::Reply(text) => info!("Replied to click: {text}"),
                _ => {}
            }
            if let Some(response) = response_for(&other) {
                component
                    .create_response(ctx, response)
                    .await
                    .inspect_err(|e| error!("Failed to answer button click: {e}"))?;
            }
            Ok(())
        }
    }
}

async fn deliver(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    guild_id: u64,
    channel_id: u64,
    draft: &str,
) -> Result<()> {
    component
        .create_response(ctx, serenity::CreateInteractionResponse::Acknowledge)
        .await
        .inspect_err(|e| error!("Failed to acknowledge send click: {e}"))?;

    let guild_id = serenity::GuildId::new(guild_id);
    let channel_id = serenity::ChannelId::new(channel_id);

    let content = match fetch_snapshot(ctx, guild_id, draft).await {
        Ok(snapshot) => resolver::resolve_tokens(draft, Some(&snapshot)),
        Err(e) => {
            warn!("Could not look up guild entities, sending text as written: {e}");
            draft.to_string()
        }
    };
    if content != draft {
        info!("Converted @name mentions to ID mentions before sending.");
    }

    info!(channel_id = %channel_id, "Sending message");
    let result = channel_id
        .say(ctx, &content)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());
    match &result {
        Ok(()) => info!("Message sent successfully."),
        Err(e) => error!("Failed to send message: {e}"),
    }

    if let Some(edit) = deferred_edit(&interaction::on_delivery(result)) {
        component
            .edit_response(ctx, edit)
            .await
            .inspect_err(|e| error!("Failed to update preview after send: {e}"))?;
    }
    Ok(())
}
