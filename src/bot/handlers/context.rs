//! Builds the framework-agnostic [`InteractionContext`] from serenity interactions.

use crate::core::interaction::InteractionContext;
use poise::serenity_prelude as serenity;

/// Whether the bot may post in the interaction's channel.
///
/// Uses the application permissions Discord computes for the channel the interaction was
/// created in. Threads require "Send Messages in Threads" instead of "Send Messages".
#[must_use]
pub fn bot_can_send(
    app_permissions: Option<serenity::Permissions>,
    channel: Option<&serenity::PartialChannel>,
) -> bool {
    let Some(perms) = app_permissions else {
        return false;
    };
    if perms.administrator() {
        return true;
    }

    let in_thread = channel.is_some_and(|c| {
        matches!(
            c.kind,
            serenity::ChannelType::PublicThread
                | serenity::ChannelType::PrivateThread
                | serenity::ChannelType::NewsThread
        )
    });
    let can_post = if in_thread {
        perms.send_messages_in_threads()
    } else {
        perms.send_messages()
    };

    perms.view_channel() && can_post
}

fn build(
    user: &serenity::User,
    guild_id: Option<serenity::GuildId>,
    channel_id: serenity::ChannelId,
    app_permissions: Option<serenity::Permissions>,
    channel: Option<&serenity::PartialChannel>,
) -> InteractionContext {
    InteractionContext {
        user_id: user.id.get(),
        guild_id: guild_id.map(serenity::GuildId::get),
        channel_id: channel_id.get(),
        can_send: bot_can_send(app_permissions, channel),
    }
}

/// Context of a slash command invocation.
#[must_use]
pub fn command_context(interaction: &serenity::CommandInteraction) -> InteractionContext {
    build(
        &interaction.user,
        interaction.guild_id,
        interaction.channel_id,
        interaction.app_permissions,
        interaction.channel.as_ref(),
    )
}

/// Context of a modal submission.
#[must_use]
pub fn modal_context(interaction: &serenity::ModalInteraction) -> InteractionContext {
    build(
        &interaction.user,
        interaction.guild_id,
        interaction.channel_id,
        interaction.app_permissions,
        interaction.channel.as_ref(),
    )
}

/// Context of a button click.
#[must_use]
pub fn component_context(interaction: &serenity::ComponentInteraction) -> InteractionContext {
    build(
        &interaction.user,
        interaction.guild_id,
        interaction.channel_id,
        interaction.app_permissions,
        interaction.channel.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::Permissions;

    #[test]
    fn test_no_permissions_cannot_send() {
        assert!(!bot_can_send(None, None));
        assert!(!bot_can_send(Some(Permissions::empty()), None));
    }

    #[test]
    fn test_view_and_send_required() {
        assert!(bot_can_send(
            Some(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES),
            None
        ));
        assert!(!bot_can_send(Some(Permissions::SEND_MESSAGES), None));
        assert!(!bot_can_send(Some(Permissions::VIEW_CHANNEL), None));
    }

    #[test]
    fn test_administrator_can_send() {
        assert!(bot_can_send(Some(Permissions::ADMINISTRATOR), None));
    }
}
