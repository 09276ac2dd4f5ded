//! Fills a [`GuildSnapshot`] from Discord for the tokens a draft actually contains.

use crate::{
    core::{directory::GuildSnapshot, resolver},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{debug, instrument};

/// Results requested per member search; Discord caps the endpoint at 1000.
const MEMBER_SEARCH_LIMIT: u64 = 100;

/// Fetches the members, roles and text channels needed to resolve `draft` in `guild_id`.
///
/// Members are searched by each `@` token (the search matches username and nickname
/// prefixes, the snapshot then applies exact matching). Roles are only fetched when the
/// draft has `@` tokens, channels only when it has `#` tokens.
#[instrument(skip_all, fields(guild_id = %guild_id))]
pub async fn fetch_snapshot(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    draft: &str,
) -> Result<GuildSnapshot> {
    let mut snapshot = GuildSnapshot::new();

    let mentions = resolver::mention_tokens(draft);
    if !mentions.is_empty() {
        for token in &mentions {
            let members = guild_id
                .search_members(ctx, token, Some(MEMBER_SEARCH_LIMIT))
                .await?;
            for member in &members {
                snapshot.add_member(member.user.id.get(), &member.user.name, member.display_name());
            }
        }
        for role in guild_id.roles(ctx).await?.into_values() {
            snapshot.add_role(role.id.get(), &role.name);
        }
    }

    if !resolver::channel_tokens(draft).is_empty() {
        for channel in guild_id.channels(ctx).await?.into_values() {
            if channel.kind == serenity::ChannelType::Text {
                snapshot.add_text_channel(channel.id.get(), &channel.name);
            }
        }
    }

    debug!(
        mentions = mentions.len(),
        members = snapshot.member_count(),
        "Fetched guild snapshot"
    );
    Ok(snapshot)
}
