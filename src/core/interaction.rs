//! Interaction flow for `/say4me`.
//!
//! Each inbound event (command invoked, modal submitted, control clicked) is decided by a
//! pure function of the [`InteractionContext`] and the event payload, returning the
//! [`Action`] the bot layer should carry out. Nothing is stored between events: the draft
//! travels as the content of the ephemeral preview message.

/// Name of the slash command.
pub const COMMAND_NAME: &str = "say4me";

/// Custom id of the text-entry modal.
pub const MODAL_ID: &str = "say4me:modal";
/// Title shown on the modal.
pub const MODAL_TITLE: &str = "Message4Me";
/// Custom id of the modal's text input.
pub const INPUT_TEXT_ID: &str = "say4me:text";
/// Label of the modal's text input.
pub const INPUT_LABEL: &str = "Message content";
/// Placeholder of the modal's text input.
pub const INPUT_PLACEHOLDER: &str = "Write your message here (Discord markdown supported). You will receive a preview after submitting";
/// Minimum draft length accepted by the modal.
pub const INPUT_MIN_LENGTH: u16 = 1;
/// Maximum draft length accepted by the modal (Discord's message limit).
pub const INPUT_MAX_LENGTH: u16 = 2000;

/// Prefix shared by all preview controls; used to route clicks.
pub const CONTROL_PREFIX: &str = "preview:";
/// Custom id of the Send button.
pub const SEND_ID: &str = "preview:send";
/// Custom id of the Abort button.
pub const ABORT_ID: &str = "preview:cancel";
/// Custom id of the disabled "Sent" indicator shown after delivery.
pub const SENT_INDICATOR_ID: &str = "noop:sent";
/// Custom id of the disabled "Abort" indicator shown after delivery.
pub const ABORT_INDICATOR_ID: &str = "noop:abort";

/// User-facing texts.
pub mod messages {
    /// Command or modal used outside a guild.
    pub const OUTSIDE_GUILD: &str = "This command can only be used in a server.";
    /// Bot cannot post in the channel.
    pub const MISSING_PERMISSION: &str =
        "I don't have permission to send messages in this channel/thread";
    /// Modal submitted with only whitespace.
    pub const BLANK_INPUT: &str = "Please provide some text to send.";
    /// Permission lost between preview and confirmation.
    pub const PERMISSION_REVOKED: &str =
        "I no longer have permission to send in this channel/thread.";
    /// Preview message came back without content.
    pub const PREVIEW_MISSING: &str = "Preview content missing. Please run the command again.";
    /// Draft was posted.
    pub const SENT: &str = "Message sent.";
    /// Draft was discarded.
    pub const ABORTED: &str = "Operation aborted.";
    /// Click on a `preview:` control this version does not know.
    pub const UNKNOWN_ACTION: &str = "Unknown action.";
    /// Prefix for delivery failures; the platform's reason follows.
    pub const SEND_FAILED_PREFIX: &str = "Failed to send message: ";
}

/// Per-event facts the decisions depend on. Built fresh for every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionContext {
    /// Invoking user
    pub user_id: u64,
    /// Guild the interaction came from, `None` in DMs
    pub guild_id: Option<u64>,
    /// Channel the interaction came from
    pub channel_id: u64,
    /// Whether the bot may post in `channel_id`
    pub can_send: bool,
}

/// Buttons attached to the preview message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// No components
    None,
    /// Active Send and Abort buttons
    Preview,
    /// Disabled "Sent" and "Abort" indicators
    Sent,
}

/// What the bot layer should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Event is not ours
    Ignore,
    /// Reply privately with a text
    Reply(String),
    /// Present the text-entry modal
    ShowModal,
    /// Reply privately with the draft and the Send/Abort controls
    ShowPreview(String),
    /// Rewrite the preview message in place
    EditPreview {
        /// New message text
        content: String,
        /// Components left on the message
        controls: Controls,
    },
    /// Resolve tokens in `draft` against the guild, post it, then report via [`on_delivery`]
    Deliver {
        /// Guild used for token resolution
        guild_id: u64,
        /// Channel to post into
        channel_id: u64,
        /// Draft exactly as shown in the preview
        draft: String,
    },
}

impl Action {
    fn reply(text: &str) -> Self {
        Self::Reply(text.to_string())
    }

    fn edit(content: impl Into<String>, controls: Controls) -> Self {
        Self::EditPreview {
            content: content.into(),
            controls,
        }
    }
}

/// Slash command invoked.
#[must_use]
pub fn on_command(ctx: &InteractionContext) -> Action {
    if ctx.guild_id.is_none() {
        return Action::reply(messages::OUTSIDE_GUILD);
    }
    if !ctx.can_send {
        return Action::reply(messages::MISSING_PERMISSION);
    }
    Action::ShowModal
}

/// Modal submitted with `text` as the value of the text input (if present).
///
/// The guild and permission checks are repeated because either may have changed while
/// the modal was open.
#[must_use]
pub fn on_modal_submit(ctx: &InteractionContext, text: Option<&str>) -> Action {
    if ctx.guild_id.is_none() {
        return Action::reply(messages::OUTSIDE_GUILD);
    }
    let content = text.unwrap_or_default();
    if content.trim().is_empty() {
        return Action::reply(messages::BLANK_INPUT);
    }
    if !ctx.can_send {
        return Action::reply(messages::MISSING_PERMISSION);
    }
    Action::ShowPreview(content.to_string())
}

/// Returns true if `custom_id` belongs to the preview controls.
#[must_use]
pub fn is_preview_control(custom_id: &str) -> bool {
    custom_id.starts_with(CONTROL_PREFIX)
}

/// Preview control clicked; `preview_content` is the raw text of the preview message.
#[must_use]
pub fn on_control(ctx: &InteractionContext, custom_id: &str, preview_content: &str) -> Action {
    if !is_preview_control(custom_id) {
        return Action::Ignore;
    }
    if preview_content.trim().is_empty() {
        return Action::edit(messages::PREVIEW_MISSING, Controls::None);
    }

    match custom_id {
        SEND_ID => {
            let Some(guild_id) = ctx.guild_id else {
                return Action::edit(messages::OUTSIDE_GUILD, Controls::None);
            };
            if !ctx.can_send {
                return Action::edit(messages::PERMISSION_REVOKED, Controls::None);
            }
            Action::Deliver {
                guild_id,
                channel_id: ctx.channel_id,
                draft: preview_content.to_string(),
            }
        }
        ABORT_ID => Action::edit(messages::ABORTED, Controls::None),
        _ => Action::reply(messages::UNKNOWN_ACTION),
    }
}

/// Outcome of posting a delivered draft; `Err` carries the platform's reason.
#[must_use]
pub fn on_delivery(result: Result<(), String>) -> Action {
    match result {
        Ok(()) => Action::edit(messages::SENT, Controls::Sent),
        Err(reason) => Action::edit(
            format!("{}{reason}", messages::SEND_FAILED_PREFIX),
            Controls::None,
        ),
    }
}
