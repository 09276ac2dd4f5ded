//! Translates core [`Action`]s into Discord interaction responses.

use crate::core::interaction::{
    ABORT_ID, ABORT_INDICATOR_ID, Action, Controls, INPUT_LABEL, INPUT_MAX_LENGTH,
    INPUT_MIN_LENGTH, INPUT_PLACEHOLDER, INPUT_TEXT_ID, MODAL_ID, MODAL_TITLE, SEND_ID,
    SENT_INDICATOR_ID,
};
use poise::serenity_prelude as serenity;

/// The text-entry modal shown for `/say4me`.
#[must_use]
pub fn draft_modal() -> serenity::CreateModal {
    let input = serenity::CreateInputText::new(
        serenity::InputTextStyle::Paragraph,
        INPUT_LABEL,
        INPUT_TEXT_ID,
    )
    .placeholder(INPUT_PLACEHOLDER)
    .required(true)
    .min_length(INPUT_MIN_LENGTH)
    .max_length(INPUT_MAX_LENGTH);

    serenity::CreateModal::new(MODAL_ID, MODAL_TITLE)
        .components(vec![serenity::CreateActionRow::InputText(input)])
}

/// Component rows for the preview message.
#[must_use]
pub fn control_rows(controls: Controls) -> Vec<serenity::CreateActionRow> {
    let buttons = match controls {
        Controls::None => return Vec::new(),
        Controls::Preview => vec![
            serenity::CreateButton::new(SEND_ID)
                .label("Send")
                .style(serenity::ButtonStyle::Success),
            serenity::CreateButton::new(ABORT_ID)
                .label("Abort")
                .style(serenity::ButtonStyle::Danger),
        ],
        Controls::Sent => vec![
            serenity::CreateButton::new(SENT_INDICATOR_ID)
                .label("Sent")
                .style(serenity::ButtonStyle::Success)
                .disabled(true),
            serenity::CreateButton::new(ABORT_INDICATOR_ID)
                .label("Abort")
                .style(serenity::ButtonStyle::Secondary)
                .disabled(true),
        ],
    };
    vec![serenity::CreateActionRow::Buttons(buttons)]
}

/// Direct interaction response for `action`.
///
/// Returns `None` for [`Action::Ignore`] and for [`Action::Deliver`], which is carried
/// out in several steps by the preview handler.
#[must_use]
pub fn response_for(action: &Action) -> Option<serenity::CreateInteractionResponse> {
    let response = match action {
        Action::Ignore | Action::Deliver { .. } => return None,
        Action::Reply(text) => serenity::CreateInteractionResponse::Message(
            serenity::CreateInteractionResponseMessage::new()
                .content(text)
                .ephemeral(true),
        ),
        Action::ShowModal => serenity::CreateInteractionResponse::Modal(draft_modal()),
        Action::ShowPreview(draft) => serenity::CreateInteractionResponse::Message(
            serenity::CreateInteractionResponseMessage::new()
                .content(draft)
                .ephemeral(true)
                .components(control_rows(Controls::Preview)),
        ),
        Action::EditPreview { content, controls } => {
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(content)
                    .components(control_rows(*controls)),
            )
        }
    };
    Some(response)
}

/// Edit of the original (deferred) response, used once a delivery has finished.
#[must_use]
pub fn deferred_edit(action: &Action) -> Option<serenity::EditInteractionResponse> {
    match action {
        Action::EditPreview { content, controls } => Some(
            serenity::EditInteractionResponse::new()
                .content(content)
                .components(control_rows(*controls)),
        ),
        _ => None,
    }
}
