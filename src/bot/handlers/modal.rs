//! Handles submission of the `/say4me` modal by replying with the ephemeral preview.

use crate::{
    bot::handlers::{context::modal_context, respond::response_for},
    core::interaction::{self, Action, INPUT_TEXT_ID, MODAL_ID},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument};

/// Value of the draft text input, if the submission carries it.
fn submitted_text(rows: &[serenity::ActionRow]) -> Option<&str> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            serenity::ActionRowComponent::InputText(input) if input.custom_id == INPUT_TEXT_ID => {
                input.value.as_deref()
            }
            _ => None,
        })
}

/// Handles a modal submission. Modals other than ours are ignored.
#[instrument(skip_all, fields(modal_id = %modal.data.custom_id))]
pub async fn handle_modal_submit(
    ctx: &serenity::Context,
    modal: &serenity::ModalInteraction,
) -> Result<()> {
    if modal.data.custom_id != MODAL_ID {
        return Ok(());
    }

    let context = modal_context(modal);
    info!(
        user = %modal.user.name,
        user_id = context.user_id,
        channel_id = context.channel_id,
        "Modal submit"
    );

    let action = interaction::on_modal_submit(&context, submitted_text(&modal.data.components));
    if let Action::Reply(reason) = &action {
        info!("Rejected modal submit: {reason}");
    }

    let Some(response) = response_for(&action) else {
        return Ok(());
    };
    let is_preview = matches!(action, Action::ShowPreview(_));
    modal
        .create_response(ctx, response)
        .await
        .inspect(|()| {
            if is_preview {
                info!("Ephemeral preview sent (from modal)");
            }
        })
        .inspect_err(|e| error!("Failed to reply to modal submit: {e}"))?;

    Ok(())
}
