//! Gateway event dispatch: routes modal submissions and button clicks to their handlers.

use crate::{
    bot::{
        BotData,
        handlers::{modal, preview},
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// poise `event_handler` hook. Slash commands are dispatched by poise itself.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    _data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::InteractionCreate { interaction } = event {
        match interaction {
            serenity::Interaction::Modal(submission) => {
                modal::handle_modal_submit(ctx, submission).await?;
            }
            serenity::Interaction::Component(component) => {
                preview::handle_control(ctx, component).await?;
            }
            _ => {}
        }
    }
    Ok(())
}
