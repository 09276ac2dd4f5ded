//! The `/say4me` slash command - opens the draft modal after checking context and permissions.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            handlers::{context::command_context, respond::response_for},
        },
        core::interaction::{self, Action},
        errors::{Error, Result},
    };
    use std::sync::atomic::Ordering;
    use tracing::{error, info};

    /// Send a message via the bot with a preview
    #[poise::command(slash_command)]
    pub async fn say4me(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let poise::Context::Application(app_ctx) = ctx else {
            return Ok(());
        };
        let command = app_ctx.interaction;
        let context = command_context(command);
        info!(
            user = %command.user.name,
            user_id = context.user_id,
            channel_id = context.channel_id,
            "SlashCommand: /{}",
            interaction::COMMAND_NAME
        );

        let action = interaction::on_command(&context);
        if let Action::Reply(reason) = &action {
            info!("Rejected: {reason}");
        }
        let Some(response) = response_for(&action) else {
            return Ok(());
        };

        app_ctx.has_sent_initial_response.store(true, Ordering::SeqCst);
        let shows_modal = action == Action::ShowModal;
        command
            .create_response(ctx.serenity_context(), response)
            .await
            .inspect(|()| {
                if shows_modal {
                    info!(user_id = context.user_id, "Modal shown");
                }
            })
            .inspect_err(|e| error!(user_id = context.user_id, "Failed to answer /say4me: {e}"))?;

        Ok(())
    }
}

pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interaction::COMMAND_NAME;

    #[test]
    fn test_command_metadata() {
        let command = say4me();
        assert_eq!(command.name, COMMAND_NAME);
        assert!(command.parameters.is_empty());
        assert_eq!(
            command.description.as_deref(),
            Some("Send a message via the bot with a preview")
        );
    }
}
