//! Help command backed by Poise's builtin.

use crate::framework::{Context, Error};
use cfbot_i18n::keys;

/// Shows the available commands.
#[poise::command(prefix_command, track_edits, slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> Result<(), Error> {
    let footer = ctx.data().messages.get(keys::HELP_FOOTER);
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            extra_text_at_bottom: &footer,
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}
