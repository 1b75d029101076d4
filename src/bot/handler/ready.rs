//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. It registers the preview slash command in the
//! configured guild. Guild commands are overwritten on every connection so the
//! choices always match the current event catalog.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::{bot::command::preview_command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Failing to register the command is logged and does not stop the bot; buttons
/// on reminders keep working without it.
///
/// # Arguments
/// - `state` - Shared state containing the guild id and event catalog
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let command = preview_command(&state.config.catalog);

    match state
        .config
        .guild_id
        .set_commands(&ctx.http, vec![command])
        .await
    {
        Ok(commands) => tracing::info!(
            "Registered {} slash command(s) in guild {}",
            commands.len(),
            state.config.guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
