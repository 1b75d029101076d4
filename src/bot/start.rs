use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// The returned HTTP client is shared with the reminder scheduler so reminders can
/// be posted without a second connection to Discord.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot and runs until the gateway connection ends.
///
/// A bad token or an unreachable gateway surfaces as an error, which is fatal.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
