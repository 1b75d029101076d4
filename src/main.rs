mod bot;
mod config;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    config::Config, error::AppError, scheduler::event_reminders,
    service::registration::RegistrationStore, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Arc::new(Config::from_env()?);

    tracing::info!(
        "Loaded {} events, reminders evaluated in {}",
        config.catalog.len(),
        config.timezone.name()
    );

    let state = AppState::new(config.clone(), RegistrationStore::new());

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    event_reminders::start_scheduler(state, discord_http).await?;

    if let Some(port) = config.port {
        tokio::spawn(async move {
            if let Err(e) = startup::serve_liveness(port).await {
                tracing::error!("Liveness endpoint error: {}", e);
            }
        });
    }

    // Runs until the gateway connection ends; failing to connect is fatal
    bot::start::start_bot(bot_client).await
}
