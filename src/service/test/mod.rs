use std::sync::Arc;

use test_utils::fixture::config as fixture;

use crate::{
    config::Config,
    model::{
        event::EventCatalog,
        interaction::{ButtonAction, InteractionReply, InteractionRequest},
    },
    service::{interaction::InteractionService, registration::RegistrationStore},
    state::AppState,
};

mod interaction;

/// Builds application state with the fixture configuration and the given catalog.
fn state_with_catalog(catalog: serde_json::Value) -> AppState {
    let env = fixture::env();
    let mut config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();
    config.catalog = EventCatalog::from_json(&catalog.to_string(), "fixture").unwrap();

    AppState::new(Arc::new(config), RegistrationStore::new())
}

/// Routes a request and unwraps a plain text reply.
async fn notice(state: &AppState, request: InteractionRequest, participant: &str) -> String {
    let service = InteractionService::new(&state.config, &state.registrations);

    match service.handle(request, participant).await {
        Some(InteractionReply::Notice(content)) => content,
        other => panic!("expected a notice, got {:?}", other),
    }
}
