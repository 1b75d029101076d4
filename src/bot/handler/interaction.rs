use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::command::{preview_request, EVENT_OPTION},
    model::interaction::{InteractionReply, InteractionRequest},
    service::{
        interaction::InteractionService,
        reminder::builder::{build_reminder_components, build_reminder_embed},
    },
    state::AppState,
};

/// Routes button presses and slash commands, ignoring every other interaction
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Component(component) => handle_component(state, ctx, component).await,
        Interaction::Command(command) => handle_command(state, ctx, command).await,
        _ => {}
    }
}

async fn handle_component(state: &AppState, ctx: Context, component: ComponentInteraction) {
    let Some(request) = InteractionRequest::from_custom_id(&component.data.custom_id) else {
        tracing::debug!(
            "Ignoring button with unrecognized id '{}'",
            component.data.custom_id
        );
        return;
    };

    let Some(reply) = route(state, request, &component.user.name).await else {
        return;
    };

    if let Err(e) = component
        .create_response(&ctx.http, build_response(reply))
        .await
    {
        tracing::error!(
            "Failed to respond to button '{}': {}",
            component.data.custom_id,
            e
        );
    }
}

async fn handle_command(state: &AppState, ctx: Context, command: CommandInteraction) {
    let event = command
        .data
        .options
        .iter()
        .find(|option| option.name == EVENT_OPTION)
        .and_then(|option| option.value.as_str());

    let request = match preview_request(&command.data.name, event) {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!("{}", rejection);
            return;
        }
    };

    let Some(reply) = route(state, request, &command.user.name).await else {
        return;
    };

    if let Err(e) = command.create_response(&ctx.http, build_response(reply)).await {
        tracing::error!(
            "Failed to respond to slash command '{}': {}",
            command.data.name,
            e
        );
    }
}

async fn route(
    state: &AppState,
    request: InteractionRequest,
    participant: &str,
) -> Option<InteractionReply> {
    InteractionService::new(&state.config, &state.registrations)
        .handle(request, participant)
        .await
}

/// Builds the private response for a reply.
///
/// Every reply is ephemeral, only the user who interacted can see it.
fn build_response(reply: InteractionReply) -> CreateInteractionResponse {
    let message = match reply {
        InteractionReply::Notice(content) => CreateInteractionResponseMessage::new().content(content),
        InteractionReply::Reminder(reminder) => CreateInteractionResponseMessage::new()
            .content(reminder.mention())
            .embed(build_reminder_embed(&reminder))
            .components(build_reminder_components(&reminder)),
    };

    CreateInteractionResponse::Message(message.ephemeral(true))
}
