//! Slash command definitions.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};
use thiserror::Error;

use crate::model::{event::EventCatalog, interaction::InteractionRequest};

/// Name of the reminder preview command.
pub const PREVIEW_COMMAND: &str = "previeweventmessage";

/// Name of the preview command's event argument.
pub const EVENT_OPTION: &str = "event";

/// Builds `/previeweventmessage` with one choice per catalog event.
pub fn preview_command(catalog: &EventCatalog) -> CreateCommand {
    let option = catalog.names().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            EVENT_OPTION,
            "Event whose reminder message to preview",
        )
        .required(true),
        |option, name| option.add_string_choice(name, name),
    );

    CreateCommand::new(PREVIEW_COMMAND)
        .description("Preview the reminder message posted before an event")
        .add_option(option)
}

/// Reason a slash command invocation was not turned into a request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandRejection {
    #[error("Unknown command received: {0}")]
    UnknownCommand(String),

    #[error("/previeweventmessage received without a value for 'event'")]
    MissingEvent,
}

/// Decodes a slash command invocation into a preview request.
///
/// # Arguments
/// - `command_name` - Name of the invoked command
/// - `event` - Value of the `event` argument, if present
///
/// # Returns
/// - `Ok(InteractionRequest::Preview)` - Preview command with an event argument
/// - `Err(CommandRejection::UnknownCommand)` - Any other command
/// - `Err(CommandRejection::MissingEvent)` - Preview command with a missing or empty argument
pub fn preview_request(
    command_name: &str,
    event: Option<&str>,
) -> Result<InteractionRequest, CommandRejection> {
    if command_name != PREVIEW_COMMAND {
        return Err(CommandRejection::UnknownCommand(command_name.to_string()));
    }

    event
        .filter(|name| !name.is_empty())
        .map(|name| InteractionRequest::Preview(name.to_string()))
        .ok_or(CommandRejection::MissingEvent)
}
