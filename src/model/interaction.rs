//! Interaction requests decoded from Discord and the private replies they produce.
//!
//! Buttons carry their action and event as a custom id of the form
//! `<action>:<event name>`. Only the first `:` separates the two, so event names are
//! free to contain `:` or `_`.

use crate::model::reminder::ReminderMessage;

/// Discord's limit on the length of a component custom id.
pub const CUSTOM_ID_MAX_LEN: usize = 100;

const DELIMITER: char = ':';
const REGISTER_TAG: &str = "register";
const SHOW_TAG: &str = "show";

/// Longest event name that still fits in every encoded custom id.
pub const MAX_EVENT_NAME_LEN: usize = CUSTOM_ID_MAX_LEN - REGISTER_TAG.len() - 1;

/// A user action routed to a specific event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionRequest {
    /// "Register Yourself" button
    Register(String),
    /// "Show Registered" button
    Show(String),
    /// `/previeweventmessage` slash command
    Preview(String),
}

impl InteractionRequest {
    pub fn event_name(&self) -> &str {
        match self {
            Self::Register(name) | Self::Show(name) | Self::Preview(name) => name,
        }
    }

    /// Decodes a button custom id.
    ///
    /// Fails closed: anything other than a register or show tag followed by a
    /// non-empty event name yields `None`. Previews never arrive through buttons.
    ///
    /// # Arguments
    /// - `custom_id` - Custom id of the pressed button
    ///
    /// # Returns
    /// - `Some(InteractionRequest)` - Recognized register or show request
    /// - `None` - Unrecognized custom id
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        let (tag, event_name) = custom_id.split_once(DELIMITER)?;
        if event_name.is_empty() {
            return None;
        }

        match tag {
            REGISTER_TAG => Some(Self::Register(event_name.to_string())),
            SHOW_TAG => Some(Self::Show(event_name.to_string())),
            _ => None,
        }
    }
}

/// Action carried by a reminder button.
///
/// Previews are only reachable through the slash command, so they have no button
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Register,
    Show,
}

impl ButtonAction {
    fn tag(self) -> &'static str {
        match self {
            Self::Register => REGISTER_TAG,
            Self::Show => SHOW_TAG,
        }
    }

    /// Encodes the action for an event as a component custom id.
    pub fn custom_id(self, event_name: &str) -> String {
        format!("{}{}{}", self.tag(), DELIMITER, event_name)
    }
}

/// Private reply to an interaction, only visible to the user who triggered it.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionReply {
    /// Plain text notice
    Notice(String),
    /// Full reminder message, used by previews
    Reminder(ReminderMessage),
}
