use chrono_tz::Tz;
use serenity::all::RoleId;

use crate::model::event::EventTime;

/// Everything needed to render a reminder for one event.
///
/// Scheduled dispatches carry the occurrence's start time; previews have no real
/// occurrence and leave `start_time` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderMessage {
    /// Name of the event the reminder is for
    pub event_name: String,
    /// Start time of the occurrence, `None` for previews
    pub start_time: Option<EventTime>,
    /// Timezone the start time is expressed in
    pub timezone: Tz,
    /// Minutes between the reminder and the event start
    pub lead_minutes: u8,
    /// Registered participants in registration order
    pub participants: Vec<String>,
    /// Role mentioned in the message content
    pub role_id: RoleId,
    /// Target of the "Event Info" link button
    pub info_url: String,
    pub thumbnail_url: String,
    pub image_url: String,
}

impl ReminderMessage {
    pub fn is_preview(&self) -> bool {
        self.start_time.is_none()
    }

    pub fn title(&self) -> String {
        format!(
            "{} starts in {} minutes!",
            self.event_name, self.lead_minutes
        )
    }

    pub fn description(&self) -> String {
        const CALL_TO_ACTION: &str = "Click the buttons below to register or get more info.";

        match self.start_time {
            Some(start_time) => format!(
                "Starts at **{}** ({}).\n{}",
                start_time,
                self.timezone.name(),
                CALL_TO_ACTION
            ),
            None => CALL_TO_ACTION.to_string(),
        }
    }

    /// Message content pinging the configured role.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.role_id)
    }
}
