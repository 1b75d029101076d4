//! Reminder message rendering.
//!
//! Turns a `ReminderMessage` into Discord builders. Shared by scheduled dispatches,
//! which post publicly to the events channel, and previews, which reply privately,
//! so both render identically.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateMessage,
    Timestamp,
};

use crate::{
    config::Config,
    model::{
        event::{EventTime, REMINDER_LEAD_MINUTES},
        interaction::ButtonAction,
        reminder::ReminderMessage,
    },
};

/// Embed color for reminders.
pub const EMBED_COLOR: u32 = 0x00ddff;

/// Shown in place of the roster while nobody has registered.
pub const ROSTER_PLACEHOLDER: &str = "None yet";

/// Discord's limit on the length of an embed field value.
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;

/// Discord's limit on the length of message content.
pub const MESSAGE_CONTENT_LIMIT: usize = 2000;

/// Assembles the reminder for an event from configuration and its current roster.
///
/// # Arguments
/// - `config` - Bot configuration providing role, links, artwork and timezone
/// - `event_name` - Event the reminder is for
/// - `start_time` - Start of the occurrence, `None` for previews
/// - `participants` - Current roster in registration order
pub fn reminder_for(
    config: &Config,
    event_name: &str,
    start_time: Option<EventTime>,
    participants: Vec<String>,
) -> ReminderMessage {
    ReminderMessage {
        event_name: event_name.to_string(),
        start_time,
        timezone: config.timezone,
        lead_minutes: REMINDER_LEAD_MINUTES,
        participants,
        role_id: config.role_id,
        info_url: config.events_channel_url.clone(),
        thumbnail_url: config.thumbnail_url.clone(),
        image_url: config.image_url.clone(),
    }
}

/// Renders a roster as one participant per line.
///
/// Returns the placeholder for an empty roster. When the full roster would exceed
/// `limit` characters, as many participants as fit are kept and the rest are
/// summarized in a trailing "…and N more" line.
pub fn render_roster(participants: &[String], limit: usize) -> String {
    if participants.is_empty() {
        return ROSTER_PLACEHOLDER.to_string();
    }

    let full_len = participants.iter().map(|p| p.chars().count()).sum::<usize>()
        + participants.len()
        - 1;
    if full_len <= limit {
        return participants.join("\n");
    }

    let overflow_line = |remaining: usize| format!("…and {} more", remaining);

    let mut rendered = String::new();
    let mut rendered_len = 0;

    for (shown, participant) in participants.iter().enumerate() {
        let separator = usize::from(!rendered.is_empty());
        let next_len = rendered_len + separator + participant.chars().count();

        // Keep room for the overflow line describing whoever comes after this one
        let remaining_after = participants.len() - shown - 1;
        let needed = if remaining_after == 0 {
            next_len
        } else {
            next_len + 1 + overflow_line(remaining_after).chars().count()
        };

        if needed > limit {
            if !rendered.is_empty() {
                rendered.push('\n');
            }
            rendered.push_str(&overflow_line(participants.len() - shown));
            return rendered;
        }

        if separator == 1 {
            rendered.push('\n');
        }
        rendered.push_str(participant);
        rendered_len = next_len;
    }

    rendered
}

/// Builds the reminder embed.
///
/// Contains the title, description, roster field, artwork and the time it was
/// sent. Previews get a "Preview" footer.
pub fn build_reminder_embed(reminder: &ReminderMessage) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(reminder.title())
        .description(reminder.description())
        .color(EMBED_COLOR)
        .field(
            "Registered Participants",
            render_roster(&reminder.participants, EMBED_FIELD_VALUE_LIMIT),
            false,
        )
        .thumbnail(&reminder.thumbnail_url)
        .image(&reminder.image_url)
        .timestamp(Timestamp::now());

    if reminder.is_preview() {
        embed = embed.footer(CreateEmbedFooter::new("Preview"));
    }

    embed
}

/// Builds the "Event Info", "Register Yourself" and "Show Registered" button row.
pub fn build_reminder_components(reminder: &ReminderMessage) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new_link(&reminder.info_url).label("Event Info"),
        CreateButton::new(ButtonAction::Register.custom_id(&reminder.event_name))
            .label("Register Yourself")
            .style(ButtonStyle::Primary),
        CreateButton::new(ButtonAction::Show.custom_id(&reminder.event_name))
            .label("Show Registered")
            .style(ButtonStyle::Secondary),
    ])]
}

/// Builds the public channel message for a scheduled reminder, pinging the role.
pub fn build_reminder_message(reminder: &ReminderMessage) -> CreateMessage {
    CreateMessage::new()
        .content(reminder.mention())
        .embed(build_reminder_embed(reminder))
        .components(build_reminder_components(reminder))
}
