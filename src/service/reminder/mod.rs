//! Scheduled reminder dispatch.
//!
//! This module provides the `ReminderService`, invoked by the scheduler shortly before
//! an event starts. It resolves the configured events channel and ping role in the
//! guild, renders the reminder with the event's current roster and posts it publicly.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Reminder embed, button and message rendering
//! - `gateway` - Discord lookups and sends used by the service

pub mod builder;
pub mod gateway;
#[cfg(test)]
pub mod mock;

use std::collections::HashMap;
use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, MessageId, RoleId},
    http::Http,
};

use crate::{error::AppError, model::event::EventTime, state::AppState};

use self::gateway::ReminderGateway;

/// Where a reminder is posted and who it pings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub channel_id: ChannelId,
    pub role_id: RoleId,
}

/// Result of a single reminder firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Reminder was posted as the given message
    Sent(MessageId),
    /// Channel or role could not be found in the guild, nothing was posted
    Skipped,
}

/// Resolves the configured channel and role against the guild's current state.
///
/// # Arguments
/// - `channels` - The guild's channels keyed by id
/// - `roles` - The guild's roles keyed by id
/// - `channel_id` - Configured events channel
/// - `role_id` - Configured ping role
///
/// # Returns
/// - `Some(Destination)` - Both exist in the guild
/// - `None` - Either one is missing
pub fn resolve_destination<C, R>(
    channels: &HashMap<ChannelId, C>,
    roles: &HashMap<RoleId, R>,
    channel_id: ChannelId,
    role_id: RoleId,
) -> Option<Destination> {
    if !channels.contains_key(&channel_id) || !roles.contains_key(&role_id) {
        return None;
    }

    Some(Destination {
        channel_id,
        role_id,
    })
}

/// Service posting scheduled event reminders to Discord.
///
/// Holds a reference to the shared application state for configuration and rosters,
/// plus the gateway used to look up the guild and send the message. In production
/// the gateway is the serenity HTTP client.
pub struct ReminderService<'a, G: ReminderGateway = Arc<Http>> {
    state: &'a AppState,
    gateway: &'a G,
}

impl<'a, G: ReminderGateway> ReminderService<'a, G> {
    /// Creates a new ReminderService instance.
    ///
    /// # Arguments
    /// - `state` - Shared application state
    /// - `gateway` - Discord client used for lookups and sends
    pub fn new(state: &'a AppState, gateway: &'a G) -> Self {
        Self { state, gateway }
    }

    /// Posts the reminder for one occurrence of an event.
    ///
    /// Fetches the guild's channels and roles, and silently skips the firing when
    /// the configured channel or role no longer exists. Otherwise the event's roster
    /// is read, which starts tracking the event if this is its first reminder, and
    /// the reminder is posted with a role mention.
    ///
    /// # Arguments
    /// - `event_name` - Event the reminder is for
    /// - `start_time` - Start time of this occurrence
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome::Sent)` - Reminder posted
    /// - `Ok(DispatchOutcome::Skipped)` - Channel or role missing, nothing posted
    /// - `Err(AppError::DiscordErr)` - Fetching the guild or sending failed
    pub async fn dispatch(
        &self,
        event_name: &str,
        start_time: EventTime,
    ) -> Result<DispatchOutcome, AppError> {
        let config = &self.state.config;

        let channels = self.gateway.guild_channels(config.guild_id).await?;
        let roles = self.gateway.guild_roles(config.guild_id).await?;

        let Some(destination) =
            resolve_destination(&channels, &roles, config.channel_id, config.role_id)
        else {
            tracing::warn!(
                "Skipping {} reminder for {}: channel {} or role {} not found in guild {}",
                event_name,
                start_time,
                config.channel_id,
                config.role_id,
                config.guild_id
            );
            return Ok(DispatchOutcome::Skipped);
        };

        let participants = self.state.registrations.list(event_name).await;
        let reminder = builder::reminder_for(config, event_name, Some(start_time), participants);

        let message_id = self
            .gateway
            .post_message(
                destination.channel_id,
                builder::build_reminder_message(&reminder),
            )
            .await?;

        tracing::info!(
            "Posted {} reminder for {} to channel {} pinging role {}",
            event_name,
            start_time,
            destination.channel_id,
            destination.role_id
        );

        Ok(DispatchOutcome::Sent(message_id))
    }
}
