//! Discord operations needed to post a reminder.
//!
//! `ReminderService` talks to Discord only through `ReminderGateway`, which the
//! shared serenity HTTP client implements.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateMessage, GuildChannel, GuildId, MessageId, Role, RoleId},
    async_trait,
    http::Http,
};

use crate::error::AppError;

#[async_trait]
pub trait ReminderGateway: Send + Sync {
    type Channel: Send;
    type Role: Send;

    /// Current channels of the guild keyed by id.
    async fn guild_channels(
        &self,
        guild_id: GuildId,
    ) -> Result<HashMap<ChannelId, Self::Channel>, AppError>;

    /// Current roles of the guild keyed by id.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Self::Role>, AppError>;

    /// Sends a message to a channel, returning the id of the posted message.
    async fn post_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError>;
}

#[async_trait]
impl ReminderGateway for Arc<Http> {
    type Channel = GuildChannel;
    type Role = Role;

    async fn guild_channels(
        &self,
        guild_id: GuildId,
    ) -> Result<HashMap<ChannelId, GuildChannel>, AppError> {
        Ok(guild_id.channels(self).await?)
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        Ok(guild_id.roles(self).await?)
    }

    async fn post_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let message = channel_id.send_message(self, message).await?;

        Ok(message.id)
    }
}
