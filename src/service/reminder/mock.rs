//! Mock reminder gateway for testing.

use std::collections::HashMap;

use serenity::{
    all::{ChannelId, CreateMessage, GuildId, MessageId, Role, RoleId},
    async_trait,
};
use test_utils::serenity::create_test_role;
use tokio::sync::RwLock;

use super::gateway::ReminderGateway;
use crate::error::AppError;

/// In-memory guild that records posted messages as JSON.
#[derive(Default)]
pub struct MockGateway {
    channels: HashMap<ChannelId, String>,
    roles: HashMap<RoleId, Role>,
    posted: RwLock<Vec<(ChannelId, serde_json::Value)>>,
    fail_on_lookup: RwLock<bool>,
}

impl MockGateway {
    /// Guild containing exactly the given channel and role.
    pub fn with_guild(channel_id: u64, role_id: u64) -> Self {
        Self::default().with_channel(channel_id).with_role(role_id)
    }

    pub fn with_channel(mut self, channel_id: u64) -> Self {
        self.channels
            .insert(ChannelId::new(channel_id), format!("channel-{channel_id}"));
        self
    }

    pub fn with_role(mut self, role_id: u64) -> Self {
        self.roles.insert(
            RoleId::new(role_id),
            create_test_role(role_id, "Event Pings", 0x00ddff, 3),
        );
        self
    }

    pub async fn set_fail_on_lookup(&self, fail: bool) {
        *self.fail_on_lookup.write().await = fail;
    }

    pub async fn posted(&self) -> Vec<(ChannelId, serde_json::Value)> {
        self.posted.read().await.clone()
    }

    async fn check_lookup(&self) -> Result<(), AppError> {
        if *self.fail_on_lookup.read().await {
            return Err(AppError::InternalError("Mock guild lookup failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReminderGateway for MockGateway {
    type Channel = String;
    type Role = Role;

    async fn guild_channels(
        &self,
        _guild_id: GuildId,
    ) -> Result<HashMap<ChannelId, String>, AppError> {
        self.check_lookup().await?;
        Ok(self.channels.clone())
    }

    async fn guild_roles(&self, _guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        self.check_lookup().await?;
        Ok(self.roles.clone())
    }

    async fn post_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let json = serde_json::to_value(&message)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let mut posted = self.posted.write().await;
        posted.push((channel_id, json));

        Ok(MessageId::new(posted.len() as u64))
    }
}
