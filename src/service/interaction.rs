//! Interaction routing for reminder buttons and the preview command.
//!
//! Maps decoded `InteractionRequest`s onto the registration store and produces the
//! private reply for the requesting user. Requests for events missing from the
//! catalog are ignored and get no reply.

use dioxus_logger::tracing;

use crate::{
    config::Config,
    model::interaction::{InteractionReply, InteractionRequest},
    service::{
        registration::{RegistrationOutcome, RegistrationStore},
        reminder::builder::{self, MESSAGE_CONTENT_LIMIT},
    },
};

pub struct InteractionService<'a> {
    config: &'a Config,
    registrations: &'a RegistrationStore,
}

impl<'a> InteractionService<'a> {
    pub fn new(config: &'a Config, registrations: &'a RegistrationStore) -> Self {
        Self {
            config,
            registrations,
        }
    }

    /// Handles a request from a user.
    ///
    /// # Arguments
    /// - `request` - Decoded button press or slash command
    /// - `participant` - Username of the requesting user
    ///
    /// # Returns
    /// - `Some(InteractionReply)` - Reply to send privately to the user
    /// - `None` - Event is unknown, the interaction is ignored
    pub async fn handle(
        &self,
        request: InteractionRequest,
        participant: &str,
    ) -> Option<InteractionReply> {
        if !self.config.catalog.contains(request.event_name()) {
            tracing::debug!(
                "Ignoring interaction for unknown event '{}'",
                request.event_name()
            );
            return None;
        }

        let reply = match request {
            InteractionRequest::Register(event_name) => {
                match self.registrations.register(&event_name, participant).await {
                    RegistrationOutcome::Registered => {
                        tracing::info!("{} registered for {}", participant, event_name);
                        format!("✅ You have been registered for **{}**!", event_name)
                    }
                    RegistrationOutcome::AlreadyRegistered => {
                        format!("⚠️ You are already registered for **{}**!", event_name)
                    }
                }
            }
            InteractionRequest::Show(event_name) => {
                let participants = self.registrations.list(&event_name).await;
                let header = format!("📋 Registered participants for **{}**:\n", event_name);
                let limit = MESSAGE_CONTENT_LIMIT.saturating_sub(header.chars().count());

                format!("{}{}", header, builder::render_roster(&participants, limit))
            }
            InteractionRequest::Preview(event_name) => {
                let participants = self.registrations.list(&event_name).await;
                let reminder = builder::reminder_for(self.config, &event_name, None, participants);

                return Some(InteractionReply::Reminder(reminder));
            }
        };

        Some(InteractionReply::Notice(reply))
    }
}
