//! Discord bot integration for event reminders and registrations.
//!
//! The bot registers the `/previeweventmessage` guild command once connected and
//! routes button presses and slash commands to the interaction service. Scheduled
//! reminders do not go through the gateway, they share the bot's HTTP client.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Interactions are delivered regardless of intents and
//! the bot never reads message content.

pub mod command;
pub mod handler;
pub mod start;
