//! Configuration fixtures.
//!
//! Provides a complete set of required environment variables and sample event
//! catalogs so tests can build a `Config` through its lookup-based constructor
//! without mutating the process environment.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Default test bot token.
pub const DISCORD_TOKEN: &str = "test-token";

/// Default test guild ID.
pub const GUILD_ID: u64 = 1417559624986394644;

/// Default test role ID mentioned by reminders.
pub const ROLE_ID: u64 = 1417563796905656502;

/// Default test destination channel ID.
pub const CHANNEL_ID: u64 = 1417563997007511752;

/// Default test "Event Info" link.
pub const EVENTS_CHANNEL_URL: &str =
    "https://discord.com/channels/1417559624986394644/1417564180634144868";

/// Creates a variable map containing every required configuration variable.
///
/// # Default Values
/// - DISCORD_TOKEN: `"test-token"`
/// - GUILD_ID, ROLE_ID, CHANNEL_ID: the constants above
/// - EVENTS_CHANNEL_URL: a discord.com channel link
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let mut env = fixture::config::env();
/// env.insert("PORT", "8080".to_string());
/// let config = Config::from_lookup(|name| env.get(name).cloned())?;
/// ```
pub fn env() -> HashMap<&'static str, String> {
    HashMap::from([
        ("DISCORD_TOKEN", DISCORD_TOKEN.to_string()),
        ("GUILD_ID", GUILD_ID.to_string()),
        ("ROLE_ID", ROLE_ID.to_string()),
        ("CHANNEL_ID", CHANNEL_ID.to_string()),
        ("EVENTS_CHANNEL_URL", EVENTS_CHANNEL_URL.to_string()),
    ])
}

/// Catalog with a single `Harbor` event starting at 04:10.
pub fn harbor_catalog_json() -> Value {
    json!([
        { "name": "Harbor", "times": ["04:10"] }
    ])
}

/// Catalog exercising day rollback and names containing delimiters.
pub fn rollover_catalog_json() -> Value {
    json!([
        { "name": "Harbor", "times": ["04:10", "00:05"] },
        { "name": "Night_Run: Docks", "times": ["00:00", "12:30"] }
    ])
}
