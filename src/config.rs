use chrono_tz::Tz;
use serenity::all::{ChannelId, GuildId, RoleId};

use crate::{
    error::{config::ConfigError, AppError},
    model::event::EventCatalog,
};

const DEFAULT_TIMEZONE: &str = "Europe/London";
const DEFAULT_THUMBNAIL_URL: &str = "https://raw.githubusercontent.com/CodingWithCrystaL/dior-family/refs/heads/main/file_00000000810061fba1eb3f3e52f6e605.jpeg";
const DEFAULT_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/CodingWithCrystaL/dior-family/refs/heads/main/standard.gif";

/// Static bot configuration, loaded once at startup.
///
/// Deliberately not `Debug` so the bot token cannot end up in logs.
pub struct Config {
    pub discord_token: String,

    pub guild_id: GuildId,
    pub role_id: RoleId,
    pub channel_id: ChannelId,
    pub events_channel_url: String,

    pub timezone: Tz,
    pub catalog: EventCatalog,

    pub port: Option<u16>,

    pub thumbnail_url: String,
    pub image_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable, unreadable or
    ///   invalid event catalog
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let timezone_name = lookup("EVENT_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let catalog = match lookup("EVENT_CATALOG_PATH") {
            Some(path) => {
                let json = std::fs::read_to_string(&path).map_err(|e| ConfigError::CatalogRead {
                    path: path.clone(),
                    source: e,
                })?;
                EventCatalog::from_json(&json, &path)?
            }
            None => EventCatalog::builtin()?,
        };

        let port = match lookup("PORT") {
            Some(value) => Some(value.trim().parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let events_channel_url = required("EVENTS_CHANNEL_URL")?;
        if !events_channel_url.starts_with("https://") && !events_channel_url.starts_with("http://")
        {
            return Err(ConfigError::InvalidEnvVar {
                name: "EVENTS_CHANNEL_URL".to_string(),
                value: events_channel_url,
                reason: "link buttons require an http(s) URL".to_string(),
            }
            .into());
        }

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            guild_id: GuildId::new(parse_snowflake("GUILD_ID", required("GUILD_ID")?)?),
            role_id: RoleId::new(parse_snowflake("ROLE_ID", required("ROLE_ID")?)?),
            channel_id: ChannelId::new(parse_snowflake("CHANNEL_ID", required("CHANNEL_ID")?)?),
            events_channel_url,
            timezone,
            catalog,
            port,
            thumbnail_url: lookup("EMBED_THUMBNAIL_URL")
                .unwrap_or_else(|| DEFAULT_THUMBNAIL_URL.to_string()),
            image_url: lookup("EMBED_IMAGE_URL").unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        })
    }
}

/// Parses a Discord snowflake, which must be a non-zero u64.
fn parse_snowflake(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "snowflake ids cannot be zero".to_string(),
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}
