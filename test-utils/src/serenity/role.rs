//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values. All other
/// fields are set to reasonable defaults (not hoisted, not managed, zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(1417563796905656502, "Event Pings", 0x00ddff, 3);
/// assert_eq!(role.name, "Event Pings");
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": true,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
