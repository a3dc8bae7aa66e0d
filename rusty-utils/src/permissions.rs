use twilight_http::Client;
use twilight_model::{gateway::payload::incoming::MessageCreate, guild::Permissions};

/// Check whether a message author holds a required guild permission.
///
/// Administrators pass every check. Returns `Ok(false)` outside a guild
/// context, where guild permissions are meaningless.
pub async fn author_has_permission(
    http: &Client,
    msg: &MessageCreate,
    required: Permissions,
) -> anyhow::Result<bool> {
    let effective = match msg.member.as_ref().and_then(|member| member.permissions) {
        Some(perms) => perms,
        None => {
            let Some(guild_id) = msg.guild_id else {
                return Ok(false);
            };

            let member = http
                .guild_member(guild_id, msg.author.id)
                .await?
                .model()
                .await?;
            let roles = http.roles(guild_id).await?.model().await?;

            // The role sharing the guild id is @everyone.
            roles
                .iter()
                .filter(|role| role.id == guild_id.cast() || member.roles.contains(&role.id))
                .fold(Permissions::empty(), |acc, role| acc | role.permissions)
        }
    };

    Ok(effective.contains(Permissions::ADMINISTRATOR) || effective.contains(required))
}
