use twilight_http::Client;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

use crate::emoji::ConfirmEmoji;

/// Seed a confirmation prompt with its decision reactions, confirm first.
pub async fn add_decision_reactions(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    confirm: &ConfirmEmoji,
    decline: &ConfirmEmoji,
) -> anyhow::Result<()> {
    http.create_reaction(channel_id, message_id, &confirm.request())
        .await?;
    http.create_reaction(channel_id, message_id, &decline.request())
        .await?;

    Ok(())
}

/// Replace a prompt with a terminal notice: edit the content in place and
/// strip every reaction so the prompt no longer invites an answer.
pub async fn replace_with_notice(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    content: &str,
) -> anyhow::Result<()> {
    http.update_message(channel_id, message_id)
        .content(Some(content))
        .await?;
    http.delete_all_reactions(channel_id, message_id).await?;

    Ok(())
}
