use tokio::time::{Duration, sleep};
use tracing::error;
use twilight_model::{
    gateway::payload::incoming::MessageCreate,
    guild::Permissions,
    id::{Id, marker::MessageMarker},
};

use crate::CommandMeta;
use rusty_core::Context;
use rusty_plugins::confirmation::{Confirmation, Resolvable};
use rusty_plugins::{PluginControl, run_plugins};
use rusty_utils::permissions::author_has_permission;

pub const META: CommandMeta = CommandMeta {
    name: "purge",
    desc: "Delete the latest messages in this channel, after asking first.",
    category: "moderation",
    usage: "!purge <amount>",
};

const MAX_PURGE: u16 = 100;

/// Delete a bounded number of recent channel messages once the invoking
/// moderator confirms via reaction.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let amount = match arg1.and_then(|raw| raw.parse::<u16>().ok()) {
        Some(requested) if requested >= 1 => requested.min(MAX_PURGE),
        _ => {
            let usage = format!("Usage: `{}` (amount between 1 and {MAX_PURGE})", META.usage);
            http.create_message(msg.channel_id).content(&usage).await?;
            return Ok(());
        }
    };

    if !author_has_permission(http, &msg, Permissions::MANAGE_MESSAGES).await? {
        http.create_message(msg.channel_id)
            .content("You are not permitted to use this command.")
            .await?;
        return Ok(());
    }

    let gate = Confirmation::from_policy(&ctx.confirm)
        .prompt(Resolvable::with(move |_msg: &MessageCreate| {
            format!("Delete the latest {amount} message(s) in this channel?")
        }))
        .on_cancel("Deletion cancelled.")
        .on_timeout("Deletion request expired.");

    if run_plugins(&ctx, &msg, &[&gate]).await? == PluginControl::Stop {
        return Ok(());
    }

    // The confirmed prompt deleted itself; include the invoking message.
    let delete_count = amount.saturating_add(1).min(MAX_PURGE);
    let messages = http
        .channel_messages(msg.channel_id)
        .limit(delete_count)
        .await?
        .model()
        .await?;

    let ids: Vec<Id<MessageMarker>> = messages.into_iter().map(|m| m.id).collect();

    if ids.is_empty() {
        http.create_message(msg.channel_id)
            .content("No messages found to delete.")
            .await?;
        return Ok(());
    }

    let delete_result = if ids.len() == 1 {
        http.delete_message(msg.channel_id, ids[0]).await
    } else {
        http.delete_messages(msg.channel_id, &ids).await
    };

    if let Err(source) = delete_result {
        error!(?source, "purge delete request failed");
        http.create_message(msg.channel_id)
            .content("I couldn't delete messages. I likely need the 'Manage Messages' permission.")
            .await?;
        return Ok(());
    }

    let done = format!("Purged {} message(s).", amount);
    let done_message = http
        .create_message(msg.channel_id)
        .content(&done)
        .await?
        .model()
        .await?;

    sleep(Duration::from_secs(3)).await;
    let _ = http.delete_message(msg.channel_id, done_message.id).await;

    Ok(())
}
