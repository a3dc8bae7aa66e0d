use std::env;
use std::sync::Arc;

use tracing::{error, info, warn};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;
use twilight_standby::Standby;

use rusty_commands::handle_message;
use rusty_core::{ConfirmPolicy, Context};
use rusty_utils::emoji::parse_reaction_emoji;
use rusty_utils::time::parse_timeout;

/// Build the confirmation policy from the environment, falling back to the
/// defaults for anything unset or unparsable.
fn confirm_policy_from_env() -> ConfirmPolicy {
    let mut policy = ConfirmPolicy::default();

    if let Ok(raw) = env::var("CONFIRM_TIMEOUT") {
        match parse_timeout(&raw) {
            Some(timeout) => policy.timeout = timeout,
            None => warn!(%raw, "ignoring invalid CONFIRM_TIMEOUT"),
        }
    }

    if let Ok(raw) = env::var("CONFIRM_EMOJI") {
        match parse_reaction_emoji(&raw) {
            Some(emoji) => policy.confirm = emoji,
            None => warn!(%raw, "ignoring invalid CONFIRM_EMOJI"),
        }
    }

    if let Ok(raw) = env::var("DECLINE_EMOJI") {
        match parse_reaction_emoji(&raw) {
            Some(emoji) => policy.decline = emoji,
            None => warn!(%raw, "ignoring invalid DECLINE_EMOJI"),
        }
    }

    policy
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    // Store Discord Bot Token
    let token = env::var("DISCORD_TOKEN")?;

    // Create a single shared HTTP Client and reaction broker
    let http = Arc::new(Client::new(token.clone()));
    let standby = Arc::new(Standby::new());
    let ctx = Context::new(
        Arc::clone(&http),
        Arc::clone(&standby),
        confirm_policy_from_env(),
    );

    // Declare which intents the bot has
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::DIRECT_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    // Declare how many shards we want to be running and input our token and intents
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Rusty is connecting...");

    // Our ears, listens for stuff to do
    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        // Feed every event to the broker so paused confirmations see their
        // reactions.
        let _ = standby.process(&event);

        match event {
            Event::Ready(_) => {
                info!("Rusty has successfully awoken!");
            }

            Event::MessageCreate(msg) => {
                // Spawned so a command paused on a confirmation cannot
                // starve the event loop the broker feeds from.
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message command failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }
    Ok(()) // Return Success, shutdown cleanly
}
