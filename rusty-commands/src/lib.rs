pub mod moderation;
pub mod utility;

use twilight_model::gateway::payload::incoming::MessageCreate;

use rusty_core::Context;
use rusty_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    moderation::purge::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content_owned = msg.content.clone();
    let content = content_owned.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .and_then(|rest| rest.split_whitespace().next())
        .map(ToOwned::to_owned);
    let arg1 = arg1.as_deref();

    match cmd.as_str() {
        "ping" => utility::ping::run(ctx.clone(), msg).await?,
        "help" => utility::help::run(ctx.clone(), msg, arg1).await?,

        "purge" => moderation::purge::run(ctx.clone(), msg, arg1).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}
