use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{COMMANDS, CommandMeta};
use rusty_core::Context;
use rusty_utils::COMMAND_PREFIX;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List commands, or show one command's usage.",
    category: "utility",
    usage: "!help [command]",
};

/// List every command grouped by category, or detail a single command.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    if let Some(raw) = arg1 {
        let wanted = raw.trim_start_matches(COMMAND_PREFIX).to_ascii_lowercase();

        let reply = match COMMANDS.iter().find(|meta| meta.name == wanted) {
            Some(meta) => format!("`{}`: {}\nUsage: `{}`", meta.name, meta.desc, meta.usage),
            None => format!("Unknown command `{wanted}`. Try `!help`."),
        };

        http.create_message(msg.channel_id).content(&reply).await?;
        return Ok(());
    }

    let mut lines = vec!["Available commands:".to_owned()];

    // The registry is already grouped by category.
    let mut categories: Vec<&str> = COMMANDS.iter().map(|meta| meta.category).collect();
    categories.dedup();

    for category in categories {
        lines.push(format!("**{category}**"));
        for meta in COMMANDS.iter().filter(|meta| meta.category == category) {
            lines.push(format!("`{}`: {}", meta.usage, meta.desc));
        }
    }

    http.create_message(msg.channel_id)
        .content(&lines.join("\n"))
        .await?;

    Ok(())
}
