//! Pre-command plugins for the message-command pipeline.
//!
//! A plugin runs before a command body and signals whether the rest of the
//! pipeline should run. Commands wire plugins in front of their body with
//! [`run_plugins`].

/// Reaction-based confirmation gate.
pub mod confirmation;

use async_trait::async_trait;
use tracing::debug;
use twilight_model::gateway::payload::incoming::MessageCreate;

use rusty_core::Context;

/// Signal from a plugin deciding whether the command pipeline proceeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PluginControl {
    /// Run the remaining plugins and the command body.
    Next,
    /// Halt the pipeline; the command body must not run.
    Stop,
}

/// A pre-command hook in a command's execution pipeline.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Run the plugin for one command invocation.
    async fn run(&self, ctx: &Context, msg: &MessageCreate) -> anyhow::Result<PluginControl>;
}

/// Run a command's plugins in order, halting at the first `Stop`.
pub async fn run_plugins(
    ctx: &Context,
    msg: &MessageCreate,
    plugins: &[&dyn Plugin],
) -> anyhow::Result<PluginControl> {
    for plugin in plugins {
        if plugin.run(ctx, msg).await? == PluginControl::Stop {
            debug!(plugin = plugin.name(), "command pipeline stopped");
            return Ok(PluginControl::Stop);
        }
    }

    Ok(PluginControl::Next)
}
