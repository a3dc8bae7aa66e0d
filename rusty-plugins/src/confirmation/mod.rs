//! Reaction-based confirmation gate for the command pipeline.
//!
//! Replies to the invoking message with a prompt, seeds it with a
//! confirm/decline reaction pair, and waits for the invoking user's answer
//! within a configurable window. Confirmation lets the pipeline continue;
//! declining, or silence, stops it.

mod filter;
mod options;

pub use filter::{ConfirmationAction, classify_reaction};
pub use options::{
    ConfirmationOptions, DEFAULT_CANCEL_NOTICE, DEFAULT_PROMPT, DEFAULT_TIMEOUT_NOTICE, EmojiPair,
    OutcomeAction, OutcomeHandler, Resolvable,
};

use std::time::Duration;

use async_trait::async_trait;
use tokio::time;
use twilight_model::{
    gateway::payload::incoming::{MessageCreate, ReactionAdd},
    id::{
        Id,
        marker::{MessageMarker, UserMarker},
    },
};
use twilight_standby::Standby;

use rusty_core::{ConfirmPolicy, Context};
use rusty_utils::emoji::ConfirmEmoji;
use rusty_utils::reaction::add_decision_reactions;

use crate::{Plugin, PluginControl};

/// Pre-command gate asking the invoking user to confirm via reactions.
///
/// Every option is independently overridable; the defaults come from
/// [`ConfirmationOptions::default`].
#[derive(Clone, Debug, Default)]
pub struct Confirmation {
    options: ConfirmationOptions,
}

impl Confirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a bot-wide policy instead of the built-in defaults.
    pub fn from_policy(policy: &ConfirmPolicy) -> Self {
        Self::new()
            .timeout(policy.timeout)
            .emojis(policy.confirm.clone(), policy.decline.clone())
    }

    /// How long the invoking user has to answer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// The question asked in the reply prompt.
    pub fn prompt(mut self, prompt: impl Into<Resolvable<String>>) -> Self {
        self.options.prompt = prompt.into();
        self
    }

    /// The reaction pair offered as answers.
    pub fn emojis(
        mut self,
        confirm: impl Into<Resolvable<ConfirmEmoji>>,
        decline: impl Into<Resolvable<ConfirmEmoji>>,
    ) -> Self {
        self.options.emojis = EmojiPair {
            confirm: confirm.into(),
            decline: decline.into(),
        };
        self
    }

    /// Outcome when the window elapses without an answer.
    pub fn on_timeout(mut self, outcome: impl Into<OutcomeAction>) -> Self {
        self.options.on_timeout = outcome.into();
        self
    }

    /// Outcome when the invoking user declines.
    pub fn on_cancel(mut self, outcome: impl Into<OutcomeAction>) -> Self {
        self.options.on_cancel = outcome.into();
        self
    }

    /// Outcome when the invoking user confirms.
    pub fn on_confirm(mut self, outcome: impl Into<OutcomeAction>) -> Self {
        self.options.on_confirm = outcome.into();
        self
    }
}

#[async_trait]
impl Plugin for Confirmation {
    fn name(&self) -> &'static str {
        "confirmation"
    }

    async fn run(&self, ctx: &Context, msg: &MessageCreate) -> anyhow::Result<PluginControl> {
        let options = &self.options;

        let prompt_text = options.prompt.resolve(msg);
        let prompt = ctx
            .http
            .create_message(msg.channel_id)
            .reply(msg.id)
            .content(&prompt_text)
            .await?
            .model()
            .await?;

        let (confirm, decline) = options.emojis.resolve(msg);
        add_decision_reactions(&ctx.http, prompt.channel_id, prompt.id, &confirm, &decline)
            .await?;

        let decision = await_decision(
            &ctx.standby,
            prompt.id,
            msg.author.id,
            confirm.clone(),
            decline.clone(),
            options.timeout,
        )
        .await?;

        let Some(reaction) = decision else {
            options.on_timeout.apply(ctx, msg, &prompt).await?;
            return Ok(PluginControl::Stop);
        };

        match classify_reaction(&reaction.emoji, &confirm, &decline) {
            Some(ConfirmationAction::Confirm) => {
                options.on_confirm.apply(ctx, msg, &prompt).await?;
                Ok(PluginControl::Next)
            }
            Some(ConfirmationAction::Decline) => {
                options.on_cancel.apply(ctx, msg, &prompt).await?;
                Ok(PluginControl::Stop)
            }
            // The filter only admits the decision pair.
            None => Ok(PluginControl::Next),
        }
    }
}

/// Wait for the invoking user's decision reaction on a prompt message.
///
/// Returns `Ok(None)` when the window elapses without a qualifying
/// reaction. Reactions from other users, or with emojis outside the
/// decision pair, are ignored without consuming the wait.
pub async fn await_decision(
    standby: &Standby,
    prompt_id: Id<MessageMarker>,
    invoker_id: Id<UserMarker>,
    confirm: ConfirmEmoji,
    decline: ConfirmEmoji,
    window: Duration,
) -> anyhow::Result<Option<ReactionAdd>> {
    let wait = standby.wait_for_reaction(prompt_id, move |event: &ReactionAdd| {
        event.user_id == invoker_id
            && classify_reaction(&event.emoji, &confirm, &decline).is_some()
    });

    match time::timeout(window, wait).await {
        Ok(Ok(reaction)) => Ok(Some(reaction)),
        Ok(Err(source)) => Err(source.into()),
        Err(_elapsed) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_only_what_it_is_given() {
        let gate = Confirmation::new()
            .timeout(Duration::from_secs(5))
            .prompt("Wipe it all?")
            .on_confirm("Done.")
            .on_cancel("Kept.");

        assert_eq!(gate.options.timeout, Duration::from_secs(5));
        assert!(matches!(&gate.options.on_confirm, OutcomeAction::Notice(_)));
        assert!(matches!(&gate.options.on_cancel, OutcomeAction::Notice(_)));

        match &gate.options.prompt {
            Resolvable::Value(text) => assert_eq!(text, "Wipe it all?"),
            other => panic!("unexpected prompt source: {other:?}"),
        }

        match &gate.options.on_timeout {
            OutcomeAction::Notice(Resolvable::Value(text)) => {
                assert_eq!(text, DEFAULT_TIMEOUT_NOTICE);
            }
            other => panic!("unexpected timeout outcome: {other:?}"),
        }
    }

    #[test]
    fn policy_seeds_timeout_and_emojis() {
        let policy = ConfirmPolicy {
            timeout: Duration::from_secs(90),
            confirm: ConfirmEmoji::unicode("👍"),
            decline: ConfirmEmoji::unicode("👎"),
        };

        let gate = Confirmation::from_policy(&policy);

        assert_eq!(gate.options.timeout, Duration::from_secs(90));

        match (&gate.options.emojis.confirm, &gate.options.emojis.decline) {
            (Resolvable::Value(confirm), Resolvable::Value(decline)) => {
                assert_eq!(confirm, &ConfirmEmoji::unicode("👍"));
                assert_eq!(decline, &ConfirmEmoji::unicode("👎"));
            }
            other => panic!("unexpected emoji sources: {other:?}"),
        }
    }
}
