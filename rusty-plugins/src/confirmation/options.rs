use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use twilight_model::{channel::Message, gateway::payload::incoming::MessageCreate};

use rusty_core::{ConfirmPolicy, Context};
use rusty_utils::emoji::ConfirmEmoji;
use rusty_utils::reaction::replace_with_notice;

/// Default prompt shown when a command asks for confirmation.
pub const DEFAULT_PROMPT: &str = "Are you sure you want to proceed?";
/// Default notice when the window elapses without an answer.
pub const DEFAULT_TIMEOUT_NOTICE: &str = "Confirmation timed out.";
/// Default notice when the invoking user declines.
pub const DEFAULT_CANCEL_NOTICE: &str = "Confirmation cancelled.";

/// A value fixed up front or computed from the invoking message.
#[derive(Clone)]
pub enum Resolvable<T> {
    Value(T),
    Resolver(Arc<dyn Fn(&MessageCreate) -> T + Send + Sync>),
}

impl<T> Resolvable<T> {
    /// Compute the value from the invoking message on every resolution.
    pub fn with(resolver: impl Fn(&MessageCreate) -> T + Send + Sync + 'static) -> Self {
        Self::Resolver(Arc::new(resolver))
    }
}

impl<T: Clone> Resolvable<T> {
    /// Produce the value for one invocation.
    pub fn resolve(&self, msg: &MessageCreate) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Resolver(resolver) => resolver(msg),
        }
    }
}

impl From<&str> for Resolvable<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for Resolvable<String> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<ConfirmEmoji> for Resolvable<ConfirmEmoji> {
    fn from(value: ConfirmEmoji) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// The confirm/decline reaction pair seeded onto a prompt.
#[derive(Clone, Debug)]
pub struct EmojiPair {
    pub confirm: Resolvable<ConfirmEmoji>,
    pub decline: Resolvable<ConfirmEmoji>,
}

impl EmojiPair {
    /// Produce both emojis for one invocation.
    pub fn resolve(&self, msg: &MessageCreate) -> (ConfirmEmoji, ConfirmEmoji) {
        (self.confirm.resolve(msg), self.decline.resolve(msg))
    }
}

impl Default for EmojiPair {
    fn default() -> Self {
        let policy = ConfirmPolicy::default();

        Self {
            confirm: Resolvable::Value(policy.confirm),
            decline: Resolvable::Value(policy.decline),
        }
    }
}

type HandlerFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// Boxed follow-up invoked with the context, the invoking message, and the
/// prompt message that collected the answer.
pub type OutcomeHandler = Arc<dyn Fn(Context, MessageCreate, Message) -> HandlerFuture + Send + Sync>;

/// What to do once a confirmation reaches a terminal outcome.
#[derive(Clone)]
pub enum OutcomeAction {
    /// Edit the prompt to a terminal notice and strip its reactions.
    Notice(Resolvable<String>),
    /// Run an arbitrary follow-up.
    Handler(OutcomeHandler),
}

impl OutcomeAction {
    /// Terminal notice edited into the prompt message.
    pub fn notice(text: impl Into<Resolvable<String>>) -> Self {
        Self::Notice(text.into())
    }

    /// Arbitrary async follow-up.
    pub fn handler<F, Fut>(run: F) -> Self
    where
        F: Fn(Context, MessageCreate, Message) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self::Handler(Arc::new(move |ctx, msg, prompt| -> HandlerFuture {
            Box::pin(run(ctx, msg, prompt))
        }))
    }

    pub(crate) async fn apply(
        &self,
        ctx: &Context,
        msg: &MessageCreate,
        prompt: &Message,
    ) -> anyhow::Result<()> {
        match self {
            Self::Notice(text) => {
                let content = text.resolve(msg);
                replace_with_notice(&ctx.http, prompt.channel_id, prompt.id, &content).await
            }
            Self::Handler(run) => run(ctx.clone(), msg.clone(), prompt.clone()).await,
        }
    }
}

impl From<&str> for OutcomeAction {
    fn from(value: &str) -> Self {
        Self::notice(value)
    }
}

impl From<String> for OutcomeAction {
    fn from(value: String) -> Self {
        Self::notice(value)
    }
}

impl fmt::Debug for OutcomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notice(text) => f.debug_tuple("Notice").field(text).finish(),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

fn delete_prompt_handler() -> OutcomeAction {
    OutcomeAction::handler(|ctx, _msg, prompt| async move {
        // The prompt may already be gone; nothing depends on it after this.
        if let Err(source) = ctx.http.delete_message(prompt.channel_id, prompt.id).await {
            debug!(?source, "failed to delete confirmation prompt");
        }

        Ok(())
    })
}

/// Options for one confirmation gate.
#[derive(Clone, Debug)]
pub struct ConfirmationOptions {
    pub timeout: Duration,
    pub prompt: Resolvable<String>,
    pub emojis: EmojiPair,
    pub on_timeout: OutcomeAction,
    pub on_cancel: OutcomeAction,
    pub on_confirm: OutcomeAction,
}

impl Default for ConfirmationOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(rusty_core::DEFAULT_CONFIRM_TIMEOUT_SECS),
            prompt: DEFAULT_PROMPT.into(),
            emojis: EmojiPair::default(),
            on_timeout: OutcomeAction::notice(DEFAULT_TIMEOUT_NOTICE),
            on_cancel: OutcomeAction::notice(DEFAULT_CANCEL_NOTICE),
            on_confirm: delete_prompt_handler(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let options = ConfirmationOptions::default();

        assert_eq!(options.timeout, Duration::from_secs(30));

        match &options.prompt {
            Resolvable::Value(text) => assert_eq!(text, DEFAULT_PROMPT),
            other => panic!("unexpected prompt source: {other:?}"),
        }

        match (&options.emojis.confirm, &options.emojis.decline) {
            (Resolvable::Value(confirm), Resolvable::Value(decline)) => {
                assert_eq!(confirm, &ConfirmEmoji::unicode("✅"));
                assert_eq!(decline, &ConfirmEmoji::unicode("❌"));
            }
            other => panic!("unexpected emoji sources: {other:?}"),
        }

        match &options.on_timeout {
            OutcomeAction::Notice(Resolvable::Value(text)) => {
                assert_eq!(text, DEFAULT_TIMEOUT_NOTICE);
            }
            other => panic!("unexpected timeout outcome: {other:?}"),
        }

        match &options.on_cancel {
            OutcomeAction::Notice(Resolvable::Value(text)) => {
                assert_eq!(text, DEFAULT_CANCEL_NOTICE);
            }
            other => panic!("unexpected cancel outcome: {other:?}"),
        }

        // Confirmed prompts are deleted rather than edited.
        assert!(matches!(&options.on_confirm, OutcomeAction::Handler(_)));
    }

    #[test]
    fn text_conversions_produce_fixed_values() {
        match Resolvable::from("take care") {
            Resolvable::Value(text) => assert_eq!(text, "take care"),
            other => panic!("unexpected source: {other:?}"),
        }

        match OutcomeAction::from("done".to_owned()) {
            OutcomeAction::Notice(Resolvable::Value(text)) => assert_eq!(text, "done"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
