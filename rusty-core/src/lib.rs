use std::sync::Arc;
use std::time::Duration;

use twilight_http::Client;
use twilight_standby::Standby;

use rusty_utils::emoji::ConfirmEmoji;

/// Default confirmation window.
pub const DEFAULT_CONFIRM_TIMEOUT_SECS: u64 = 30;

/// Bot-wide defaults for confirmation prompts.
///
/// Commands start from this policy and may override any part per prompt.
#[derive(Clone, Debug)]
pub struct ConfirmPolicy {
    pub timeout: Duration,
    pub confirm: ConfirmEmoji,
    pub decline: ConfirmEmoji,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_CONFIRM_TIMEOUT_SECS),
            confirm: ConfirmEmoji::unicode("✅"),
            decline: ConfirmEmoji::unicode("❌"),
        }
    }
}

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state and
/// the small confirmation policy.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub standby: Arc<Standby>,
    pub confirm: ConfirmPolicy,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, standby: Arc<Standby>, confirm: ConfirmPolicy) -> Self {
        Self {
            http,
            standby,
            confirm,
        }
    }
}
