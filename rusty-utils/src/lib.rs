/// Owned emoji type for confirmation reactions, with parsing and matching.
pub mod emoji;
/// Permission helper utilities.
pub mod permissions;
/// Reaction helpers for confirmation prompts.
pub mod reaction;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Shared time helpers.
pub mod time;
