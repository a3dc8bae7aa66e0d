use twilight_model::channel::message::EmojiReactionType;

use rusty_utils::emoji::ConfirmEmoji;

/// The invoking user's answer to a confirmation prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfirmationAction {
    Confirm,
    Decline,
}

/// Classify a received reaction emoji against a prompt's decision pair.
///
/// The confirm emoji is checked first, so a degenerate pair using the same
/// emoji twice resolves as a confirmation.
pub fn classify_reaction(
    emoji: &EmojiReactionType,
    confirm: &ConfirmEmoji,
    decline: &ConfirmEmoji,
) -> Option<ConfirmationAction> {
    if confirm.matches(emoji) {
        return Some(ConfirmationAction::Confirm);
    }

    if decline.matches(emoji) {
        return Some(ConfirmationAction::Decline);
    }

    None
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;

    fn unicode(name: &str) -> EmojiReactionType {
        EmojiReactionType::Unicode {
            name: name.to_owned(),
        }
    }

    #[test]
    fn classifies_the_unicode_pair() {
        let confirm = ConfirmEmoji::unicode("✅");
        let decline = ConfirmEmoji::unicode("❌");

        assert_eq!(
            classify_reaction(&unicode("✅"), &confirm, &decline),
            Some(ConfirmationAction::Confirm)
        );
        assert_eq!(
            classify_reaction(&unicode("❌"), &confirm, &decline),
            Some(ConfirmationAction::Decline)
        );
        assert_eq!(classify_reaction(&unicode("🤔"), &confirm, &decline), None);
    }

    #[test]
    fn classifies_custom_emojis_by_id() {
        let confirm = ConfirmEmoji::Custom {
            id: Id::new(42),
            name: Some("approve".to_owned()),
        };
        let decline = ConfirmEmoji::unicode("❌");

        let received = EmojiReactionType::Custom {
            animated: false,
            id: Id::new(42),
            name: None,
        };

        assert_eq!(
            classify_reaction(&received, &confirm, &decline),
            Some(ConfirmationAction::Confirm)
        );
    }

    #[test]
    fn confirm_wins_a_degenerate_pair() {
        let emoji = ConfirmEmoji::unicode("👍");

        assert_eq!(
            classify_reaction(&unicode("👍"), &emoji, &emoji),
            Some(ConfirmationAction::Confirm)
        );
    }
}
