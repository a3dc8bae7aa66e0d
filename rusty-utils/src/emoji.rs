use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::{
    channel::message::EmojiReactionType,
    id::{Id, marker::EmojiMarker},
};

/// An emoji a user can react with to answer a confirmation prompt.
///
/// Owned so it can live inside long-lived options and reaction filters.
/// Unicode emojis compare by name, custom (guild) emojis by id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfirmEmoji {
    Unicode(String),
    Custom {
        id: Id<EmojiMarker>,
        name: Option<String>,
    },
}

impl ConfirmEmoji {
    /// Build a unicode emoji from its literal form (for example `"✅"`).
    pub fn unicode(name: impl Into<String>) -> Self {
        Self::Unicode(name.into())
    }

    /// Borrow this emoji as the request type expected by the HTTP client.
    pub fn request(&self) -> RequestReactionType<'_> {
        match self {
            Self::Unicode(name) => RequestReactionType::Unicode { name },
            Self::Custom { id, name } => RequestReactionType::Custom {
                id: *id,
                name: name.as_deref(),
            },
        }
    }

    /// Whether a received reaction emoji is this emoji.
    pub fn matches(&self, emoji: &EmojiReactionType) -> bool {
        match (self, emoji) {
            (Self::Unicode(expected), EmojiReactionType::Unicode { name }) => expected == name,
            (Self::Custom { id: expected, .. }, EmojiReactionType::Custom { id, .. }) => {
                expected == id
            }
            _ => false,
        }
    }
}

/// Parse an emoji from a raw configuration value.
///
/// Accepts a custom-emoji mention (`<:name:id>`, `<a:name:id>`) or a plain
/// unicode emoji literal.
pub fn parse_reaction_emoji(raw: &str) -> Option<ConfirmEmoji> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        let inner = trimmed.strip_prefix('<')?.strip_suffix('>')?;
        let inner = inner.strip_prefix('a').unwrap_or(inner);

        let mut parts = inner.strip_prefix(':')?.splitn(2, ':');
        let name = parts.next().filter(|name| !name.is_empty())?;
        let id = parts.next()?.parse::<u64>().ok()?;

        return Some(ConfirmEmoji::Custom {
            id: Id::new(id),
            name: Some(name.to_owned()),
        });
    }

    if trimmed.contains(char::is_whitespace) {
        return None;
    }

    Some(ConfirmEmoji::Unicode(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unicode_literal() {
        assert_eq!(
            parse_reaction_emoji("✅"),
            Some(ConfirmEmoji::Unicode("✅".to_owned()))
        );
    }

    #[test]
    fn parses_custom_mention() {
        assert_eq!(
            parse_reaction_emoji("<:approve:123456789>"),
            Some(ConfirmEmoji::Custom {
                id: Id::new(123_456_789),
                name: Some("approve".to_owned()),
            })
        );
    }

    #[test]
    fn parses_animated_custom_mention() {
        assert_eq!(
            parse_reaction_emoji("<a:party:42>"),
            Some(ConfirmEmoji::Custom {
                id: Id::new(42),
                name: Some("party".to_owned()),
            })
        );
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_reaction_emoji(""), None);
        assert_eq!(parse_reaction_emoji("   "), None);
        assert_eq!(parse_reaction_emoji("<:noid:>"), None);
        assert_eq!(parse_reaction_emoji("<::42>"), None);
        assert_eq!(parse_reaction_emoji("<approve:42>"), None);
        assert_eq!(parse_reaction_emoji("two words"), None);
    }

    #[test]
    fn unicode_matches_by_name() {
        let emoji = ConfirmEmoji::unicode("✅");
        assert!(emoji.matches(&EmojiReactionType::Unicode {
            name: "✅".to_owned(),
        }));
        assert!(!emoji.matches(&EmojiReactionType::Unicode {
            name: "❌".to_owned(),
        }));
    }

    #[test]
    fn custom_matches_by_id_not_name() {
        let emoji = ConfirmEmoji::Custom {
            id: Id::new(42),
            name: Some("approve".to_owned()),
        };
        assert!(emoji.matches(&EmojiReactionType::Custom {
            animated: false,
            id: Id::new(42),
            name: Some("renamed".to_owned()),
        }));
        assert!(!emoji.matches(&EmojiReactionType::Custom {
            animated: false,
            id: Id::new(43),
            name: Some("approve".to_owned()),
        }));
    }

    #[test]
    fn kinds_never_cross_match() {
        let unicode = ConfirmEmoji::unicode("approve");
        assert!(!unicode.matches(&EmojiReactionType::Custom {
            animated: false,
            id: Id::new(42),
            name: Some("approve".to_owned()),
        }));
    }
}
