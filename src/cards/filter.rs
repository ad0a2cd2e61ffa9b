//! Glossary filtering and search.
//!
//! The glossary narrows the catalog by arcana or suit and by a free-text
//! query matched against card names and keywords.

use serde::{Deserialize, Serialize};

use super::definition::{Arcana, Card, Suit};

/// Which part of the deck to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardFilter {
    /// Every card.
    #[default]
    All,
    /// Major arcana only.
    Major,
    /// One minor arcana suit.
    Suit(Suit),
}

impl CardFilter {
    /// Filter options in display order.
    pub const OPTIONS: [CardFilter; 6] = [
        CardFilter::All,
        CardFilter::Major,
        CardFilter::Suit(Suit::Cups),
        CardFilter::Suit(Suit::Wands),
        CardFilter::Suit(Suit::Swords),
        CardFilter::Suit(Suit::Pentacles),
    ];

    /// Does `card` pass this filter?
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            CardFilter::All => true,
            CardFilter::Major => card.arcana == Arcana::Major,
            CardFilter::Suit(suit) => card.suit == Some(suit),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardFilter::All => "All",
            CardFilter::Major => "Major",
            CardFilter::Suit(suit) => suit.name(),
        }
    }
}

/// Case-insensitive substring match on the name or any keyword.
///
/// An empty (or all-whitespace) query matches every card.
#[must_use]
pub fn matches_query(card: &Card, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    card.name.to_lowercase().contains(&needle)
        || card.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
}
