//! Card definitions - static catalog data.
//!
//! A `Card` holds everything the catalog knows about one card: its name,
//! rank label, arcana and suit, keywords and both interpretations.
//! Which way up a card was drawn is not part of the card; that lives in
//! `DrawnCard`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog card (e.g. `major-0`, `cups-11`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Major or minor arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

/// Minor arcana suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cups,
    Wands,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Wands, Suit::Swords, Suit::Pentacles];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Wands => "Wands",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_tarot::cards::{Arcana, Card};
///
/// let fool = Card::new("major-0", "The Fool", Arcana::Major)
///     .with_number("0")
///     .with_keywords(["New Beginnings", "Innocence"])
///     .with_meanings("A fresh start.", "Recklessness.");
///
/// assert!(fool.has_keyword("innocence"));
/// assert_eq!(fool.suit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rank label ("0", "XXI", "Ace", "Page", ...).
    pub number: String,

    pub arcana: Arcana,

    /// Present exactly for minor arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,

    pub keywords: Vec<String>,

    /// Upright interpretation.
    pub upright: String,

    /// Reversed interpretation.
    pub reversed: String,

    /// Visual accent reference (hex colour).
    pub accent: String,
}

impl Card {
    /// Create a card with empty text fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, arcana: Arcana) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            number: String::new(),
            arcana,
            suit: None,
            keywords: Vec::new(),
            upright: String::new(),
            reversed: String::new(),
            accent: String::new(),
        }
    }

    /// Set the rank label.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the suit.
    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Set the keyword tags.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set both interpretations.
    #[must_use]
    pub fn with_meanings(mut self, upright: impl Into<String>, reversed: impl Into<String>) -> Self {
        self.upright = upright.into();
        self.reversed = reversed.into();
        self
    }

    /// Set the accent colour.
    #[must_use]
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = accent.into();
        self
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// Case-insensitive exact keyword check.
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }

    /// Suit and arcana agree: minor cards carry a suit, major cards don't.
    pub(crate) fn suit_matches_arcana(&self) -> bool {
        match self.arcana {
            Arcana::Major => self.suit.is_none(),
            Arcana::Minor => self.suit.is_some(),
        }
    }
}
