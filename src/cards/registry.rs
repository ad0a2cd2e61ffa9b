//! Card catalog.
//!
//! The `Catalog` is the read-only deck every reading draws from. It keeps
//! cards in document order (the glossary shows them that way) and an id
//! index for lookup. Cards are shared as `Arc<Card>` so drawn readings can
//! hold them without borrowing the catalog.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::core::CatalogError;

use super::definition::{Arcana, Card, CardId, Suit};
use super::filter::{matches_query, CardFilter};

/// Catalog document version this crate understands.
pub const CATALOG_VERSION: u32 = 1;

/// The bundled 78-card deck.
const STANDARD_DECK: &str = include_str!("../../data/tarot-cards.json");

#[derive(Deserialize)]
struct CatalogDocument {
    version: u32,
    cards: Vec<Card>,
}

/// Read-only card catalog.
///
/// ## Example
///
/// ```
/// use rust_tarot::cards::{Catalog, CardFilter};
///
/// let catalog = Catalog::standard().unwrap();
/// assert_eq!(catalog.len(), 78);
///
/// let fool = catalog.get("major-0").unwrap();
/// assert_eq!(fool.name, "The Fool");
///
/// let loving: Vec<_> = catalog.search("love", CardFilter::All).collect();
/// assert!(!loving.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    version: u32,
    cards: Vec<Arc<Card>>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Load the bundled standard deck.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json(STANDARD_DECK)
    }

    /// Load a catalog from a versioned JSON document
    /// (`{ "version": 1, "cards": [...] }`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        if doc.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: doc.version,
                supported: CATALOG_VERSION,
            });
        }
        Self::from_cards(doc.cards)
    }

    /// Build a catalog from cards, validating ids and suits.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        let mut stored = Vec::with_capacity(cards.len());

        for card in cards {
            if !card.suit_matches_arcana() {
                return Err(CatalogError::SuitMismatch(card.id.0));
            }
            if index.insert(card.id.clone(), stored.len()).is_some() {
                return Err(CatalogError::DuplicateId(card.id.0));
            }
            stored.push(Arc::new(card));
        }

        debug!(cards = stored.len(), "card catalog loaded");

        Ok(Self {
            version: CATALOG_VERSION,
            cards: stored,
            index,
        })
    }

    /// Document version the catalog was loaded from.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Card>> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Get a card by catalog position.
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<&Arc<Card>> {
        self.cards.get(position)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// All major arcana cards.
    pub fn major_arcana(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter().filter(|c| c.arcana == Arcana::Major)
    }

    /// All cards of one suit.
    pub fn by_suit(&self, suit: Suit) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter().filter(move |c| c.suit == Some(suit))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Glossary search: cards passing `filter` whose name or a keyword
    /// contains `query` (case-insensitive), in catalog order.
    pub fn search<'a>(&'a self, query: &'a str, filter: CardFilter) -> impl Iterator<Item = &'a Arc<Card>> + 'a {
        self.cards
            .iter()
            .filter(move |c| filter.matches(c) && matches_query(c, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_deck() -> Vec<Card> {
        vec![
            Card::new("major-0", "The Fool", Arcana::Major).with_keywords(["Innocence"]),
            Card::new("cups-1", "Ace of Cups", Arcana::Minor)
                .with_suit(Suit::Cups)
                .with_keywords(["Love"]),
            Card::new("wands-1", "Ace of Wands", Arcana::Minor)
                .with_suit(Suit::Wands)
                .with_keywords(["Inspiration"]),
        ]
    }

    #[test]
    fn test_from_cards_and_get() {
        let catalog = Catalog::from_cards(small_deck()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("cups-1").unwrap().name, "Ace of Cups");
        assert!(catalog.get("swords-1").is_none());
        assert!(catalog.contains("major-0"));
        assert_eq!(catalog.get_at(2).unwrap().id, CardId::new("wands-1"));
    }

    #[test]
    fn test_iteration_keeps_document_order() {
        let catalog = Catalog::from_cards(small_deck()).unwrap();
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["major-0", "cups-1", "wands-1"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut cards = small_deck();
        cards.push(Card::new("major-0", "Another Fool", Arcana::Major));

        let err = Catalog::from_cards(cards).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "major-0"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Catalog::from_cards(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_suit_mismatch_rejected() {
        let cards = vec![Card::new("cups-1", "Ace of Cups", Arcana::Minor)];
        assert!(matches!(Catalog::from_cards(cards), Err(CatalogError::SuitMismatch(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let err = Catalog::from_json(r#"{ "version": 2, "cards": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedVersion { found: 2, supported: 1 }));
    }

    #[test]
    fn test_filters() {
        let catalog = Catalog::from_cards(small_deck()).unwrap();

        assert_eq!(catalog.major_arcana().count(), 1);
        assert_eq!(catalog.by_suit(Suit::Cups).count(), 1);
        assert_eq!(catalog.by_suit(Suit::Swords).count(), 0);
        assert_eq!(catalog.find(|c| c.name.starts_with("Ace")).count(), 2);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::from_cards(small_deck()).unwrap();

        let aces: Vec<_> = catalog.search("ace", CardFilter::All).map(|c| c.id.as_str()).collect();
        assert_eq!(aces, ["cups-1", "wands-1"]);

        let wands: Vec<_> = catalog.search("ace", CardFilter::Suit(Suit::Wands)).collect();
        assert_eq!(wands.len(), 1);

        assert_eq!(catalog.search("inspir", CardFilter::All).count(), 1);
        assert_eq!(catalog.search("", CardFilter::Major).count(), 1);
    }

    #[test]
    fn test_standard_deck_loads() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.version(), CATALOG_VERSION);
        assert_eq!(catalog.len(), 78);
    }
}
