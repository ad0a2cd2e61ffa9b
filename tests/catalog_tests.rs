//! Standard deck and glossary tests.

use std::collections::HashSet;

use rust_tarot::cards::{Arcana, CardFilter, Catalog, Suit};
use rust_tarot::core::CatalogError;

fn standard() -> Catalog {
    Catalog::standard().expect("bundled deck should load")
}

/// The bundled deck is a full 78-card tarot.
#[test]
fn test_standard_deck_shape() {
    let catalog = standard();

    assert_eq!(catalog.len(), 78);
    assert_eq!(catalog.major_arcana().count(), 22);
    for suit in Suit::ALL {
        assert_eq!(catalog.by_suit(suit).count(), 14, "{suit}");
    }

    let ids: HashSet<_> = catalog.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), 78);
}

/// Every card carries text for both orientations and some keywords.
#[test]
fn test_standard_deck_content() {
    for card in standard().iter() {
        assert!(!card.name.is_empty(), "{}", card.id);
        assert!(!card.number.is_empty(), "{}", card.id);
        assert!(!card.keywords.is_empty(), "{}", card.id);
        assert!(!card.upright.is_empty(), "{}", card.id);
        assert!(!card.reversed.is_empty(), "{}", card.id);
        assert!(card.accent.starts_with('#'), "{}", card.id);
        assert_eq!(card.suit.is_some(), card.arcana == Arcana::Minor, "{}", card.id);
    }
}

/// Known cards resolve by id.
#[test]
fn test_lookup() {
    let catalog = standard();

    let fool = catalog.get("major-0").unwrap();
    assert_eq!(fool.name, "The Fool");
    assert_eq!(fool.number, "0");
    assert!(fool.is_major());

    let world = catalog.get("major-21").unwrap();
    assert_eq!(world.name, "The World");

    let ace = catalog.get("cups-1").unwrap();
    assert_eq!(ace.name, "Ace of Cups");
    assert_eq!(ace.suit, Some(Suit::Cups));

    assert!(catalog.get("major-22").is_none());
}

/// Glossary search matches names and keywords, ignoring case.
#[test]
fn test_glossary_search() {
    let catalog = standard();

    let cups: Vec<_> = catalog.search("", CardFilter::Suit(Suit::Cups)).collect();
    assert_eq!(cups.len(), 14);

    let fools: Vec<_> = catalog.search("FOOL", CardFilter::All).map(|c| c.id.as_str()).collect();
    assert_eq!(fools, ["major-0"]);

    // "Intuition" is a keyword on The High Priestess, not in its name.
    let intuitive: Vec<_> = catalog.search("intuition", CardFilter::Major).collect();
    assert!(intuitive.iter().any(|c| c.id.as_str() == "major-2"));

    assert_eq!(catalog.search("no such card", CardFilter::All).count(), 0);
}

/// Filters narrow search results without reordering them.
#[test]
fn test_search_preserves_catalog_order() {
    let catalog = standard();
    let all: Vec<_> = catalog.search("", CardFilter::All).map(|c| c.id.clone()).collect();
    let ordered: Vec<_> = catalog.iter().map(|c| c.id.clone()).collect();
    assert_eq!(all, ordered);
}

/// Catalog documents are validated on load.
#[test]
fn test_rejects_bad_documents() {
    assert!(matches!(
        Catalog::from_json(r#"{ "version": 1, "cards": [] }"#),
        Err(CatalogError::Empty)
    ));
    assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Parse(_))));

    let duplicate = r##"{ "version": 1, "cards": [
        { "id": "major-0", "name": "A", "number": "0", "arcana": "major", "keywords": [],
          "upright": "u", "reversed": "r", "accent": "#000000" },
        { "id": "major-0", "name": "B", "number": "I", "arcana": "major", "keywords": [],
          "upright": "u", "reversed": "r", "accent": "#000000" }
    ] }"##;
    assert!(matches!(Catalog::from_json(duplicate), Err(CatalogError::DuplicateId(_))));
}
