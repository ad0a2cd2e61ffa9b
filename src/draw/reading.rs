//! Drawn cards and reading state.
//!
//! A `Reading` is created face-down by the engine. The only thing that
//! changes afterwards is which positions have been revealed, and a
//! position can only go from hidden to revealed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::DrawError;

use super::spread::SpreadKind;

/// Which way up a card was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

/// A card as drawn into a reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Arc<Card>,
    pub orientation: Orientation,
}

impl DrawnCard {
    /// Create a drawn card.
    #[must_use]
    pub fn new(card: Arc<Card>, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }

    /// The interpretation matching the orientation.
    #[must_use]
    pub fn meaning(&self) -> &str {
        match self.orientation {
            Orientation::Upright => &self.card.upright,
            Orientation::Reversed => &self.card.reversed,
        }
    }
}

/// Identifies one reading within a session.
///
/// Lets the session tell a flip for the current reading apart from a late
/// flip aimed at one that was already reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReadingId(pub u64);

impl ReadingId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reading({})", self.0)
    }
}

/// Result of revealing a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Position newly revealed; `remaining` positions are still hidden.
    Revealed { remaining: usize },
    /// Position newly revealed and it was the last hidden one.
    Completed,
    /// Position was already revealed. Nothing changed.
    AlreadyRevealed,
}

impl RevealOutcome {
    /// Did this reveal make the reading fully revealed?
    #[must_use]
    pub fn completed_reading(self) -> bool {
        matches!(self, RevealOutcome::Completed)
    }
}

/// An ordered set of drawn cards plus reveal progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    id: ReadingId,
    cards: SmallVec<[DrawnCard; 3]>,
    revealed: SmallVec<[bool; 3]>,
}

impl Reading {
    /// Create a face-down reading. Card uniqueness is the engine's job.
    pub(crate) fn new(cards: SmallVec<[DrawnCard; 3]>) -> Self {
        let revealed = SmallVec::from_elem(false, cards.len());
        Self {
            id: ReadingId::default(),
            cards,
            revealed,
        }
    }

    /// Tag the reading with an id.
    #[must_use]
    pub fn with_id(mut self, id: ReadingId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> ReadingId {
        self.id
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The spread this reading's size corresponds to, if any.
    #[must_use]
    pub fn spread(&self) -> Option<SpreadKind> {
        match self.len() {
            1 => Some(SpreadKind::Single),
            3 => Some(SpreadKind::Triple),
            _ => None,
        }
    }

    /// Drawn cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&DrawnCard> {
        self.cards.get(index)
    }

    /// Whether a position is revealed. Out-of-range positions are not.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Reveal one position.
    ///
    /// Revealing a position twice is a no-op. Returns `Completed` only on
    /// the call that reveals the last hidden position.
    pub fn reveal(&mut self, index: usize) -> Result<RevealOutcome, DrawError> {
        let len = self.len();
        let slot = self
            .revealed
            .get_mut(index)
            .ok_or(DrawError::OutOfRange { index, len })?;

        if *slot {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        *slot = true;

        let remaining = len - self.revealed_count();
        if remaining == 0 {
            Ok(RevealOutcome::Completed)
        } else {
            Ok(RevealOutcome::Revealed { remaining })
        }
    }

    /// Positions with their labels, for the results view.
    pub fn positions(&self) -> impl Iterator<Item = (Option<&'static str>, &DrawnCard)> + '_ {
        let spread = self.spread();
        self.cards
            .iter()
            .enumerate()
            .map(move |(i, drawn)| (spread.and_then(|s| s.position_label(i)), drawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;

    fn card(id: &str) -> Arc<Card> {
        Arc::new(
            Card::new(id, id.to_uppercase(), Arcana::Major)
                .with_meanings(format!("{id} upright"), format!("{id} reversed")),
        )
    }

    fn reading(ids: &[&str]) -> Reading {
        Reading::new(
            ids.iter()
                .map(|id| DrawnCard::new(card(id), Orientation::Upright))
                .collect(),
        )
    }

    #[test]
    fn test_new_reading_is_face_down() {
        let r = reading(&["a", "b", "c"]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.revealed_count(), 0);
        assert!(!r.is_fully_revealed());
        assert!((0..3).all(|i| !r.is_revealed(i)));
    }

    #[test]
    fn test_reveal_sequence() {
        let mut r = reading(&["a", "b", "c"]);

        assert_eq!(r.reveal(0), Ok(RevealOutcome::Revealed { remaining: 2 }));
        assert_eq!(r.reveal(2), Ok(RevealOutcome::Revealed { remaining: 1 }));
        assert_eq!(r.reveal(1), Ok(RevealOutcome::Completed));
        assert!(r.is_fully_revealed());
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut r = reading(&["a", "b"]);
        r.reveal(0).unwrap();
        let snapshot = r.clone();

        assert_eq!(r.reveal(0), Ok(RevealOutcome::AlreadyRevealed));
        assert_eq!(r, snapshot);
    }

    #[test]
    fn test_reveal_after_completion_does_not_complete_again() {
        let mut r = reading(&["a"]);
        assert!(r.reveal(0).unwrap().completed_reading());
        assert!(!r.reveal(0).unwrap().completed_reading());
    }

    #[test]
    fn test_reveal_out_of_range() {
        let mut r = reading(&["a", "b", "c"]);
        assert_eq!(r.reveal(3), Err(DrawError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(r.revealed_count(), 0);
    }

    #[test]
    fn test_meaning_follows_orientation() {
        let up = DrawnCard::new(card("x"), Orientation::Upright);
        let down = DrawnCard::new(card("x"), Orientation::Reversed);

        assert_eq!(up.meaning(), "x upright");
        assert_eq!(down.meaning(), "x reversed");
        assert!(down.is_reversed());
    }

    #[test]
    fn test_positions_labels() {
        let triple = reading(&["a", "b", "c"]);
        let labels: Vec<_> = triple.positions().map(|(label, _)| label).collect();
        assert_eq!(labels, [Some("Past"), Some("Present"), Some("Future")]);

        let single = reading(&["a"]);
        assert_eq!(single.spread(), Some(SpreadKind::Single));
        assert_eq!(single.positions().next().unwrap().0, None);
    }

    #[test]
    fn test_reading_id() {
        let r = reading(&["a"]).with_id(ReadingId::new(7));
        assert_eq!(r.id(), ReadingId::new(7));
        assert_eq!(format!("{}", r.id()), "Reading(7)");
    }
}
