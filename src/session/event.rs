//! Events produced by a reading session.
//!
//! The presentation layer drains these after each trigger and animates
//! accordingly. They carry ids and orientations, not full cards; the
//! catalog resolves ids when the view needs text.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::draw::{Orientation, Reading, ReadingId, SpreadKind};

/// Something that happened to the current reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReadingEvent {
    /// A new reading was drawn, all positions face down.
    Started {
        reading: ReadingId,
        spread: Option<SpreadKind>,
        cards: Vec<(CardId, Orientation)>,
    },

    /// A position was newly revealed.
    PositionRevealed {
        reading: ReadingId,
        index: usize,
        fully_revealed: bool,
    },

    /// The results delay elapsed; the reading is now on display.
    Completed { reading: ReadingId },

    /// The session returned to idle. `reading` is the discarded reading, if
    /// there was one.
    Reset { reading: Option<ReadingId> },
}

impl ReadingEvent {
    pub(crate) fn started(reading: &Reading) -> Self {
        ReadingEvent::Started {
            reading: reading.id(),
            spread: reading.spread(),
            cards: reading
                .cards()
                .iter()
                .map(|c| (c.card.id.clone(), c.orientation))
                .collect(),
        }
    }

    /// The reading this event concerns.
    #[must_use]
    pub fn reading(&self) -> Option<ReadingId> {
        match self {
            ReadingEvent::Started { reading, .. }
            | ReadingEvent::PositionRevealed { reading, .. }
            | ReadingEvent::Completed { reading } => Some(*reading),
            ReadingEvent::Reset { reading } => *reading,
        }
    }
}
