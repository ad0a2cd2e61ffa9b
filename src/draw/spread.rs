//! Spread kinds and their position labels.

use serde::{Deserialize, Serialize};

/// How many cards a reading draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadKind {
    /// One card.
    #[default]
    Single,
    /// Three cards: past, present, future.
    Triple,
}

impl SpreadKind {
    /// Number of positions in the spread.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            SpreadKind::Single => 1,
            SpreadKind::Triple => 3,
        }
    }

    /// Label for a position, if the spread names its positions.
    #[must_use]
    pub fn position_label(self, index: usize) -> Option<&'static str> {
        match self {
            SpreadKind::Single => None,
            SpreadKind::Triple => ["Past", "Present", "Future"].get(index).copied(),
        }
    }

    /// Storage key used by preference stores.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpreadKind::Single => "single",
            SpreadKind::Triple => "triple",
        }
    }

    /// Parse a storage key.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(SpreadKind::Single),
            "triple" => Some(SpreadKind::Triple),
            _ => None,
        }
    }
}
