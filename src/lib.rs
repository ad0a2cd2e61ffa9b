//! # rust-tarot
//!
//! Card catalog, draw engine and reading session for tarot readings.
//!
//! ## Design Principles
//!
//! 1. **Immutable catalog**: Cards are loaded once from a versioned document
//!    and shared read-only. Readings hold `Arc<Card>`, never copies.
//!
//! 2. **Injected randomness**: Every draw takes a `ReadingRng`. Same seed,
//!    same reading.
//!
//! 3. **No hidden timers**: The delay before results is a value the session
//!    owns and cancels. Callers report time; nothing fires behind their back.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, draw policy configuration
//! - `cards`: Card definitions, catalog, glossary search
//! - `draw`: Spread sampling, readings and reveals
//! - `session`: Idle/Drawing/Displayed state machine, events, preferences

pub mod core;
pub mod cards;
pub mod draw;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ReadingRng, ReadingRngState,
    DrawConfig, DEFAULT_REVERSAL_PROBABILITY, DEFAULT_REVEAL_DELAY_MS,
    DrawError, CatalogError, ConfigError,
};

pub use crate::cards::{Arcana, Card, CardFilter, CardId, Catalog, Suit};

pub use crate::draw::{
    draw_spread, DrawEngine, DrawnCard, Orientation, Reading, ReadingId, RevealOutcome, SpreadKind,
};

pub use crate::session::{
    MemoryStore, Phase, PreferenceStore, Preferences, ReadingEvent, ReadingSession,
    ScheduledTransition, Theme,
};
