//! Presentation-level reading session.
//!
//! Drives the draw engine from user triggers (begin, flip, reset) and
//! reports what happened as `ReadingEvent`s. Time is supplied by the
//! caller, so the whole state machine is synchronous and deterministic.

mod controller;
mod event;
mod prefs;
mod timer;

pub use controller::{Phase, ReadingSession};
pub use event::ReadingEvent;
pub use prefs::{
    MemoryStore, PreferenceStore, Preferences, Theme, REDUCE_MOTION_KEY, REVERSALS_KEY, SPREAD_KEY, THEME_KEY,
};
pub use timer::ScheduledTransition;
