//! Draw engine: random spreads and per-position reveals.
//!
//! ## Key Types
//!
//! - `draw_spread` / `DrawEngine`: sample distinct cards and orientations
//! - `Reading`: drawn cards plus which positions are revealed
//! - `RevealOutcome`: what a reveal did, including whether it completed
//!   the reading
//! - `SpreadKind`: single card or past/present/future

mod engine;
mod reading;
mod spread;

pub use engine::{draw_spread, DrawEngine};
pub use reading::{DrawnCard, Orientation, Reading, ReadingId, RevealOutcome};
pub use spread::SpreadKind;
