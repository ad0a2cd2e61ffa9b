//! Core types shared by the catalog, engine and session: RNG, errors and
//! draw policy configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DrawConfig, DEFAULT_REVEAL_DELAY_MS, DEFAULT_REVERSAL_PROBABILITY};
pub use error::{CatalogError, ConfigError, DrawError};
pub use rng::{ReadingRng, ReadingRngState};
