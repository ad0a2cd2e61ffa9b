//! Error types.
//!
//! Draw errors are contract violations by the caller (a bad spread size or
//! position index). They are returned, never swallowed, so integration bugs
//! surface immediately.

use thiserror::Error;

/// Errors from the draw engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Spread size was zero or larger than the catalog.
    #[error("invalid spread size {requested}: catalog holds {available} cards")]
    InvalidArgument {
        /// Requested number of cards.
        requested: usize,
        /// Cards available in the catalog.
        available: usize,
    },

    /// Position index outside the reading.
    #[error("position {index} out of range for reading of {len} cards")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Number of positions in the reading.
        len: usize,
    },
}

/// Errors loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("catalog contains no cards")]
    Empty,

    #[error("duplicate card id `{0}`")]
    DuplicateId(String),

    #[error("card `{0}` has a suit that does not match its arcana")]
    SuitMismatch(String),
}

/// Errors in draw policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reversal probability {0} is outside [0, 1]")]
    ReversalProbability(f64),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
